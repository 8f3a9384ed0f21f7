pub mod environment;
pub mod paths;
pub mod text;

pub use environment::{SourceDirs, get_claude_dir, get_cursor_dir};
pub use paths::{
    decode_project_dir, encode_project_dir, format_path_with_tilde, project_from_encoded_dir,
    project_from_folder_uri, project_from_workspace_id, unknown_project,
};
pub use text::{first_user_excerpt, truncate_chars};
