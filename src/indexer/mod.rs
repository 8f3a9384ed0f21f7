//! Ingestion of Claude and Cursor history into one chat collection
//!
//! - `project_discovery` finds session files and workspace directories.
//! - `builder` parses them, runs both sources concurrently, and sorts the merged
//!   collection newest first.
//!
//! Every call re-scans the filesystem; nothing is cached between calls.

pub mod builder;
pub mod project_discovery;

pub use builder::{Ingested, load_all_chats, load_claude_chats, load_cursor_chats, sort_newest_first};
pub use project_discovery::{discover_session_files, discover_workspaces};
