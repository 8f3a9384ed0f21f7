use std::borrow::Cow;
use std::env;
use std::path::Path;

use crate::models::Project;

const UNKNOWN_PROJECT: &str = "Unknown";
const FILE_SCHEME: &str = "file://";

/// Encodes a project path the way Claude names its project directories
///
/// Every `/` becomes `-`.
///
/// # Examples
///
/// ```
/// use chat_history_explorer::encode_project_dir;
///
/// assert_eq!(encode_project_dir("/Users/foo/bar"), "-Users-foo-bar");
/// ```
pub fn encode_project_dir(path: &str) -> String {
    path.replace('/', "-")
}

/// Decodes a Claude project directory name back to a path
///
/// Hyphens are indistinguishable from separators, so the decode is lossy for paths
/// that contain literal hyphens. Paths under `/Users/` keep their leading slash.
///
/// # Examples
///
/// ```
/// use chat_history_explorer::decode_project_dir;
///
/// assert_eq!(decode_project_dir("-Users-foo-dev-project"), "/Users/foo/dev/project");
/// assert_eq!(decode_project_dir("-home-foo-project"), "home/foo/project");
/// ```
pub fn decode_project_dir(encoded: &str) -> String {
    let replaced = encoded.replace('-', "/");
    let decoded = replaced.strip_prefix('/').unwrap_or(&replaced);

    if decoded.starts_with("Users/") { format!("/{}", decoded) } else { decoded.to_string() }
}

/// Project identity for a Claude project directory name
pub fn project_from_encoded_dir(encoded: &str) -> Project {
    let root_path = decode_project_dir(encoded);
    Project { name: last_segment(&root_path).to_string(), root_path }
}

/// Project identity for a Cursor workspace `folder` URI
///
/// Returns `None` unless the URI uses the local `file://` scheme.
pub fn project_from_folder_uri(folder: &str) -> Option<Project> {
    let root_path = folder.strip_prefix(FILE_SCHEME)?;
    let trimmed = root_path.strip_suffix('/').unwrap_or(root_path);

    Some(Project { name: last_segment(trimmed).to_string(), root_path: root_path.to_string() })
}

/// Fallback project for a Cursor workspace without usable metadata
pub fn project_from_workspace_id(workspace_id: &str) -> Project {
    Project { name: workspace_id.chars().take(8).collect(), root_path: String::new() }
}

/// Placeholder project for well-formed metadata that names no local folder
pub fn unknown_project() -> Project {
    Project { name: UNKNOWN_PROJECT.to_string(), root_path: String::new() }
}

fn last_segment(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => UNKNOWN_PROJECT,
    }
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_decode_users_path_keeps_leading_slash() {
        assert_eq!(decode_project_dir("-Users-a-dev-proj1"), "/Users/a/dev/proj1");
    }

    #[test]
    fn test_decode_non_users_path_is_relative() {
        assert_eq!(decode_project_dir("-home-a-proj"), "home/a/proj");
        assert_eq!(decode_project_dir("plain"), "plain");
    }

    #[test]
    fn test_decode_is_lossy_for_hyphens() {
        // my-app was a single segment on disk
        assert_eq!(decode_project_dir("-Users-a-my-app"), "/Users/a/my/app");
    }

    #[test]
    fn test_roundtrip_without_hyphens() {
        for original in ["/Users/test/Documents/project", "/Users/x", "a/b/c", "src"] {
            assert_eq!(decode_project_dir(&encode_project_dir(original)), original);
        }
    }

    #[test]
    fn test_project_from_encoded_dir() {
        let project = project_from_encoded_dir("-Users-a-dev-proj1");
        assert_eq!(project.name, "proj1");
        assert_eq!(project.root_path, "/Users/a/dev/proj1");

        let empty = project_from_encoded_dir("-");
        assert_eq!(empty.name, "Unknown");
        assert_eq!(empty.root_path, "");
    }

    #[test]
    fn test_project_from_folder_uri() {
        let project = project_from_folder_uri("file:///Users/a/code/webapp/").unwrap();
        assert_eq!(project.name, "webapp");
        assert_eq!(project.root_path, "/Users/a/code/webapp/");

        assert!(project_from_folder_uri("vscode-remote://ssh/home/a").is_none());
    }

    #[test]
    fn test_project_from_workspace_id_truncates() {
        let project = project_from_workspace_id("0123456789abcdef");
        assert_eq!(project.name, "01234567");
        assert!(project.root_path.is_empty());

        assert_eq!(project_from_workspace_id("abc").name, "abc");
    }

    #[test]
    fn test_format_path_with_tilde() {
        let path = PathBuf::from("/Users/testuser/.claude");
        assert_eq!(format_path_with_tilde_internal(&path, Some("/Users/testuser")), "~/.claude");

        let other = PathBuf::from("/opt/local/bin");
        assert_eq!(format_path_with_tilde_internal(&other, Some("/Users/testuser")), "/opt/local/bin");
    }
}
