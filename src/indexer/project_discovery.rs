use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use crate::store::STORE_FILENAME;

const SESSION_EXTENSION: &str = "jsonl";

/// Find every Claude session file under `<claude_dir>/projects/<project>/`
///
/// Only files directly inside a project directory with a `.jsonl` extension are
/// returned, sorted by project directory then file name.
///
/// # Returns
///
/// An empty Vec if the projects directory doesn't exist (not an error).
///
/// # Errors
///
/// Returns an error if the projects path exists but is not a readable directory.
/// Unreadable project subdirectories are logged and skipped.
pub fn discover_session_files(claude_dir: &Path) -> Result<Vec<PathBuf>> {
    let projects_dir = claude_dir.join("projects");
    if !scan_root_exists(&projects_dir)? {
        return Ok(Vec::new());
    }

    let mut sessions = Vec::new();
    for entry in WalkDir::new(&projects_dir).min_depth(1).max_depth(2).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| {
                    format!("Failed to read projects directory: {}", projects_dir.display())
                });
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable project entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if entry.depth() == 2
            && entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == SESSION_EXTENSION)
        {
            sessions.push(entry.into_path());
        }
    }

    Ok(sessions)
}

/// Find every Cursor workspace directory that holds a state store
///
/// Walks `<cursor_dir>/User/workspaceStorage/` one level deep, sorted by name.
///
/// # Returns
///
/// An empty Vec if the workspaceStorage directory doesn't exist (not an error).
///
/// # Errors
///
/// Returns an error if the workspaceStorage path exists but is not a readable
/// directory.
pub fn discover_workspaces(cursor_dir: &Path) -> Result<Vec<PathBuf>> {
    let storage_dir = cursor_dir.join("User").join("workspaceStorage");
    if !scan_root_exists(&storage_dir)? {
        return Ok(Vec::new());
    }

    let mut workspaces = Vec::new();
    for entry in WalkDir::new(&storage_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| {
                    format!("Failed to read workspace storage: {}", storage_dir.display())
                });
            }
            Err(e) => {
                tracing::debug!("Skipping unreadable workspace entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() && entry.path().join(STORE_FILENAME).is_file() {
            workspaces.push(entry.into_path());
        }
    }

    Ok(workspaces)
}

/// `Ok(false)` for a missing root, an error for anything that cannot be listed
fn scan_root_exists(dir: &Path) -> Result<bool> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(true),
        Ok(_) => bail!("Not a directory: {}", dir.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to read directory: {}", dir.display())),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_discover_sessions_missing_directory() {
        let temp = TempDir::new().unwrap();
        assert!(discover_session_files(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_sessions_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        let projects = temp.path().join("projects");
        touch(&projects.join("-Users-a-beta").join("b.jsonl"));
        touch(&projects.join("-Users-a-beta").join("a.jsonl"));
        touch(&projects.join("-Users-a-alpha").join("z.jsonl"));
        touch(&projects.join("-Users-a-alpha").join("notes.txt"));
        touch(&projects.join("-Users-a-alpha").join("nested").join("deep.jsonl"));
        touch(&projects.join("stray.jsonl"));

        let sessions = discover_session_files(temp.path()).unwrap();
        let names: Vec<String> = sessions
            .iter()
            .map(|p| {
                let project = p.parent().unwrap().file_name().unwrap().to_string_lossy();
                format!("{}/{}", project, p.file_name().unwrap().to_string_lossy())
            })
            .collect();

        assert_eq!(names, vec!["-Users-a-alpha/z.jsonl", "-Users-a-beta/a.jsonl", "-Users-a-beta/b.jsonl"]);
    }

    #[test]
    fn test_discover_workspaces_requires_store() {
        let temp = TempDir::new().unwrap();
        let storage = temp.path().join("User").join("workspaceStorage");
        touch(&storage.join("bbb").join(STORE_FILENAME));
        touch(&storage.join("aaa").join(STORE_FILENAME));
        touch(&storage.join("ccc").join("workspace.json"));
        touch(&storage.join("loose-file"));

        let workspaces = discover_workspaces(temp.path()).unwrap();
        let names: Vec<String> =
            workspaces.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect();
        assert_eq!(names, vec!["aaa", "bbb"]);
    }

    #[test]
    fn test_discover_workspaces_missing_directory() {
        let temp = TempDir::new().unwrap();
        assert!(discover_workspaces(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_rejects_file_in_place_of_directory() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("projects"));
        touch(&temp.path().join("User").join("workspaceStorage"));

        let err = discover_session_files(temp.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Not a directory"));
        assert!(discover_workspaces(temp.path()).is_err());
    }
}
