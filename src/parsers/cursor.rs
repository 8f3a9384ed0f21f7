use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::{Chat, Message, Project, Source, WorkspaceMetadata};
use crate::store::{PROMPTS_KEY, STORE_FILENAME, StoreOpener};
use crate::utils::{project_from_folder_uri, project_from_workspace_id, unknown_project};

const WORKSPACE_METADATA_FILENAME: &str = "workspace.json";

/// Parse one Cursor workspace directory into a chat
///
/// Cursor only records the prompts a user sent, so every message is a user
/// message and the chat is dated by the store file's modification time.
/// Returns `Ok(None)` when the prompts key is absent, its value is not a JSON
/// array, or no prompt has text.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or queried, or its
/// modification time cannot be read.
pub fn parse_cursor_workspace(workspace_dir: &Path, opener: &dyn StoreOpener) -> Result<Option<Chat>> {
    let store_path = workspace_dir.join(STORE_FILENAME);
    let workspace_id = workspace_dir
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let project = read_workspace_project(workspace_dir, &workspace_id);

    let raw = {
        let store = opener.open_read_only(&store_path)?;
        store.get_value(PROMPTS_KEY)?
    };
    let Some(raw) = raw else {
        return Ok(None);
    };

    let prompts: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {} in {}", PROMPTS_KEY, store_path.display()))?;
    let messages = prompt_messages(&prompts);
    if messages.is_empty() {
        return Ok(None);
    }

    let modified = fs::metadata(&store_path)
        .and_then(|m| m.modified())
        .with_context(|| format!("Failed to read modification time: {}", store_path.display()))?;
    let millis = modified
        .duration_since(UNIX_EPOCH)
        .context("Store modification time is before the Unix epoch")?
        .as_millis() as i64;

    Ok(Some(Chat::new(
        format!("cursor_{}", workspace_id),
        Source::Cursor,
        project,
        messages,
        Some(millis),
        Some(millis),
    )))
}

/// User messages for every prompt with non-empty text
///
/// Anything other than a JSON array yields no messages.
pub fn prompt_messages(prompts: &Value) -> Vec<Message> {
    let Some(entries) = prompts.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| entry.get("text").and_then(Value::as_str))
        .filter(|text| !text.is_empty())
        .map(Message::user)
        .collect()
}

/// Project identity from `workspace.json`, falling back to the workspace id
fn read_workspace_project(workspace_dir: &Path, workspace_id: &str) -> Project {
    let metadata = fs::read_to_string(workspace_dir.join(WORKSPACE_METADATA_FILENAME))
        .ok()
        .and_then(|content| serde_json::from_str::<WorkspaceMetadata>(&content).ok());

    match metadata {
        Some(metadata) => metadata
            .folder
            .as_deref()
            .and_then(project_from_folder_uri)
            .unwrap_or_else(unknown_project),
        None => project_from_workspace_id(workspace_id),
    }
}
