use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::deserializers::parse_log_timestamp;
use crate::models::{Chat, Message, Role, SessionLine, Source};
use crate::utils::project_from_encoded_dir;

const ENTRY_TYPE_USER: &str = "user";
const ENTRY_TYPE_ASSISTANT: &str = "assistant";

/// Parse one Claude session `.jsonl` file into a chat
///
/// The encoded project directory name is taken from the file's parent directory.
/// Malformed lines are skipped. Returns `Ok(None)` when no user or assistant
/// message could be extracted.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_claude_session(path: &Path) -> Result<Option<Chat>> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read session file: {}", path.display()))?;
    // Invalid UTF-8 only damages the line it appears in
    let content = String::from_utf8_lossy(&bytes);

    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let project_dir = path
        .parent()
        .and_then(|p| p.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(parse_session_lines(&content, &project_dir, &stem))
}

/// Build a chat from the raw text of a session file
pub fn parse_session_lines(content: &str, project_dir: &str, session_stem: &str) -> Option<Chat> {
    let mut messages = Vec::new();
    let mut earliest: Option<i64> = None;
    let mut latest: Option<i64> = None;
    let mut skipped = 0usize;

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let entry = match serde_json::from_str::<SessionLine>(line) {
            Ok(entry) => entry,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        if let Some(ts) = entry.timestamp.as_deref().and_then(parse_log_timestamp) {
            let millis = ts.timestamp_millis();
            earliest = Some(earliest.map_or(millis, |e| e.min(millis)));
            latest = Some(latest.map_or(millis, |l| l.max(millis)));
        }

        let role = match entry.entry_type.as_deref() {
            Some(ENTRY_TYPE_USER) => Role::User,
            Some(ENTRY_TYPE_ASSISTANT) => Role::Assistant,
            _ => continue,
        };

        let text = entry.message.and_then(|m| m.content).and_then(|body| body.into_text(role));
        if let Some(text) = text {
            messages.push(Message::new(role, text).at(entry.timestamp));
        }
    }

    if skipped > 0 {
        debug!(project_dir, session = session_stem, skipped, "skipped malformed session lines");
    }

    if messages.is_empty() {
        return None;
    }

    Some(Chat::new(
        format!("claude_{}_{}", project_dir, session_stem),
        Source::Claude,
        project_from_encoded_dir(project_dir),
        messages,
        earliest,
        latest,
    ))
}
