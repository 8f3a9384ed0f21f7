//! Chat collection builder for Claude and Cursor history.
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach:
//!
//! - **Unit-level errors**: An unreadable session file is logged at warn level, a
//!   failing Cursor workspace at debug level. Neither stops the scan.
//! - **Source-level errors**: If a source's base directory cannot be listed, that source
//!   contributes no chats and a [`SourceFailure`] is recorded. The other source is
//!   unaffected.
//! - **Summary**: A debug event reports how many units were read and skipped per source.

use std::cmp::Reverse;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, warn};

use super::project_discovery::{discover_session_files, discover_workspaces};
use crate::error::SourceFailure;
use crate::models::{Chat, Source};
use crate::parsers::{parse_claude_session, parse_cursor_workspace};
use crate::store::StoreOpener;
use crate::utils::SourceDirs;

/// Chats from both sources plus any source that failed outright
#[derive(Debug, Default)]
pub struct Ingested {
    pub chats: Vec<Chat>,
    pub failures: Vec<SourceFailure>,
}

/// Read every Claude session under `claude_dir`
///
/// # Errors
///
/// Returns an error only if the projects directory exists but cannot be listed.
/// Unreadable session files are logged and skipped.
pub fn load_claude_chats(claude_dir: &Path) -> Result<Vec<Chat>> {
    let mut chats = Vec::new();
    let mut failed = 0;

    let sessions = discover_session_files(claude_dir)?;
    let total = sessions.len();
    for session in sessions {
        match parse_claude_session(&session) {
            Ok(Some(chat)) => chats.push(chat),
            Ok(None) => {}
            Err(e) => {
                failed += 1;
                warn!("Failed to parse Claude session {}: {:#}", session.display(), e);
            }
        }
    }

    debug!(files = total, chats = chats.len(), failed, "read Claude sessions");
    Ok(chats)
}

/// Read every Cursor workspace under `cursor_dir`, at most one chat each
///
/// # Errors
///
/// Returns an error only if the workspaceStorage directory exists but cannot be
/// listed. Failing workspaces are logged at debug level and skipped.
pub fn load_cursor_chats(cursor_dir: &Path, opener: &dyn StoreOpener) -> Result<Vec<Chat>> {
    let mut chats = Vec::new();
    let mut failed = 0;

    let workspaces = discover_workspaces(cursor_dir)?;
    let total = workspaces.len();
    for workspace in workspaces {
        match parse_cursor_workspace(&workspace, opener) {
            Ok(Some(chat)) => chats.push(chat),
            Ok(None) => {}
            Err(e) => {
                failed += 1;
                debug!("Error parsing Cursor workspace {}: {:#}", workspace.display(), e);
            }
        }
    }

    debug!(workspaces = total, chats = chats.len(), failed, "read Cursor workspaces");
    Ok(chats)
}

/// Read both sources concurrently and merge them, newest first
///
/// Claude chats come before Cursor chats when dates tie, and discovery order is
/// kept within a source. Chats without a date sort last.
pub fn load_all_chats(dirs: &SourceDirs, opener: &dyn StoreOpener) -> Ingested {
    let (claude, cursor) = rayon::join(
        || load_claude_chats(&dirs.claude_dir),
        || load_cursor_chats(&dirs.cursor_dir, opener),
    );

    let mut ingested = Ingested::default();
    for (origin, result) in [(Source::Claude, claude), (Source::Cursor, cursor)] {
        match result {
            Ok(chats) => ingested.chats.extend(chats),
            Err(error) => ingested.failures.push(SourceFailure::new(origin, error)),
        }
    }

    sort_newest_first(&mut ingested.chats);
    ingested
}

/// Stable sort by `date` descending with undated chats last
pub fn sort_newest_first(chats: &mut [Chat]) {
    chats.sort_by_key(|chat| Reverse(chat.date));
}
