use chrono::{DateTime, TimeZone};
use tracing::error;

use crate::filters::{ChatQuery, find_chat, list_previews};
use crate::indexer::{Ingested, load_all_chats};
use crate::models::{Chat, ChatPreview, WeeklySummary};
use crate::store::{SqliteStoreOpener, StoreOpener};
use crate::utils::SourceDirs;
use crate::weekly::{summarize_week, week_range_at};

/// The query surface over both history sources
///
/// Every call re-reads the sources from disk. A source that fails outright is
/// logged and contributes no chats; the other source is still used.
pub struct ChatLibrary<O: StoreOpener = SqliteStoreOpener> {
    dirs: SourceDirs,
    opener: O,
}

impl ChatLibrary<SqliteStoreOpener> {
    pub fn new(dirs: SourceDirs) -> Self {
        Self { dirs, opener: SqliteStoreOpener }
    }
}

impl<O: StoreOpener> ChatLibrary<O> {
    pub fn with_opener(dirs: SourceDirs, opener: O) -> Self {
        Self { dirs, opener }
    }

    pub fn dirs(&self) -> &SourceDirs {
        &self.dirs
    }

    /// Merged chats plus any source-level failures
    pub fn ingest(&self) -> Ingested {
        load_all_chats(&self.dirs, &self.opener)
    }

    /// Merged chats, newest first
    pub fn chats(&self) -> Vec<Chat> {
        let ingested = self.ingest();
        for failure in &ingested.failures {
            error!("{}", failure);
        }
        ingested.chats
    }

    pub fn list(&self, query: &ChatQuery) -> Vec<ChatPreview> {
        list_previews(&self.chats(), query)
    }

    pub fn get_by_id(&self, session_id: &str) -> Option<Chat> {
        let chats = self.chats();
        find_chat(&chats, session_id).cloned()
    }

    /// Summary of the work week `weeks_ago` weeks back from the local clock
    pub fn weekly_summary(&self, weeks_ago: u32) -> WeeklySummary {
        self.weekly_summary_at(&chrono::Local::now(), weeks_ago)
    }

    /// Summary of the work week `weeks_ago` weeks back from `now`
    pub fn weekly_summary_at<Tz: TimeZone>(&self, now: &DateTime<Tz>, weeks_ago: u32) -> WeeklySummary {
        let range = week_range_at(now, weeks_ago);
        summarize_week(&self.chats(), &range, weeks_ago)
    }
}
