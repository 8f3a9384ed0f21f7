use serde::{Deserialize, Serialize};

use super::chat::{Chat, Project, Source};
use crate::utils::text::{PREVIEW_CHARS, first_user_excerpt};

/// A chat without its message bodies, as shown in list views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPreview {
    pub session_id: String,
    pub source: Source,
    pub project: Project,
    pub message_count: usize,
    pub date: Option<i64>,
    pub end_date: Option<i64>,
    pub preview: String,
}

impl From<&Chat> for ChatPreview {
    fn from(chat: &Chat) -> Self {
        Self {
            session_id: chat.session_id.clone(),
            source: chat.source,
            project: chat.project.clone(),
            message_count: chat.message_count,
            date: chat.date,
            end_date: chat.end_date,
            preview: first_user_excerpt(&chat.messages, PREVIEW_CHARS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectChat {
    pub session_id: String,
    pub date: Option<i64>,
    pub summary: String,
    pub message_count: usize,
}

/// All chats of one (project, source) pair inside a week window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectGroup {
    pub project: String,
    pub source: Source,
    pub chats: Vec<ProjectChat>,
    pub total_messages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineChat {
    pub session_id: String,
    pub source: Source,
    pub project: String,
    pub summary: String,
    pub message_count: usize,
    pub timestamp: i64,
}

/// All chats that started on one UTC calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineDay {
    pub date: String,
    pub day: String,
    pub chats: Vec<TimelineChat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub week_start: String,
    pub week_end: String,
    pub weeks_ago: u32,
    pub by_project: Vec<ProjectGroup>,
    pub timeline: Vec<TimelineDay>,
    pub total_chats: usize,
    pub total_messages: usize,
}
