use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which assistant tool a chat was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Claude,
    Cursor,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Claude => "claude",
            Source::Cursor => "cursor",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown source '{0}' (expected 'claude' or 'cursor')")]
pub struct UnknownSourceError(pub String);

impl FromStr for Source {
    type Err = UnknownSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "claude" => Ok(Source::Claude),
            "cursor" => Ok(Source::Cursor),
            _ => Err(UnknownSourceError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into(), timestamp: None }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Attach the raw timestamp string recorded for the message
    pub fn at(mut self, timestamp: Option<String>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(rename = "rootPath")]
    pub root_path: String,
}

/// One normalized conversation from either source.
///
/// `date` and `end_date` are epoch milliseconds of the earliest and latest
/// message. Readers never emit a chat without messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub session_id: String,
    pub source: Source,
    pub project: Project,
    pub messages: Vec<Message>,
    pub message_count: usize,
    pub date: Option<i64>,
    pub end_date: Option<i64>,
}

impl Chat {
    /// Build a chat from its messages, keeping `message_count` in sync
    pub fn new(
        session_id: String,
        source: Source,
        project: Project,
        messages: Vec<Message>,
        date: Option<i64>,
        end_date: Option<i64>,
    ) -> Self {
        let message_count = messages.len();
        Self { session_id, source, project, messages, message_count, date, end_date }
    }
}
