//! Data models for assistant conversation history.
//!
//! - [`Chat`], [`Message`], [`Project`] - the normalized record shared by both sources
//! - [`ChatPreview`] - a chat without message bodies, for list views
//! - [`WeeklySummary`], [`ProjectGroup`], [`TimelineDay`] - weekly aggregation output
//! - [`SessionLine`], [`MessageBody`], [`WorkspaceMetadata`] - raw on-disk records
//!
//! Raw records use lenient serde deserializers from `parsers::deserializers` so that an
//! unexpected field shape degrades to `None` instead of rejecting the whole line.

pub mod chat;
pub mod history;
pub mod summary;

pub use chat::{Chat, Message, Project, Role, Source, UnknownSourceError};
pub use history::{LineMessage, MessageBody, SessionLine, WorkspaceMetadata};
pub use summary::{
    ChatPreview, ProjectChat, ProjectGroup, TimelineChat, TimelineDay, WeeklySummary,
};
