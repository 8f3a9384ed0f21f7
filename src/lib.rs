//! Chat History Explorer - browse Claude Code and Cursor conversation history
//!
//! This library reads the conversation history that two AI coding assistants keep on
//! disk and normalizes it into one [`Chat`] model:
//!
//! - Claude Code session logs under `~/.claude/projects/<project>/*.jsonl`
//! - Cursor prompt history from each workspace's `state.vscdb` store
//!
//! On top of the merged collection it offers three read-only operations: listing with
//! source and text filters, lookup by session id, and a Monday-to-Friday weekly summary.
//! Nothing is cached; every call re-reads the sources.
//!
//! # Example
//!
//! ```no_run
//! use chat_history_explorer::{ChatLibrary, ChatQuery, SourceDirs};
//!
//! let library = ChatLibrary::new(SourceDirs::detect()?);
//! for chat in library.list(&ChatQuery::new().search("parser")) {
//!     println!("{} {}", chat.session_id, chat.preview);
//! }
//! let week = library.weekly_summary(0);
//! println!("{} chats this week", week.total_chats);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod filters;
pub mod indexer;
pub mod library;
pub mod models;
pub mod parsers;
pub mod store;
pub mod utils;
pub mod weekly;

// Re-export commonly used types
pub use error::SourceFailure;
pub use filters::ChatQuery;
pub use indexer::{Ingested, load_all_chats};
pub use library::ChatLibrary;
pub use models::{Chat, ChatPreview, Message, Project, Role, Source, WeeklySummary};
pub use utils::SourceDirs;
pub use utils::paths::{decode_project_dir, encode_project_dir};
pub use weekly::{WeekRange, week_range};
