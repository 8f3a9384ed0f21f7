//! Parsers for assistant history artifacts
//!
//! # Error Handling Strategy
//!
//! Parsing follows a **graceful degradation** approach:
//!
//! - **Individual line failures**: A malformed line in a Claude session file is skipped
//!   and counted; it never aborts the file. Unparsable timestamps are ignored per line.
//!
//! - **Empty results**: A session or workspace that yields no messages produces `Ok(None)`
//!   rather than an empty chat.
//!
//! - **Unit failures**: An unreadable file, an unopenable store, or an unparsable prompt
//!   array is returned as an `anyhow` error with context. The indexer logs it and moves on
//!   to the next unit.

pub mod claude;
pub mod cursor;
pub mod deserializers;

pub use claude::{parse_claude_session, parse_session_lines};
pub use cursor::{parse_cursor_workspace, prompt_messages};
pub use deserializers::parse_log_timestamp;
