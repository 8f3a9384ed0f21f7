//! Weekly activity summaries
//!
//! A week is the Monday-to-Friday window computed by [`week_range_at`]. Chats are
//! assigned to a week by their start date and reported two ways: grouped by
//! project and source, and as a per-day timeline keyed by UTC date.

pub mod aggregate;
pub mod range;

pub use aggregate::{build_timeline, chats_in_range, group_by_project, summarize_week};
pub use range::{WeekRange, week_range, week_range_at};
