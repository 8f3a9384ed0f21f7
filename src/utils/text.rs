use crate::models::{Message, Role};

/// Excerpt length for list previews
pub const PREVIEW_CHARS: usize = 200;

/// Excerpt length for per-project weekly summaries
pub const PROJECT_SUMMARY_CHARS: usize = 300;

/// Excerpt length for weekly timeline entries
pub const TIMELINE_SUMMARY_CHARS: usize = 200;

/// First user message truncated to `max_chars` characters, or an empty string
pub fn first_user_excerpt(messages: &[Message], max_chars: usize) -> String {
    messages
        .iter()
        .find(|m| m.role == Role::User)
        .map(|m| truncate_chars(&m.content, max_chars).to_string())
        .unwrap_or_default()
}

/// Truncate on a character boundary
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
