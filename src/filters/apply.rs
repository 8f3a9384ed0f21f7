use crate::models::{Chat, ChatPreview, Source};

/// Optional restrictions for a chat listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatQuery {
    /// Only chats from this source
    pub source: Option<Source>,
    /// Case-insensitive substring of any message body or the project name
    pub search: Option<String>,
}

impl ChatQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Exact session id lookup
pub fn find_chat<'a>(chats: &'a [Chat], session_id: &str) -> Option<&'a Chat> {
    chats.iter().find(|chat| chat.session_id == session_id)
}

/// Chats matching `query`, in input order
pub fn apply_query<'a>(chats: &'a [Chat], query: &ChatQuery) -> Vec<&'a Chat> {
    // An empty search string matches everything
    let needle = query.search.as_deref().filter(|s| !s.is_empty()).map(str::to_lowercase);

    chats
        .iter()
        .filter(|chat| query.source.is_none_or(|source| chat.source == source))
        .filter(|chat| needle.as_deref().is_none_or(|needle| matches_search(chat, needle)))
        .collect()
}

/// Previews for every chat matching `query`
pub fn list_previews(chats: &[Chat], query: &ChatQuery) -> Vec<ChatPreview> {
    apply_query(chats, query).into_iter().map(ChatPreview::from).collect()
}

/// `needle` must already be lowercase
fn matches_search(chat: &Chat, needle: &str) -> bool {
    chat.messages.iter().any(|m| m.content.to_lowercase().contains(needle))
        || chat.project.name.to_lowercase().contains(needle)
}
