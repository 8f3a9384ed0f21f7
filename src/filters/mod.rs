pub mod apply;

pub use apply::{ChatQuery, apply_query, find_chat, list_previews};
