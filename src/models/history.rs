//! Raw records as they appear on disk, before normalization.

use serde::Deserialize;
use serde_json::Value;

use super::chat::Role;

/// One line of a Claude session `.jsonl` file
///
/// Every field is optional and lenient: a line whose `type` or `message` has an
/// unexpected shape still contributes its timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionLine {
    #[serde(rename = "type", default, deserialize_with = "crate::parsers::deserializers::deserialize_optional_text")]
    pub entry_type: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_optional_text")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub message: Option<LineMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineMessage {
    #[serde(default)]
    pub content: Option<MessageBody>,
}

/// Message content is either a plain string or a list of typed blocks
///
/// Blocks stay raw JSON so one odd element cannot reject its neighbours.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageBody {
    Text(String),
    Blocks(Vec<Value>),
    Other(Value),
}

const CONTENT_TYPE_TEXT: &str = "text";

/// Text of a `{"type": "text", "text": "..."}` block, if the block is one
fn text_block(block: &Value) -> Option<&str> {
    if block.get("type").and_then(Value::as_str) != Some(CONTENT_TYPE_TEXT) {
        return None;
    }
    block.get("text").and_then(Value::as_str)
}

impl MessageBody {
    /// Resolve the body into the text shown for a message of `role`.
    ///
    /// User entries only count when they carry a plain string; block lists on user
    /// entries are tool results. Assistant block lists keep their `text` blocks,
    /// joined by newlines. Empty results yield `None`.
    pub fn into_text(self, role: Role) -> Option<String> {
        let text = match (self, role) {
            (MessageBody::Text(text), _) => text,
            (MessageBody::Blocks(blocks), Role::Assistant) => {
                let parts: Vec<&str> =
                    blocks.iter().filter_map(text_block).filter(|t| !t.is_empty()).collect();
                parts.join("\n")
            }
            _ => return None,
        };

        if text.is_empty() { None } else { Some(text) }
    }
}

/// `workspace.json` next to a Cursor workspace store
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceMetadata {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_optional_text")]
    pub folder: Option<String>,
}
