use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One content block of a structured message (`text`, `thinking`, `tool_use`,
/// `tool_result`, ...). Only the optional `text` field is interpreted; every
/// other field round-trips through `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentBlock {
    /// A plain text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self { block_type: "text".to_string(), text: Some(text.into()), extra: Map::new() }
    }
}

/// Message content is either a plain string or an array of typed blocks;
/// both forms occur in real session logs and must be preserved as written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: MessageContent,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One line of a session log file.
///
/// Unknown fields (cwd, version, isSidechain, ...) are captured in `extra`
/// so a rewritten log carries everything the original did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub message: Message,
    #[serde(
        rename = "sessionId",
        deserialize_with = "crate::parsers::deserializers::deserialize_session_id"
    )]
    pub session_id: String,
    pub uuid: String,
    #[serde(rename = "parentUuid", default)]
    pub parent_uuid: Option<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConversationEntry {
    /// First piece of human-readable text in the message, if any: the plain
    /// string itself, or the first block carrying a `text` field.
    pub fn preview_text(&self) -> Option<&str> {
        match &self.message.content {
            MessageContent::Text(s) => Some(s.as_str()),
            MessageContent::Blocks(blocks) => blocks.iter().find_map(|b| b.text.as_deref()),
        }
    }
}
