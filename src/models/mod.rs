//! Data models for session logs and the history index.
//!
//! - [`ConversationEntry`] - one message line of a session log
//! - [`HistoryEntry`] - one line of the global history index
//!
//! Both use serde with custom deserializers for special fields (timestamps,
//! session IDs) in the `parsers::deserializers` module. Conversation entries
//! round-trip unknown fields so a rewritten log loses nothing.

pub mod conversation;
pub mod history;

pub use conversation::{ContentBlock, ConversationEntry, Message, MessageContent};
pub use history::HistoryEntry;
