use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the global `history.jsonl` index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub display: String,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(
        rename = "sessionId",
        deserialize_with = "crate::parsers::deserializers::deserialize_session_id"
    )]
    pub session_id: String,
}

impl HistoryEntry {
    /// A record announcing a freshly created session, stamped with the
    /// current time.
    pub fn new(display: String, project: &str, session_id: String) -> Self {
        Self { display, timestamp: Utc::now(), project: Some(project.to_string()), session_id }
    }
}
