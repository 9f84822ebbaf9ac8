//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a history.jsonl file with the given content
    pub fn with_history(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("history.jsonl"), content)
            .expect("Failed to write history.jsonl");
        self
    }

    /// Add a session log file under the project directory for `project_path`
    pub fn with_session(
        self,
        project_path: &Path,
        session_id: &str,
        entries: &[ConversationEntryBuilder],
    ) -> Self {
        let project_dir = self
            .temp_dir
            .path()
            .join("projects")
            .join(ai_session_cloner::encode_path(project_path));
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        let content =
            entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join("\n") + "\n";
        fs::write(project_dir.join(format!("{session_id}.jsonl")), content)
            .expect("Failed to write session log");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for conversation entries in session log files
pub struct ConversationEntryBuilder {
    entry_type: String,
    role: String,
    content: ContentType,
    timestamp: i64,
    session_id: String,
    uuid: String,
    parent_uuid: Option<String>,
}

/// Content type for conversation entries
enum ContentType {
    Text(String),
    ContentBlocks(Vec<String>),
}

impl ConversationEntryBuilder {
    /// Create a new user message
    pub fn user() -> Self {
        Self {
            entry_type: "user".to_string(),
            role: "user".to_string(),
            content: ContentType::Text("Test message".to_string()),
            timestamp: 1234567890,
            session_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            uuid: "550e8400-e29b-41d4-a716-446655440001".to_string(),
            parent_uuid: None,
        }
    }

    /// Create a new assistant message
    pub fn assistant() -> Self {
        Self {
            entry_type: "assistant".to_string(),
            role: "assistant".to_string(),
            content: ContentType::Text("Test response".to_string()),
            timestamp: 1234567891,
            session_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            uuid: "550e8400-e29b-41d4-a716-446655440002".to_string(),
            parent_uuid: None,
        }
    }

    /// Set the message text (simple string content)
    pub fn text(mut self, text: &str) -> Self {
        self.content = ContentType::Text(text.to_string());
        self
    }

    /// Set content blocks (advanced content with thinking, tool_use, etc.)
    pub fn content_blocks(mut self, blocks: Vec<String>) -> Self {
        self.content = ContentType::ContentBlocks(blocks);
        self
    }

    /// A text block (for use in content block arrays)
    pub fn text_block(text: &str) -> String {
        format!(r#"{{"type":"text","text":"{}"}}"#, text)
    }

    /// A thinking block
    pub fn thinking_block(text: &str) -> String {
        format!(r#"{{"type":"thinking","thinking":"{}"}}"#, text)
    }

    /// A tool_use block
    pub fn tool_use_block(id: &str, name: &str, input_json: &str) -> String {
        format!(r#"{{"type":"tool_use","id":"{}","name":"{}","input":{}}}"#, id, name, input_json)
    }

    /// Set the timestamp
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the session ID
    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = session_id.to_string();
        self
    }

    /// Set the UUID
    pub fn uuid(mut self, uuid: &str) -> Self {
        self.uuid = uuid.to_string();
        self
    }

    /// Set the parent UUID
    pub fn parent(mut self, parent_uuid: &str) -> Self {
        self.parent_uuid = Some(parent_uuid.to_string());
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let content_json = match &self.content {
            ContentType::Text(text) => format!(r#""{}""#, text),
            ContentType::ContentBlocks(blocks) => format!("[{}]", blocks.join(",")),
        };
        let parent_json = self
            .parent_uuid
            .as_ref()
            .map(|p| format!(r#""{}""#, p))
            .unwrap_or_else(|| "null".to_string());

        format!(
            r#"{{"parentUuid":{},"sessionId":"{}","type":"{}","message":{{"role":"{}","content":{}}},"uuid":"{}","timestamp":{}}}"#,
            parent_json, self.session_id, self.entry_type, self.role, content_json, self.uuid,
            self.timestamp
        )
    }
}

/// A linear user/assistant conversation of `n` messages with a proper
/// parentUuid chain, all under `session_id`.
pub fn linear_conversation(session_id: &str, n: usize) -> Vec<ConversationEntryBuilder> {
    (0..n)
        .map(|i| {
            let base = if i % 2 == 0 {
                ConversationEntryBuilder::user().text(&format!("user message {i}"))
            } else {
                ConversationEntryBuilder::assistant().text(&format!("assistant message {i}"))
            };
            let base = base
                .session_id(session_id)
                .uuid(&format!("00000000-0000-4000-8000-{:012}", i + 1))
                .timestamp(1234567890 + i as i64);
            if i == 0 {
                base
            } else {
                base.parent(&format!("00000000-0000-4000-8000-{:012}", i))
            }
        })
        .collect()
}

/// Count the lines of a file, treating a missing file as zero lines.
pub fn line_count(path: &Path) -> usize {
    fs::read_to_string(path).map(|s| s.lines().count()).unwrap_or(0)
}

/// Path of a session log inside a test .claude directory.
pub fn session_log_path(claude_dir: &Path, project: &Path, session_id: &str) -> PathBuf {
    claude_dir
        .join("projects")
        .join(ai_session_cloner::encode_path(project))
        .join(format!("{session_id}.jsonl"))
}
