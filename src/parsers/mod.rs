//! JSONL parsing for session log files.
//!
//! Unlike a history *browser*, which can log and skip a malformed line, the
//! cloner parses strictly: any line that is not a well-formed message record
//! aborts the whole operation with no partial result, because a clone that
//! silently dropped messages would be corrupt in a way nobody notices.

pub mod conversation;
pub mod deserializers;

pub use conversation::{load_session_log, session_log_path};
