//! AI Session Cloner - half-clone recorded Claude Code sessions
//!
//! Given a session's JSONL conversation log under `~/.claude/projects/`,
//! this library produces a new, independent log containing only the later
//! half of the conversation:
//!
//! - the new log gets a fresh session id on every line
//! - the first retained message is detached (`parentUuid: null`) and stamped
//!   with a `[half-clone]` marker
//! - parent links among retained messages keep resolving
//! - the log is written atomically and announced in `history.jsonl`
//!
//! The source log is never modified.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use ai_session_cloner::half_clone;
//!
//! let claude_dir = Path::new("/Users/alice/.claude");
//! let project = Path::new("/Users/alice/src/widget");
//! let outcome = half_clone(claude_dir, "550e8400-e29b-41d4-a716-446655440000", project)?;
//! println!("New session: {}", outcome.new_session_id);
//! # Ok::<(), ai_session_cloner::CloneError>(())
//! ```

pub mod cli;
pub mod cloner;
pub mod error;
pub mod models;
pub mod parsers;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use cloner::{CloneOutcome, HALF_CLONE_MARKER, half_clone};
pub use error::CloneError;
pub use models::{ConversationEntry, HistoryEntry};
pub use parsers::load_session_log;
pub use utils::paths::encode_path;
