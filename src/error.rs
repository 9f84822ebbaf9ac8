//! Failure taxonomy for the clone pipeline.
//!
//! The library surfaces typed errors so callers (and tests) can distinguish
//! "source log missing" from "source log corrupted" from "clone could not be
//! persisted". The binary wraps these in `anyhow` at the CLI boundary.
//!
//! All variants are fatal: the operation either produces a fully-formed new
//! log plus a history record, or nothing at all.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while half-cloning a session.
#[derive(Debug, Error)]
pub enum CloneError {
    /// No log file exists for the given session id / project path pair.
    #[error("session {session_id} not found under {}", dir.display())]
    SessionNotFound { session_id: String, dir: PathBuf },

    /// A line of the source log is not a well-formed message record.
    /// Strict by design: a clone must not silently drop messages.
    #[error("malformed record at line {line} in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Two messages in the source log share a uuid.
    #[error("duplicate message uuid {uuid} in source log")]
    DuplicateUuid { uuid: String },

    /// A message references a parent uuid that does not appear earlier in
    /// the same log (violates the append-only invariant).
    #[error("message {uuid} references unknown parent {parent}")]
    BrokenChain { uuid: String, parent: String },

    /// The source log is too short to split.
    /// The message text is stable and greppable by callers.
    #[error("cannot half-clone a session with fewer than 2 messages (found {count})")]
    InsufficientMessages { count: usize },

    /// The destination log could not be staged or finalized.
    #[error("failed to write cloned session log to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The history index append failed (after one retry). The written log is
    /// removed so no clone exists that discovery cannot reach.
    #[error("session log written but history append to {} failed", path.display())]
    HistoryAppend {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while reading the source log.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
