//! Persistence: atomic session-log writes and the append-only history index.

pub mod recorder;
pub mod writer;

pub use recorder::append_history;
pub use writer::write_session_log;
