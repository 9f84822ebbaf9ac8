use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::error::CloneError;
use crate::models::HistoryEntry;

/// Append one record to the global history index at
/// `<claude_dir>/history.jsonl`, creating the file if absent.
///
/// Append-only: existing records are never rewritten. The record goes out as
/// one complete line (JSON + trailing newline) in a single write call, so
/// concurrent appenders may interleave lines but cannot corrupt each other's.
/// One silent retry on failure before surfacing [`CloneError::HistoryAppend`].
pub fn append_history(claude_dir: &Path, record: &HistoryEntry) -> Result<(), CloneError> {
    let path = claude_dir.join("history.jsonl");

    match try_append(&path, record) {
        Ok(()) => Ok(()),
        Err(first) => {
            eprintln!("Warning: history append failed ({first}), retrying once");
            try_append(&path, record)
                .map_err(|source| CloneError::HistoryAppend { path, source })
        }
    }
}

fn try_append(path: &Path, record: &HistoryEntry) -> io::Result<()> {
    let json = serde_json::to_string(record).map_err(io::Error::other)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    // One write call for the whole line keeps the append line-atomic.
    file.write_all(format!("{json}\n").as_bytes())?;
    Ok(())
}
