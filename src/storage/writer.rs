use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::CloneError;
use crate::models::ConversationEntry;

/// Serialize `entries` one JSON object per line into
/// `<project_dir>/<session_id>.jsonl`, creating the directory if needed.
///
/// The write is atomic: lines are staged into a named temp file in the same
/// directory, flushed, then renamed into place. A crash mid-write never
/// leaves a partial log visible under the final name, and the temp file is
/// removed on every error path when it drops.
pub fn write_session_log(
    project_dir: &Path,
    session_id: &str,
    entries: &[ConversationEntry],
) -> Result<PathBuf, CloneError> {
    let final_path = project_dir.join(format!("{session_id}.jsonl"));
    let write_err =
        |source: io::Error| CloneError::Write { path: final_path.clone(), source };

    std::fs::create_dir_all(project_dir).map_err(write_err)?;

    // Temp file must live in the destination directory for the rename to be
    // a single-filesystem atomic operation.
    let mut staged = NamedTempFile::new_in(project_dir).map_err(write_err)?;
    for entry in entries {
        let line = serde_json::to_string(entry).map_err(io::Error::other).map_err(write_err)?;
        staged.write_all(line.as_bytes()).map_err(write_err)?;
        staged.write_all(b"\n").map_err(write_err)?;
    }
    staged.flush().map_err(write_err)?;

    staged.persist(&final_path).map_err(|e| write_err(e.error))?;
    Ok(final_path)
}
