use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::CloneError;
use crate::models::ConversationEntry;
use crate::utils::{encode_path, validate_file_size};

/// Path of the log file for one (session id, project path) pair:
/// `<claude_dir>/projects/<encoded-project>/<session_id>.jsonl`.
pub fn session_log_path(claude_dir: &Path, session_id: &str, project_path: &Path) -> PathBuf {
    claude_dir.join("projects").join(encode_path(project_path)).join(format!("{session_id}.jsonl"))
}

/// Load one session's log, preserving file order exactly.
///
/// Strict: any malformed line aborts with [`CloneError::Parse`] and no
/// partial result. A browsing tool can skip bad lines; a cloner that did so
/// would silently drop messages from the copy.
///
/// Also validates the log invariants the rest of the pipeline relies on:
/// uuids are unique, and every non-null parent reference resolves to an
/// earlier line.
pub fn load_session_log(
    claude_dir: &Path,
    session_id: &str,
    project_path: &Path,
) -> Result<Vec<ConversationEntry>, CloneError> {
    let path = session_log_path(claude_dir, session_id, project_path);

    if !path.exists() {
        return Err(CloneError::SessionNotFound {
            session_id: session_id.to_string(),
            dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        });
    }

    let file = File::open(&path)
        .map_err(|source| CloneError::Io { path: path.clone(), source })?;
    validate_file_size(&file, &path)
        .map_err(|source| CloneError::Io { path: path.clone(), source })?;

    let reader = BufReader::new(file);
    let mut entries = Vec::new();
    let mut seen_uuids = HashSet::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CloneError::Io { path: path.clone(), source })?;

        if line.trim().is_empty() {
            continue;
        }

        let entry: ConversationEntry = serde_json::from_str(&line).map_err(|source| {
            CloneError::Parse { path: path.clone(), line: line_idx + 1, source }
        })?;

        // Append-only invariant: a parent must have been written earlier.
        // Checking before recording this entry's own uuid also rejects
        // self-references, so cycles are impossible.
        if let Some(parent) = &entry.parent_uuid
            && !seen_uuids.contains(parent)
        {
            return Err(CloneError::BrokenChain {
                uuid: entry.uuid.clone(),
                parent: parent.clone(),
            });
        }
        if !seen_uuids.insert(entry.uuid.clone()) {
            return Err(CloneError::DuplicateUuid { uuid: entry.uuid });
        }

        entries.push(entry);
    }

    Ok(entries)
}
