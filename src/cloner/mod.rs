//! Half-clone pipeline: load a session log, keep its trailing half, rewrite
//! identity and parent links, stamp the marker, persist the new log, and
//! record it in the history index.
//!
//! The whole operation is one sequential unit of work. Every failure aborts
//! it; the caller either gets a fully-formed new log plus a history record,
//! or nothing on disk at all. The source log is only ever read.

pub mod marker;
pub mod remap;
pub mod split;

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::CloneError;
use crate::models::HistoryEntry;
use crate::parsers::load_session_log;
use crate::storage::{append_history, write_session_log};
use crate::utils::encode_path;

pub use marker::HALF_CLONE_MARKER;
pub use split::{SplitPlan, split_plan};

/// Maximum length of the history display preview, in characters.
const DISPLAY_PREVIEW_CHARS: usize = 80;

/// Result of a successful half-clone.
#[derive(Debug)]
pub struct CloneOutcome {
    pub new_session_id: String,
    pub log_path: PathBuf,
    pub kept: usize,
    pub skipped: usize,
}

/// Half-clone one session: produce a new, independently addressable log
/// containing the later half of the source conversation.
pub fn half_clone(
    claude_dir: &Path,
    session_id: &str,
    project_path: &Path,
) -> Result<CloneOutcome, CloneError> {
    let mut entries = load_session_log(claude_dir, session_id, project_path)?;

    let plan = split_plan(entries.len())?;
    let tail = entries.split_off(plan.skip);

    let new_session_id = Uuid::new_v4().to_string();
    let mut tail = remap::remap_tail(tail, &new_session_id);

    // Preview before tagging, so the display line carries exactly one marker.
    let preview = truncate_chars(tail[0].preview_text().unwrap_or(""), DISPLAY_PREVIEW_CHARS);
    let display = marker::tag_display(&preview);
    marker::tag_entry(&mut tail[0]);

    let project_dir = claude_dir.join("projects").join(encode_path(project_path));
    let log_path = write_session_log(&project_dir, &new_session_id, &tail)?;

    let record = HistoryEntry::new(
        display,
        &project_path.to_string_lossy(),
        new_session_id.clone(),
    );
    if let Err(err) = append_history(claude_dir, &record) {
        // A clone the history index cannot reach is lost to the user, so the
        // append failure fails the whole operation and the log comes back out.
        let _ = fs::remove_file(&log_path);
        return Err(err);
    }

    Ok(CloneOutcome { new_session_id, log_path, kept: plan.keep, skipped: plan.skip })
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
