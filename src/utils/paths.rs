use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Result, bail};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Maximum file size for JSONL files: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

// Define characters to percent-encode (everything except alphanumeric and safe chars)
const ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b':')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'!');

/// Encodes a file system path into the project directory slug used under
/// `<claude_dir>/projects/`. The transformation is one-way as far as this
/// tool is concerned: the clone is written next to its source, so the slug
/// only ever needs to be computed, never reversed.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use ai_session_cloner::encode_path;
///
/// let path = PathBuf::from("/Users/foo/bar");
/// assert_eq!(encode_path(&path), "-Users%2Ffoo%2Fbar");
/// ```
pub fn encode_path(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    // Strip leading slash to avoid encoding it
    let without_leading_slash = path_str.strip_prefix('/').unwrap_or(&path_str);
    let encoded = utf8_percent_encode(without_leading_slash, ENCODE_SET).to_string();
    // Prepend hyphen to match the on-disk format
    format!("-{}", encoded)
}

/// Validates a caller-supplied project path before it is turned into a slug.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains '..' components (path traversal)
/// - The path is not absolute
pub fn validate_project_path(path: &Path) -> Result<()> {
    for component in path.components() {
        if component == std::path::Component::ParentDir {
            bail!("Path contains '..' component: {}", path.display());
        }
    }

    if !path.is_absolute() {
        bail!("Path must be absolute: {}", path.display());
    }

    Ok(())
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
pub fn validate_file_size(file: &File, path: &Path) -> io::Result<()> {
    let metadata = file.metadata()?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        return Err(io::Error::new(
            io::ErrorKind::FileTooLarge,
            format!(
                "File too large: {} ({} bytes, max {} bytes)",
                path.display(),
                file_size,
                MAX_FILE_SIZE_BYTES
            ),
        ));
    }

    Ok(())
}
