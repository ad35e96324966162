//! Crash-safe file replacement.
//!
//! Content goes into a hidden temp sibling first and is renamed over the
//! target, so a concurrent reader sees either the old file or the new one,
//! never a partial write.

use commons_core::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

/// Replace the file at `path` with `content` via a temp sibling and rename.
///
/// Missing parent directories are created. The temp file is removed again
/// if any step fails.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        Error::invalid_argument(path.display().to_string(), "path has no parent directory")
    })?;

    fs::create_dir_all(parent)
        .map_err(|e| Error::file_system(parent.to_path_buf(), "create parent directory", e))?;

    // The temp file must be a sibling of the target: rename is only atomic
    // within a single filesystem
    let temp_path = parent.join(format!(".{}.tmp", Uuid::new_v4()));

    let written = (|| -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Error::file_system(&temp_path, "create temp file", e))?;

        file.write_all(content)
            .map_err(|e| Error::file_system(&temp_path, "write temp file", e))?;

        file.sync_all()
            .map_err(|e| Error::file_system(&temp_path, "sync temp file", e))
    })();

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::file_system(path.to_path_buf(), "rename temp file into place", e)
    })
}

/// String-content convenience wrapper around [`write_atomic`].
pub fn write_atomic_string(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Serialize `value` as pretty JSON and write it atomically.
pub fn write_atomic_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_atomic(path, json.as_bytes())
}
