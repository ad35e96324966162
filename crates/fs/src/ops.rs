//! Copy and move with an explicit destination-exists policy.

use commons_core::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// What to do when the destination of a copy or move already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Replace the existing destination.
    Overwrite,
    /// Fail with an error.
    Fail,
    /// Leave the destination alone and report that nothing happened.
    Skip,
}

/// Outcome of a copy or move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    Done,
    Skipped,
}

fn check_destination(dst: &Path, policy: OverwritePolicy) -> Result<Option<Transfer>> {
    if !dst.exists() {
        return Ok(None);
    }
    match policy {
        OverwritePolicy::Overwrite => Ok(None),
        OverwritePolicy::Skip => {
            debug!(dst = %dst.display(), "destination exists, skipping");
            Ok(Some(Transfer::Skipped))
        }
        OverwritePolicy::Fail => Err(Error::file_system(
            dst.to_path_buf(),
            "transfer",
            std::io::Error::new(ErrorKind::AlreadyExists, "destination already exists"),
        )),
    }
}

/// Copy `src` to `dst`, creating parent directories as needed.
pub fn copy_file(src: &Path, dst: &Path, policy: OverwritePolicy) -> Result<Transfer> {
    if let Some(outcome) = check_destination(dst, policy)? {
        return Ok(outcome);
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::file_system(parent.to_path_buf(), "create parent directory", e))?;
    }
    fs::copy(src, dst).map_err(|e| Error::file_system(src.to_path_buf(), "copy", e))?;
    Ok(Transfer::Done)
}

/// Move `src` to `dst`.
///
/// Renames when source and destination live on the same file system and
/// falls back to copy-then-delete when they do not.
pub fn move_file(src: &Path, dst: &Path, policy: OverwritePolicy) -> Result<Transfer> {
    if let Some(outcome) = check_destination(dst, policy)? {
        return Ok(outcome);
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::file_system(parent.to_path_buf(), "create parent directory", e))?;
    }
    match fs::rename(src, dst) {
        Ok(()) => Ok(Transfer::Done),
        Err(rename_err) => {
            // EXDEV and friends: rename cannot cross devices
            debug!(
                src = %src.display(),
                dst = %dst.display(),
                error = %rename_err,
                "rename failed, falling back to copy and delete"
            );
            fs::copy(src, dst).map_err(|e| Error::file_system(src.to_path_buf(), "copy", e))?;
            fs::remove_file(src)
                .map_err(|e| Error::file_system(src.to_path_buf(), "remove source", e))?;
            Ok(Transfer::Done)
        }
    }
}

/// Create a directory and all missing parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| Error::file_system(dir.to_path_buf(), "create directory", e))
}

/// Remove a file, treating "not found" as success. Returns whether a file
/// was actually removed.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::file_system(path.to_path_buf(), "remove", e)),
    }
}
