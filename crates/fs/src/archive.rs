//! ZIP archive search and extraction, built on the `zip` crate.

use commons_core::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

use crate::ops::ensure_dir;

fn open(path: &Path) -> Result<ZipArchive<File>> {
    let file =
        File::open(path).map_err(|e| Error::file_system(path.to_path_buf(), "open archive", e))?;
    ZipArchive::new(file)
        .map_err(|e| Error::archive_with_source(path, "not a readable ZIP archive", e))
}

/// Entry names in archive order.
pub fn list_entries(path: &Path) -> Result<Vec<String>> {
    let mut archive = open(path)?;
    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .map_err(|e| Error::archive_with_source(path, format!("bad entry {i}"), e))?;
        names.push(entry.name().to_string());
    }
    Ok(names)
}

/// The first entry name matching `predicate`, in archive order.
pub fn find_entry(path: &Path, predicate: impl Fn(&str) -> bool) -> Result<Option<String>> {
    Ok(list_entries(path)?.into_iter().find(|name| predicate(name)))
}

/// The first entry whose name ends with `suffix`, ignoring ASCII case.
pub fn find_by_suffix(path: &Path, suffix: &str) -> Result<Option<String>> {
    let wanted = suffix.to_ascii_lowercase();
    find_entry(path, |name| name.to_ascii_lowercase().ends_with(&wanted))
}

/// Read a single entry fully into memory.
pub fn read_entry(path: &Path, name: &str) -> Result<Vec<u8>> {
    let mut archive = open(path)?;
    let mut entry = archive
        .by_name(name)
        .map_err(|e| Error::archive_with_source(path, format!("no entry '{name}'"), e))?;
    let mut data = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut data)
        .map_err(|e| Error::file_system(path.to_path_buf(), "read archive entry", e))?;
    Ok(data)
}

/// Extract a single entry to the exact destination path.
pub fn extract_entry(path: &Path, name: &str, dest: &Path) -> Result<()> {
    let data = read_entry(path, name)?;
    crate::atomic::write_atomic(dest, &data)
}

/// Extract every file entry under `dest_dir`, preserving the archive's
/// directory structure. Returns the number of files written.
///
/// Entries whose names would escape `dest_dir` (absolute paths or `..`
/// traversal) are rejected.
pub fn extract_all(path: &Path, dest_dir: &Path) -> Result<usize> {
    let mut archive = open(path)?;
    ensure_dir(dest_dir)?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| Error::archive_with_source(path, format!("bad entry {i}"), e))?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(Error::archive(
                path,
                format!("entry '{}' escapes the destination", entry.name()),
            ));
        };
        let target = dest_dir.join(relative);

        if entry.is_dir() {
            ensure_dir(&target)?;
            continue;
        }
        let mut data = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut data)
            .map_err(|e| Error::file_system(path.to_path_buf(), "read archive entry", e))?;
        crate::atomic::write_atomic(&target, &data)?;
        written += 1;
    }
    debug!(archive = %path.display(), files = written, "extracted archive");
    Ok(written)
}
