//! Path manipulation helpers.

use commons_core::{Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Replace (or add) the file extension.
pub fn with_extension(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

/// The file name without its extension, as UTF-8.
pub fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Find a sibling path that does not exist yet by counting the stem up:
/// `report.txt` becomes `report (2).txt`, then `report (3).txt`, and so on.
///
/// Returns the input unchanged when it is already free.
pub fn unique_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Ok(path.to_path_buf());
    }
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let stem = file_stem(path).ok_or_else(|| {
        Error::invalid_argument(path.display().to_string(), "path has no file name")
    })?;
    let extension = path.extension().and_then(|e| e.to_str());

    // Collect taken stems so the counter logic matches label uniquefying
    let mut taken = HashSet::new();
    taken.insert(stem.to_string());
    let mut candidate = stem.to_string();
    loop {
        candidate = commons_text::uniquify(&candidate, &taken);
        let name = match extension {
            Some(ext) => format!("{candidate}.{ext}"),
            None => candidate.clone(),
        };
        let attempt = parent.join(name);
        if !attempt.exists() {
            return Ok(attempt);
        }
        taken.insert(candidate.clone());
    }
}

/// Display `path` relative to `base` when possible, otherwise as-is.
pub fn display_relative(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => path.display().to_string(),
    }
}

/// True if `path` has the given extension, ignoring ASCII case.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}
