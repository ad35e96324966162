//! Standard per-user directories.

use std::env;
use std::path::PathBuf;

/// The user's home directory.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// The system temporary directory.
pub fn temp_dir() -> PathBuf {
    env::temp_dir()
}

/// Per-application configuration directory: `XDG_CONFIG_HOME/<app>` or the
/// platform equivalent, falling back to `~/.config/<app>`.
pub fn config_dir(app: &str) -> PathBuf {
    env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .ok()
        .or_else(dirs::config_dir)
        .unwrap_or_else(|| {
            dirs::home_dir()
                .map(|home| home.join(".config"))
                .unwrap_or_else(|| PathBuf::from(".config"))
        })
        .join(app)
}

/// Per-application cache directory, with the same fallback shape as
/// [`config_dir`].
pub fn cache_dir(app: &str) -> PathBuf {
    env::var("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .ok()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| {
            dirs::home_dir()
                .map(|home| home.join(".cache"))
                .unwrap_or_else(|| PathBuf::from(".cache"))
        })
        .join(app)
}
