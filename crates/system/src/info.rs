//! Host and operating system identification.

use tracing::debug;

/// Broad operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsKind {
    Linux,
    MacOs,
    Windows,
    Other,
}

impl OsKind {
    /// The family this binary was compiled for.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "linux" => OsKind::Linux,
            "macos" => OsKind::MacOs,
            "windows" => OsKind::Windows,
            _ => OsKind::Other,
        }
    }
}

/// The operating system family.
pub fn os_kind() -> OsKind {
    OsKind::current()
}

/// The OS version string as reported by the system, when available.
pub fn os_version() -> Option<String> {
    sysinfo::System::os_version()
}

/// The CPU architecture this binary was compiled for.
pub fn arch() -> &'static str {
    std::env::consts::ARCH
}

/// The machine's hostname.
pub fn hostname() -> Option<String> {
    match hostname::get() {
        Ok(name) => name.into_string().ok(),
        Err(e) => {
            debug!(error = %e, "hostname lookup failed");
            None
        }
    }
}

/// The name of the user running this process.
pub fn username() -> String {
    whoami::username()
}
