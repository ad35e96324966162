//! Operating system, locale, and environment queries.

pub mod env;
pub mod info;
pub mod locale;
pub mod paths;

pub use env::{env_flag, env_or};
pub use info::{arch, hostname, os_kind, os_version, username, OsKind};
pub use locale::Locale;
