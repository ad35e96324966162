/// Constants used throughout the commons toolkit
// Environment variable names consulted for locale detection, in priority order
pub const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

// Fallback locale when the environment carries none
pub const DEFAULT_LOCALE: &str = "en-US";

// Default capacity for MRU preference lists
pub const DEFAULT_MRU_CAPACITY: usize = 10;

// Suffix inserted when truncating display strings
pub const ELLIPSIS: &str = "\u{2026}";

// Characters not allowed in file names on any supported platform
pub const ILLEGAL_FILENAME_CHARS: &[char] =
    &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '\0'];

// Replacement used by filename sanitizing
pub const FILENAME_REPLACEMENT: char = '_';
