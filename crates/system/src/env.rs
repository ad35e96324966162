//! Environment variable helpers.

use std::env;

/// The variable's value, or `default` when it is unset or not UTF-8.
pub fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Interpret a variable as a boolean flag.
///
/// `1`, `true`, `yes`, and `on` (any case) are true; everything else,
/// including an unset variable, is false.
pub fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| {
            let v = v.trim().to_ascii_lowercase();
            matches!(v.as_str(), "1" | "true" | "yes" | "on")
        })
        .unwrap_or(false)
}
