//! Locale detection from the process environment.
//!
//! POSIX locale strings look like `en_US.UTF-8` or `de_DE@euro`. The
//! variables are consulted in the usual priority order (`LC_ALL`,
//! `LC_MESSAGES`, `LANG`); `C` and `POSIX` count as "no locale configured".

use commons_core::{DEFAULT_LOCALE, LOCALE_ENV_VARS};
use std::env;

/// A parsed locale identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Lowercase ISO 639 language code ("en").
    pub language: String,
    /// Uppercase ISO 3166 region code ("US"), when present.
    pub region: Option<String>,
    /// Character encoding ("UTF-8"), when present.
    pub encoding: Option<String>,
}

impl Default for Locale {
    fn default() -> Self {
        // DEFAULT_LOCALE is a valid tag, parsing it cannot fail
        Locale::parse(DEFAULT_LOCALE).unwrap_or(Locale {
            language: "en".to_string(),
            region: Some("US".to_string()),
            encoding: None,
        })
    }
}

impl Locale {
    /// Parse a POSIX (`en_US.UTF-8`) or BCP 47-style (`en-US`) locale tag.
    ///
    /// Returns `None` for empty strings and the `C`/`POSIX` pseudo-locales.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }

        // Strip modifier ("@euro") then encoding (".UTF-8")
        let tag = tag.split('@').next().unwrap_or(tag);
        let (tag, encoding) = match tag.split_once('.') {
            Some((head, enc)) if !enc.is_empty() => (head, Some(enc.to_string())),
            Some((head, _)) => (head, None),
            None => (tag, None),
        };
        if tag.is_empty() || tag.eq_ignore_ascii_case("c") || tag.eq_ignore_ascii_case("posix") {
            return None;
        }

        let (language, region) = match tag.split_once(['_', '-']) {
            Some((lang, reg)) if !reg.is_empty() => (lang, Some(reg.to_uppercase())),
            Some((lang, _)) => (lang, None),
            None => (tag, None),
        };
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        Some(Locale {
            language: language.to_lowercase(),
            region,
            encoding,
        })
    }

    /// The locale configured in the environment, or the default.
    pub fn from_env() -> Self {
        for var in LOCALE_ENV_VARS {
            if let Ok(value) = env::var(var) {
                if let Some(locale) = Locale::parse(&value) {
                    return locale;
                }
            }
        }
        Locale::default()
    }

    /// The BCP 47-style tag: "en" or "en-US".
    pub fn tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }
}
