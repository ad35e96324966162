//! General string helpers.

use commons_core::{ELLIPSIS, FILENAME_REPLACEMENT, ILLEGAL_FILENAME_CHARS};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// True if the string is empty or only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Trim the string, returning `None` if nothing remains.
pub fn trim_to_option(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Return `s` unless it is blank, in which case return `default`.
pub fn default_if_blank<'a>(s: &'a str, default: &'a str) -> &'a str {
    if is_blank(s) {
        default
    } else {
        s
    }
}

/// Truncate to at most `max_width` display columns, ending in an ellipsis
/// when anything was removed. Always cuts on a char boundary.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let ellipsis_width = ELLIPSIS.width();
    if max_width <= ellipsis_width {
        return ELLIPSIS.to_string();
    }
    let budget = max_width - ellipsis_width;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

/// Left-pad with `fill` until the string occupies `width` display columns.
pub fn pad_start(s: &str, width: usize, fill: char) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    let fill_width = fill.width().unwrap_or(1).max(1);
    let count = (width - current) / fill_width;
    let mut out = String::with_capacity(s.len() + count);
    for _ in 0..count {
        out.push(fill);
    }
    out.push_str(s);
    out
}

/// Right-pad with `fill` until the string occupies `width` display columns.
pub fn pad_end(s: &str, width: usize, fill: char) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    let fill_width = fill.width().unwrap_or(1).max(1);
    let count = (width - current) / fill_width;
    let mut out = String::with_capacity(s.len() + count);
    out.push_str(s);
    for _ in 0..count {
        out.push(fill);
    }
    out
}

/// Upper-case the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a camelCase identifier into capitalized words: "lineWidth" becomes
/// "Line Width". Runs of upper-case letters stay together ("XMLParser"
/// becomes "XML Parser").
pub fn camel_to_title(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev_lower = chars[i - 1].is_lowercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev_lower || (chars[i - 1].is_uppercase() && next_lower) {
                out.push(' ');
            }
        }
        out.push(c);
    }
    capitalize(&out)
}

/// Strip `prefix` from the start of `s`, comparing ASCII case-insensitively.
pub fn remove_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> &'a str {
    let n = prefix.len();
    // Byte-wise comparison: a full match only case-folds ASCII bytes, so a
    // hit ends on a char boundary and the slice below cannot panic
    if s.len() >= n && s.as_bytes()[..n].eq_ignore_ascii_case(prefix.as_bytes()) {
        &s[n..]
    } else {
        s
    }
}

/// ASCII case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// Replace characters that are illegal in file names on any supported
/// platform, as well as control characters, with an underscore.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if ILLEGAL_FILENAME_CHARS.contains(&c) || c.is_control() {
                FILENAME_REPLACEMENT
            } else {
                c
            }
        })
        .collect()
}

/// Shorten to at most `max_chars` characters by replacing the middle with an
/// ellipsis, keeping the start and end visible.
pub fn abbreviate_middle(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        return s.to_string();
    }
    if max_chars <= 1 {
        return ELLIPSIS.to_string();
    }
    let keep = max_chars - 1;
    let head = keep / 2 + keep % 2;
    let tail = keep / 2;
    let start: String = s.chars().take(head).collect();
    let end: String = s.chars().skip(count - tail).collect();
    format!("{start}{ELLIPSIS}{end}")
}
