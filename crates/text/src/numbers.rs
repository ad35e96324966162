//! Lenient number parsing and formatting.
//!
//! Parsing tolerates what users actually type: surrounding whitespace,
//! thousands separators, and the usual NaN/Infinity spellings. Formatting
//! rounds half away from zero, matching what spreadsheet users expect.

use commons_core::{Error, Result};

/// Parse a float leniently.
///
/// Accepted on top of the standard float grammar: surrounding whitespace,
/// `,` and `_` grouping separators between digits, and the spellings
/// `NaN`, `Inf`, `Infinity` with optional sign (all case-insensitive).
pub fn parse_f64_lenient(s: &str) -> Result<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(Error::parse(s, "empty input"));
    }

    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let lower = body.to_ascii_lowercase();
    if lower == "nan" {
        return Ok(f64::NAN);
    }
    if lower == "inf" || lower == "infinity" {
        return Ok(sign * f64::INFINITY);
    }

    // Grouping separators are only valid between digits
    let mut cleaned = String::with_capacity(trimmed.len());
    let chars: Vec<char> = trimmed.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c == ',' || c == '_' {
            let between_digits = i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(char::is_ascii_digit);
            if between_digits {
                continue;
            }
            return Err(Error::parse(s, format!("unexpected '{c}'")));
        }
        cleaned.push(c);
    }

    cleaned
        .parse::<f64>()
        .map_err(|e| Error::parse(s, e.to_string()))
}

/// Parse a float leniently, falling back to `fallback` on any failure.
pub fn parse_f64_or(s: &str, fallback: f64) -> f64 {
    parse_f64_lenient(s).unwrap_or(fallback)
}

/// Round to `decimals` places, half away from zero.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format with a fixed number of decimal places.
///
/// Non-finite values format as `NaN`, `Inf`, and `-Inf`.
pub fn format_decimal(value: f64, decimals: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    format!("{:.*}", decimals as usize, round_to_decimals(value, decimals))
}

/// Format an integer with `,` thousands grouping.
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Parse the integer at the start of a string, ignoring whatever follows.
///
/// Returns `None` when the string does not begin with an optionally signed
/// digit sequence (after leading whitespace).
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// True when `a` and `b` differ by at most `epsilon`.
///
/// Two NaNs compare as equal here, so round-tripped values with a NaN
/// fallback still match.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    (a - b).abs() <= epsilon
}
