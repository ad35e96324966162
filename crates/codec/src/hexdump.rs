//! Hex formatting helpers (re-export from the `hex` crate).

pub use hex::{decode, encode, encode_upper};

/// Format bytes as uppercase hex with a space between bytes.
pub fn format_hex_pretty(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
