//! Bit-level packing and endianness-aware byte codecs.
//!
//! Two small, self-contained numeric codecs:
//!
//! - [`bitpack`]: MSB-first bit fields packed into byte buffers at arbitrary
//!   bit offsets, with [`BitWriter`]/[`BitReader`] cursors for sequential use.
//! - [`endian`]: bounds-checked reads and writes of integer and float values
//!   in either byte order, plus whole-slice encode/decode.
//!
//! All functions are pure; none panic on malformed input.

pub mod bitpack;
pub mod endian;
pub mod hexdump;

pub use bitpack::{pack, unpack, BitReader, BitWriter};
pub use endian::Endianness;
