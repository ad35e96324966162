//! Endianness-aware numeric byte codecs.
//!
//! Wraps the `byteorder` crate with bounds-checked offsets so that a short
//! buffer surfaces as an `Error` instead of a panic, and adds whole-slice
//! encode/decode for the common "array of registers" case.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use commons_core::{Error, Result};

/// Byte order selector for the codec functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    /// The byte order of the machine this code runs on.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }
}

fn check_range(buf_len: usize, offset: usize, size: usize) -> Result<()> {
    let end = offset
        .checked_add(size)
        .ok_or_else(|| Error::codec("offset overflow".to_string()))?;
    if end > buf_len {
        return Err(Error::codec(format!(
            "read/write of {size} bytes at offset {offset} exceeds buffer of {buf_len} bytes"
        )));
    }
    Ok(())
}

macro_rules! impl_codec {
    ($ty:ty, $size:expr, $read:ident, $write:ident, $read_fn:ident, $write_fn:ident,
     $encode_slice:ident, $decode_slice:ident) => {
        impl Endianness {
            /// Read a value at `offset`, bounds-checked.
            pub fn $read(self, buf: &[u8], offset: usize) -> Result<$ty> {
                check_range(buf.len(), offset, $size)?;
                let window = &buf[offset..offset + $size];
                Ok(match self {
                    Endianness::Big => BigEndian::$read_fn(window),
                    Endianness::Little => LittleEndian::$read_fn(window),
                })
            }

            /// Write a value at `offset`, bounds-checked.
            pub fn $write(self, buf: &mut [u8], offset: usize, value: $ty) -> Result<()> {
                check_range(buf.len(), offset, $size)?;
                let window = &mut buf[offset..offset + $size];
                match self {
                    Endianness::Big => BigEndian::$write_fn(window, value),
                    Endianness::Little => LittleEndian::$write_fn(window, value),
                }
                Ok(())
            }
        }

        /// Encode a slice of values into a contiguous byte vector.
        pub fn $encode_slice(values: &[$ty], order: Endianness) -> Vec<u8> {
            let mut out = vec![0u8; values.len() * $size];
            for (i, &v) in values.iter().enumerate() {
                // Offsets are derived from the allocation, cannot fail
                let _ = order.$write(&mut out, i * $size, v);
            }
            out
        }

        /// Decode a contiguous byte slice into values.
        ///
        /// The byte length must be an exact multiple of the element size.
        pub fn $decode_slice(bytes: &[u8], order: Endianness) -> Result<Vec<$ty>> {
            if bytes.len() % $size != 0 {
                return Err(Error::codec(format!(
                    "byte length {} is not a multiple of element size {}",
                    bytes.len(),
                    $size
                )));
            }
            let mut out = Vec::with_capacity(bytes.len() / $size);
            for i in 0..bytes.len() / $size {
                out.push(order.$read(bytes, i * $size)?);
            }
            Ok(out)
        }
    };
}

impl_codec!(u16, 2, read_u16, write_u16, read_u16, write_u16, encode_u16_slice, decode_u16_slice);
impl_codec!(i16, 2, read_i16, write_i16, read_i16, write_i16, encode_i16_slice, decode_i16_slice);
impl_codec!(u32, 4, read_u32, write_u32, read_u32, write_u32, encode_u32_slice, decode_u32_slice);
impl_codec!(i32, 4, read_i32, write_i32, read_i32, write_i32, encode_i32_slice, decode_i32_slice);
impl_codec!(u64, 8, read_u64, write_u64, read_u64, write_u64, encode_u64_slice, decode_u64_slice);
impl_codec!(i64, 8, read_i64, write_i64, read_i64, write_i64, encode_i64_slice, decode_i64_slice);
impl_codec!(f32, 4, read_f32, write_f32, read_f32, write_f32, encode_f32_slice, decode_f32_slice);
impl_codec!(f64, 8, read_f64, write_f64, read_f64, write_f64, encode_f64_slice, decode_f64_slice);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_u16_both_orders() {
        let mut buf = [0u8; 4];
        Endianness::Big.write_u16(&mut buf, 1, 0x1234).unwrap();
        assert_eq!(buf, [0x00, 0x12, 0x34, 0x00]);
        assert_eq!(Endianness::Big.read_u16(&buf, 1).unwrap(), 0x1234);

        Endianness::Little.write_u16(&mut buf, 1, 0x1234).unwrap();
        assert_eq!(buf, [0x00, 0x34, 0x12, 0x00]);
        assert_eq!(Endianness::Little.read_u16(&buf, 1).unwrap(), 0x1234);
    }

    #[test]
    fn test_signed_round_trip() {
        let mut buf = [0u8; 8];
        Endianness::Big.write_i32(&mut buf, 0, -123_456).unwrap();
        assert_eq!(Endianness::Big.read_i32(&buf, 0).unwrap(), -123_456);
        Endianness::Little.write_i64(&mut buf, 0, i64::MIN).unwrap();
        assert_eq!(Endianness::Little.read_i64(&buf, 0).unwrap(), i64::MIN);
    }

    #[test]
    fn test_float_nan_bit_pattern_preserved() {
        let nan = f64::from_bits(0x7FF8_0000_0000_1234);
        let mut buf = [0u8; 8];
        Endianness::Little.write_f64(&mut buf, 0, nan).unwrap();
        let back = Endianness::Little.read_f64(&buf, 0).unwrap();
        assert_eq!(back.to_bits(), nan.to_bits());
    }

    #[test]
    fn test_out_of_bounds_is_error() {
        let mut buf = [0u8; 3];
        assert!(Endianness::Big.read_u32(&buf, 0).is_err());
        assert!(Endianness::Big.write_u16(&mut buf, 2, 1).is_err());
    }

    #[test]
    fn test_slice_round_trip() {
        let values = [0u16, 1, 0xFFFF, 0x8000];
        let bytes = encode_u16_slice(&values, Endianness::Big);
        assert_eq!(bytes.len(), 8);
        assert_eq!(decode_u16_slice(&bytes, Endianness::Big).unwrap(), values);
    }

    #[test]
    fn test_slice_rejects_ragged_length() {
        assert!(decode_u32_slice(&[0u8; 6], Endianness::Little).is_err());
    }

    #[test]
    fn test_native_matches_target() {
        let order = Endianness::native();
        let mut buf = [0u8; 2];
        order.write_u16(&mut buf, 0, 0x0102).unwrap();
        assert_eq!(buf, 0x0102u16.to_ne_bytes());
    }
}
