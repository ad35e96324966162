//! MSB-first bit field packing and unpacking.
//!
//! Fields are addressed by absolute bit position: bit 0 is the most
//! significant bit of the first byte, bit 8 the most significant bit of the
//! second, and so on. A field may start and end anywhere, crossing byte
//! boundaries freely. Bits outside the addressed field are never modified.

use commons_core::{Error, Result};

/// Maximum width of a single packed field, in bits
pub const MAX_FIELD_WIDTH: usize = 64;

fn check_width(bit_width: usize) -> Result<()> {
    if bit_width == 0 || bit_width > MAX_FIELD_WIDTH {
        return Err(Error::codec(format!(
            "bit width {bit_width} is out of range 1..={MAX_FIELD_WIDTH}"
        )));
    }
    Ok(())
}

fn check_bounds(buf_len: usize, bit_offset: usize, bit_width: usize) -> Result<()> {
    let end = bit_offset
        .checked_add(bit_width)
        .ok_or_else(|| Error::codec("bit offset overflow".to_string()))?;
    if end > buf_len * 8 {
        return Err(Error::codec(format!(
            "field of {bit_width} bits at offset {bit_offset} exceeds buffer of {buf_len} bytes"
        )));
    }
    Ok(())
}

/// Write the low `bit_width` bits of `value` into `dst` at `bit_offset`.
///
/// The value must fit in the field: supplying a value wider than
/// `bit_width` is an error rather than a silent truncation, so caller bugs
/// surface at the pack site.
pub fn pack(dst: &mut [u8], bit_offset: usize, bit_width: usize, value: u64) -> Result<()> {
    check_width(bit_width)?;
    check_bounds(dst.len(), bit_offset, bit_width)?;
    if bit_width < 64 && (value >> bit_width) != 0 {
        return Err(Error::codec(format!(
            "value {value:#x} does not fit in {bit_width} bits"
        )));
    }

    for i in 0..bit_width {
        let bit = (value >> (bit_width - 1 - i)) & 1;
        let pos = bit_offset + i;
        let mask = 0x80u8 >> (pos % 8);
        if bit == 1 {
            dst[pos / 8] |= mask;
        } else {
            dst[pos / 8] &= !mask;
        }
    }
    Ok(())
}

/// Read a `bit_width`-bit field from `src` at `bit_offset`.
pub fn unpack(src: &[u8], bit_offset: usize, bit_width: usize) -> Result<u64> {
    check_width(bit_width)?;
    check_bounds(src.len(), bit_offset, bit_width)?;

    let mut acc = 0u64;
    for i in 0..bit_width {
        let pos = bit_offset + i;
        let bit = (src[pos / 8] >> (7 - pos % 8)) & 1;
        acc = (acc << 1) | u64::from(bit);
    }
    Ok(acc)
}

/// Sequential bit-field writer backed by a growable byte buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    buf: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `bit_width`-bit field holding `value`.
    ///
    /// A rejected write leaves the writer untouched.
    pub fn write(&mut self, bit_width: usize, value: u64) -> Result<()> {
        check_width(bit_width)?;
        let old_len = self.buf.len();
        let needed = (self.bit_len + bit_width + 7) / 8;
        if needed > old_len {
            self.buf.resize(needed, 0);
        }
        if let Err(e) = pack(&mut self.buf, self.bit_len, bit_width, value) {
            self.buf.truncate(old_len);
            return Err(e);
        }
        self.bit_len += bit_width;
        Ok(())
    }

    /// Pad with zero bits up to the next byte boundary.
    pub fn align_to_byte(&mut self) {
        let rem = self.bit_len % 8;
        if rem != 0 {
            self.bit_len += 8 - rem;
            let needed = (self.bit_len + 7) / 8;
            if needed > self.buf.len() {
                self.buf.resize(needed, 0);
            }
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Consume the writer, returning the packed bytes.
    ///
    /// Trailing bits of the last byte that were never written are zero.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Sequential bit-field reader over a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Read the next `bit_width`-bit field.
    pub fn read(&mut self, bit_width: usize) -> Result<u64> {
        let value = unpack(self.buf, self.pos, bit_width)?;
        self.pos += bit_width;
        Ok(value)
    }

    /// Skip forward to the next byte boundary.
    pub fn align_to_byte(&mut self) {
        let rem = self.pos % 8;
        if rem != 0 {
            self.pos += 8 - rem;
        }
    }

    /// Bits left between the cursor and the end of the buffer.
    pub fn bits_remaining(&self) -> usize {
        (self.buf.len() * 8).saturating_sub(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_within_one_byte() {
        let mut buf = [0u8; 1];
        pack(&mut buf, 2, 3, 0b101).unwrap();
        assert_eq!(buf[0], 0b0010_1000);
        assert_eq!(unpack(&buf, 2, 3).unwrap(), 0b101);
    }

    #[test]
    fn test_pack_crosses_byte_boundary() {
        let mut buf = [0u8; 3];
        pack(&mut buf, 6, 12, 0xABC).unwrap();
        assert_eq!(unpack(&buf, 6, 12).unwrap(), 0xABC);
        // Bits before and after the field stay untouched
        assert_eq!(unpack(&buf, 0, 6).unwrap(), 0);
        assert_eq!(unpack(&buf, 18, 6).unwrap(), 0);
    }

    #[test]
    fn test_pack_preserves_neighbouring_bits() {
        let mut buf = [0xFFu8; 2];
        pack(&mut buf, 4, 8, 0).unwrap();
        assert_eq!(buf, [0xF0, 0x0F]);
    }

    #[test]
    fn test_full_width_field() {
        let mut buf = [0u8; 8];
        pack(&mut buf, 0, 64, u64::MAX).unwrap();
        assert_eq!(unpack(&buf, 0, 64).unwrap(), u64::MAX);
    }

    #[test]
    fn test_rejects_bad_widths() {
        let mut buf = [0u8; 8];
        assert!(pack(&mut buf, 0, 0, 0).is_err());
        assert!(pack(&mut buf, 0, 65, 0).is_err());
        assert!(unpack(&buf, 0, 0).is_err());
    }

    #[test]
    fn test_rejects_value_wider_than_field() {
        let mut buf = [0u8; 2];
        assert!(pack(&mut buf, 0, 4, 16).is_err());
        assert!(pack(&mut buf, 0, 4, 15).is_ok());
    }

    #[test]
    fn test_rejects_field_past_end() {
        let mut buf = [0u8; 2];
        assert!(pack(&mut buf, 10, 8, 0).is_err());
        assert!(unpack(&buf, 16, 1).is_err());
    }

    #[test]
    fn test_writer_reader_round_trip() {
        let mut w = BitWriter::new();
        w.write(3, 0b101).unwrap();
        w.write(11, 2047).unwrap();
        w.write(1, 0).unwrap();
        w.align_to_byte();
        w.write(16, 0xBEEF).unwrap();
        assert_eq!(w.bit_len(), 32);
        let bytes = w.into_bytes();

        let mut r = BitReader::new(&bytes);
        assert_eq!(r.read(3).unwrap(), 0b101);
        assert_eq!(r.read(11).unwrap(), 2047);
        assert_eq!(r.read(1).unwrap(), 0);
        r.align_to_byte();
        assert_eq!(r.read(16).unwrap(), 0xBEEF);
        assert_eq!(r.bits_remaining(), 0);
    }

    #[test]
    fn test_failed_write_leaves_writer_unchanged() {
        let mut w = BitWriter::new();
        w.write(8, 0xAB).unwrap();
        // Value too wide for the field: must not grow the buffer
        assert!(w.write(4, 0xFF).is_err());
        assert_eq!(w.bit_len(), 8);
        assert_eq!(w.into_bytes(), vec![0xAB]);

        let mut w = BitWriter::new();
        assert!(w.write(4, 0x1F).is_err());
        assert_eq!(w.bit_len(), 0);
        assert!(w.into_bytes().is_empty());
    }

    #[test]
    fn test_reader_past_end() {
        let mut r = BitReader::new(&[0xFF]);
        assert_eq!(r.read(8).unwrap(), 0xFF);
        assert!(r.read(1).is_err());
    }
}
