//! Property tests for the codec crate: packing then unpacking returns the
//! original value for every width and offset, and endian codecs round-trip
//! in both byte orders.

use commons_codec::{bitpack, endian, Endianness};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bitpack_round_trips(
        width in 1usize..=64,
        offset in 0usize..64,
        raw in any::<u64>(),
    ) {
        let value = if width == 64 { raw } else { raw & ((1u64 << width) - 1) };
        let mut buf = vec![0u8; (offset + width + 7) / 8];
        bitpack::pack(&mut buf, offset, width, value).unwrap();
        prop_assert_eq!(bitpack::unpack(&buf, offset, width).unwrap(), value);
    }

    #[test]
    fn bitpack_leaves_neighbours_alone(
        width in 1usize..=64,
        offset in 0usize..64,
        raw in any::<u64>(),
        fill in any::<u8>(),
    ) {
        let value = if width == 64 { raw } else { raw & ((1u64 << width) - 1) };
        let len = (offset + width + 7) / 8 + 1;
        let mut buf = vec![fill; len];
        let before = buf.clone();
        bitpack::pack(&mut buf, offset, width, value).unwrap();
        // Every bit outside the field matches the pre-pack buffer
        for pos in 0..len * 8 {
            if pos >= offset && pos < offset + width {
                continue;
            }
            let old = (before[pos / 8] >> (7 - pos % 8)) & 1;
            let new = (buf[pos / 8] >> (7 - pos % 8)) & 1;
            prop_assert_eq!(old, new, "bit {} changed", pos);
        }
    }

    #[test]
    fn endian_u64_round_trips(value in any::<u64>(), offset in 0usize..8) {
        let mut buf = vec![0u8; offset + 8];
        for order in [Endianness::Big, Endianness::Little] {
            order.write_u64(&mut buf, offset, value).unwrap();
            prop_assert_eq!(order.read_u64(&buf, offset).unwrap(), value);
        }
    }

    #[test]
    fn endian_f64_round_trips_bitwise(bits in any::<u64>()) {
        let value = f64::from_bits(bits);
        let mut buf = [0u8; 8];
        for order in [Endianness::Big, Endianness::Little] {
            order.write_f64(&mut buf, 0, value).unwrap();
            let back = order.read_f64(&buf, 0).unwrap();
            prop_assert_eq!(back.to_bits(), bits);
        }
    }

    #[test]
    fn endian_slice_round_trips(values in proptest::collection::vec(any::<i32>(), 0..64)) {
        for order in [Endianness::Big, Endianness::Little] {
            let bytes = endian::encode_i32_slice(&values, order);
            prop_assert_eq!(endian::decode_i32_slice(&bytes, order).unwrap(), values.clone());
        }
    }
}

#[test]
fn big_and_little_orders_mirror_each_other() {
    let mut be = [0u8; 8];
    let mut le = [0u8; 8];
    Endianness::Big.write_u64(&mut be, 0, 0x0102_0304_0506_0708).unwrap();
    Endianness::Little
        .write_u64(&mut le, 0, 0x0102_0304_0506_0708)
        .unwrap();
    let mut rev = le;
    rev.reverse();
    assert_eq!(be, rev);
}
