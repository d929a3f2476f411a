//! Bit stream integration tests.

use huffbit_core::bitops::reverse8;
use huffbit_core::bitstream::{BitOrder, BitReader, BitWriter};
use huffbit_core::error::HuffbitError;
use std::io::Cursor;

/// `(value, width)` pairs from a fixed-seed LCG.
fn random_fields(count: usize, seed: u64) -> Vec<(u32, u32)> {
    let mut state = seed;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (state >> 32) as u32
    };
    (0..count)
        .map(|_| {
            let width = next() % 32 + 1;
            let mask = if width == 32 { u32::MAX } else { (1 << width) - 1 };
            (next() & mask, width)
        })
        .collect()
}

fn write_fields(fields: &[(u32, u32)], order: BitOrder, fill: bool) -> (Vec<u8>, u64) {
    let mut writer = BitWriter::new(Vec::new(), order);
    let mut emitted = 0;
    for &(value, width) in fields {
        emitted += writer.write(value, width).expect("write failed");
    }
    emitted += writer.flush(fill).expect("flush failed");
    let bits = writer.bits_written();
    let output = writer.into_inner().expect("into_inner failed");
    assert_eq!(emitted, output.len());
    (output, bits)
}

#[test]
fn test_mixed_width_roundtrip() {
    let fields = random_fields(2000, 0xDEADBEEF);
    let payload_bits: u64 = fields.iter().map(|&(_, w)| w as u64).sum();

    for order in [BitOrder::Msb, BitOrder::Lsb] {
        let (output, bits) = write_fields(&fields, order, false);
        assert_eq!(output.len() as u64, payload_bits.div_ceil(8));
        assert_eq!(bits, output.len() as u64 * 8);

        let mut reader = BitReader::new(Cursor::new(output), order);
        for &(value, width) in &fields {
            assert_eq!(reader.read(width).unwrap(), value, "width {}", width);
        }
        assert_eq!(reader.bit_position(), payload_bits);
    }
}

#[test]
fn test_orders_differ_by_byte_reversal() {
    let fields = random_fields(500, 17);
    let (msb, _) = write_fields(&fields, BitOrder::Msb, true);
    let (lsb, _) = write_fields(&fields, BitOrder::Lsb, true);

    let reversed: Vec<u8> = msb.iter().map(|&b| reverse8(b)).collect();
    assert_eq!(lsb, reversed);
}

#[test]
fn test_reading_with_wrong_order_scrambles() {
    let mut writer = BitWriter::new(Vec::new(), BitOrder::Lsb);
    writer.write(0b1100_0000, 8).unwrap();
    let output = writer.into_inner().unwrap();
    assert_eq!(output, vec![0b0000_0011]);

    let mut reader = BitReader::new(Cursor::new(output), BitOrder::Msb);
    assert_eq!(reader.read(8).unwrap(), 0b0000_0011);
}

#[test]
fn test_bytes_and_utf8_interleaved() {
    let mut writer = BitWriter::new(Vec::new(), BitOrder::Msb);
    writer.write(0b101, 3).unwrap();
    writer.write_utf8(0x1F600).unwrap();
    writer.write_bytes(b"huff").unwrap();
    writer.write_utf8(0x7FFF_FFFF).unwrap();
    writer.write(1, 1).unwrap();
    let output = writer.into_inner().unwrap();
    // 3 + 32 + 32 + 48 + 1 bits
    assert_eq!(output.len(), 15);

    let mut reader = BitReader::new(Cursor::new(output), BitOrder::Msb);
    assert_eq!(reader.read(3).unwrap(), 0b101);
    assert_eq!(reader.read_utf8().unwrap(), 0x1F600);
    let mut buf = [0u8; 4];
    assert_eq!(reader.read_bytes(&mut buf).unwrap(), 4);
    assert_eq!(&buf, b"huff");
    assert_eq!(reader.read_utf8().unwrap(), 0x7FFF_FFFF);
    assert!(reader.read_bit().unwrap());
}

#[test]
fn test_eof_reports_position() {
    let mut reader = BitReader::new(Cursor::new(vec![0xAB, 0xCD]), BitOrder::Msb);
    assert_eq!(reader.read(12).unwrap(), 0xABC);
    match reader.read(8) {
        Err(HuffbitError::UnexpectedEof { position }) => assert_eq!(position, 16),
        other => panic!("expected EOF, got {:?}", other),
    }
}
