//! Test command implementation.

use huffbit_core::bitstream::{BitOrder, BitReader, BitWriter};
use huffbit_core::md5::{Md5, to_hex};
use huffbit_huffman::{HuffmanCode, byte_frequencies};
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

/// Options for the test command.
pub struct TestOptions {
    pub limit: usize,
    pub lsb: bool,
    pub verbose: bool,
}

/// Outcome of a round trip through a Huffman code.
#[derive(Debug)]
struct RoundTrip {
    encoded: Vec<u8>,
    decoded: Vec<u8>,
    max_length: usize,
}

fn round_trip(data: &[u8], limit: usize, order: BitOrder) -> huffbit_core::Result<RoundTrip> {
    let code = HuffmanCode::from_frequencies(&byte_frequencies(data), limit)?;

    let mut writer = BitWriter::new(Vec::with_capacity(data.len()), order);
    for &b in data {
        code.encode(b as i32, &mut writer)?;
    }
    debug!(bits = writer.bits_written(), "encoded input");
    let encoded = writer.into_inner()?;

    let mut reader = BitReader::new(Cursor::new(&encoded), order);
    let mut decoded = Vec::with_capacity(data.len());
    for _ in 0..data.len() {
        // Every symbol of the code is a byte value
        decoded.push(code.decode(&mut reader)? as u8);
    }

    Ok(RoundTrip {
        encoded,
        decoded,
        max_length: code.max_length(),
    })
}

pub fn cmd_test(file: &Path, options: &TestOptions) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(file)?;
    let order = if options.lsb {
        BitOrder::Lsb
    } else {
        BitOrder::Msb
    };

    println!("Testing {} ({:?} first)", file.display(), order);
    if data.is_empty() {
        println!("  Empty file, nothing to encode");
        return Ok(());
    }

    let result = round_trip(&data, options.limit, order)?;
    let original_md5 = Md5::digest(&data);
    let decoded_md5 = Md5::digest(&result.decoded);
    info!(
        original = %to_hex(&original_md5),
        decoded = %to_hex(&decoded_md5),
        "round trip digests"
    );

    if options.verbose {
        println!("  Longest code: {} bits", result.max_length);
        println!("  MD5 (original): {}", to_hex(&original_md5));
        println!("  MD5 (decoded):  {}", to_hex(&decoded_md5));
    }
    println!(
        "  {} -> {} bytes ({:.1}%)",
        data.len(),
        result.encoded.len(),
        result.encoded.len() as f64 / data.len() as f64 * 100.0
    );

    if original_md5 != decoded_md5 {
        return Err(format!("{}: decoded data does not match", file.display()).into());
    }
    println!("  OK");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use huffbit_core::error::HuffbitError;

    #[test]
    fn test_round_trip_both_orders() {
        let data = b"she sells sea shells by the sea shore".repeat(5);
        for order in [BitOrder::Msb, BitOrder::Lsb] {
            let result = round_trip(&data, 0, order).unwrap();
            assert_eq!(result.decoded, data);
            assert!(result.encoded.len() < data.len());
        }
    }

    #[test]
    fn test_round_trip_limited() {
        let data: Vec<u8> = (0..=255u8).chain(std::iter::repeat_n(b'x', 5000)).collect();
        let result = round_trip(&data, 9, BitOrder::Msb).unwrap();
        assert!(result.max_length <= 9);
        assert_eq!(result.decoded, data);
    }

    #[test]
    fn test_round_trip_single_byte_value() {
        let data = vec![0u8; 100];
        let result = round_trip(&data, 0, BitOrder::Lsb).unwrap();
        // One bit per byte
        assert_eq!(result.encoded.len(), 13);
        assert_eq!(result.decoded, data);
    }

    #[test]
    fn test_round_trip_infeasible_limit() {
        let data: Vec<u8> = (0..=255u8).collect();
        assert!(matches!(
            round_trip(&data, 7, BitOrder::Msb),
            Err(HuffbitError::LimitTooSmall { .. })
        ));
    }
}
