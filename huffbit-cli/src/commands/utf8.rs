//! UTF-8 command implementation.

use huffbit_core::bitstream::{BitOrder, BitWriter};
use huffbit_core::utf8;

fn encode_value(value: u32) -> huffbit_core::Result<Vec<u8>> {
    let mut writer = BitWriter::new(Vec::new(), BitOrder::Msb);
    writer.write_utf8(value)?;
    writer.into_inner()
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn cmd_utf8(values: &[u32]) -> Result<(), Box<dyn std::error::Error>> {
    for &value in values {
        let bytes = encode_value(value)?;
        let note = if utf8::encoded_len(value).is_some_and(|n| n > 4) {
            "  (beyond Unicode range)"
        } else {
            ""
        };
        println!(
            "U+{:04X}  {:>10}  {} byte(s): {}{}",
            value,
            value,
            bytes.len(),
            hex_bytes(&bytes),
            note
        );
    }
    Ok(())
}
