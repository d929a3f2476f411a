//! Codes command implementation.

use super::symbol_label;
use huffbit_huffman::{HuffmanCode, byte_frequencies};
use serde::Serialize;
use std::path::Path;

/// Options for the codes command.
pub struct CodesOptions {
    pub limit: usize,
    pub json: bool,
}

/// JSON serializable codeword.
#[derive(Debug, Serialize)]
struct CodeJson {
    symbol: i32,
    frequency: u64,
    length: usize,
    code: String,
}

/// JSON output for a code table.
#[derive(Debug, Serialize)]
struct CodeReport {
    input_bytes: usize,
    limit: usize,
    max_length: usize,
    length_counts: Vec<usize>,
    encoded_bits: u64,
    codes: Vec<CodeJson>,
}

impl CodeReport {
    fn average_length(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.input_bytes as f64
        }
    }
}

fn build_report(data: &[u8], limit: usize) -> huffbit_core::Result<CodeReport> {
    let freqs = byte_frequencies(data);
    let code = HuffmanCode::from_frequencies(&freqs, limit)?;

    let codes: Vec<CodeJson> = code
        .iter()
        .map(|c| CodeJson {
            symbol: c.symbol,
            frequency: freqs.get(&c.symbol).copied().unwrap_or(0),
            length: c.length,
            code: c.to_string(),
        })
        .collect();
    let encoded_bits = codes.iter().map(|c| c.frequency * c.length as u64).sum();

    Ok(CodeReport {
        input_bytes: data.len(),
        limit,
        max_length: code.max_length(),
        length_counts: code.length_counts(),
        encoded_bits,
        codes,
    })
}

pub fn cmd_codes(file: &Path, options: &CodesOptions) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(file)?;
    let report = build_report(&data, options.limit)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("File: {}", file.display());
    println!("Symbols: {}", report.codes.len());
    if options.limit > 0 {
        println!("Length limit: {} bits", options.limit);
    }
    println!("Longest code: {} bits", report.max_length);
    println!(
        "Encoded size: {} bits ({} bytes, {:.3} bits/byte)",
        report.encoded_bits,
        report.encoded_bits.div_ceil(8),
        report.average_length()
    );
    println!();
    println!("{:>8}  {:>10}  {:>3}  Code", "Symbol", "Count", "Len");
    println!("{}", "-".repeat(40));
    for c in &report.codes {
        println!(
            "{:>8}  {:>10}  {:>3}  {}",
            symbol_label(c.symbol),
            c.frequency,
            c.length,
            c.code
        );
    }

    Ok(())
}
