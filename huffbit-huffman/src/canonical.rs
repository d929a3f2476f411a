//! Canonical code assignment.
//!
//! Given symbols grouped by code length, codes are handed out in order:
//! within a band consecutive symbols get consecutive codes, and moving to
//! the next length shifts the running code left by one. The first code of
//! length `k + 1` is therefore `(last code of length k + 1) << 1`, which is
//! what makes the code prefix-free and lets the decoder identify a band by
//! comparing against its first code.

use crate::config::MAX_CODE_LENGTH;
use huffbit_core::error::{HuffbitError, Result};
use std::collections::HashSet;
use std::fmt;

/// A single codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalCode {
    /// Symbol this code stands for.
    pub symbol: i32,
    /// Code bits, right-aligned.
    pub code: u32,
    /// Code length in bits (1-32).
    pub length: usize,
}

impl fmt::Display for CanonicalCode {
    /// Formats the code as a string of `0`/`1`, most significant bit first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.code, width = self.length)
    }
}

/// Assign canonical codes to `symbol_lists`, where `symbol_lists[i]` holds
/// the symbols of length `i + 1` in the order they should receive codes.
///
/// Empty bands are allowed anywhere. Codes come back in assignment order.
///
/// # Errors
///
/// - [`HuffbitError::EmptyAlphabet`] if no band holds a symbol
/// - [`HuffbitError::DuplicateSymbol`] if a symbol appears twice
/// - [`HuffbitError::OversubscribedLengths`] if a band runs out of codes
/// - [`HuffbitError::InvalidBitWidth`] if a populated band is longer than
///   [`MAX_CODE_LENGTH`]
pub fn assign(symbol_lists: &[Vec<i32>]) -> Result<Vec<CanonicalCode>> {
    let total: usize = symbol_lists.iter().map(Vec::len).sum();
    if total == 0 {
        return Err(HuffbitError::EmptyAlphabet);
    }

    let mut seen = HashSet::with_capacity(total);
    let mut codes = Vec::with_capacity(total);
    let mut code: u64 = 0;

    for (index, band) in symbol_lists.iter().enumerate() {
        let length = index + 1;
        if !band.is_empty() && length > MAX_CODE_LENGTH {
            return Err(HuffbitError::invalid_bit_width(length as u32));
        }
        for &symbol in band {
            if !seen.insert(symbol) {
                return Err(HuffbitError::duplicate_symbol(symbol));
            }
            if code >> length != 0 {
                return Err(HuffbitError::OversubscribedLengths);
            }
            codes.push(CanonicalCode {
                symbol,
                code: code as u32,
                length,
            });
            code += 1;
        }
        // Past the last populated band the running code no longer matters
        if codes.len() == total {
            break;
        }
        code <<= 1;
    }

    Ok(codes)
}

/// Group `(symbol, length)` pairs into per-length bands sorted by symbol.
///
/// Length 0 marks an unused symbol and is skipped, as in DEFLATE and JPEG
/// length tables. Trailing empty bands are not produced.
///
/// # Errors
///
/// [`HuffbitError::InvalidBitWidth`] for a length above
/// [`MAX_CODE_LENGTH`].
pub fn bands_from_lengths(lengths: &[(i32, usize)]) -> Result<Vec<Vec<i32>>> {
    let mut bands: Vec<Vec<i32>> = Vec::new();
    for &(symbol, length) in lengths {
        if length == 0 {
            continue;
        }
        if length > MAX_CODE_LENGTH {
            return Err(HuffbitError::invalid_bit_width(length as u32));
        }
        if bands.len() < length {
            bands.resize_with(length, Vec::new);
        }
        bands[length - 1].push(symbol);
    }
    for band in &mut bands {
        band.sort_unstable();
    }
    Ok(bands)
}
