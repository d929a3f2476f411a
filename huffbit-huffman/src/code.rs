//! The [`HuffmanCode`] facade.
//!
//! A `HuffmanCode` is built once and never mutated, so it can be shared
//! freely between threads. Encoding and decoding borrow a caller-owned
//! [`BitWriter`] / [`BitReader`]; the code never holds on to a stream.

use crate::canonical::{self, CanonicalCode};
use crate::config::HuffmanConfig;
use crate::limit::{distribute, limit_lengths};
use crate::tree::{Frequencies, HuffmanTreeBuilder};
use huffbit_core::bitstream::{BitReader, BitWriter};
use huffbit_core::error::{HuffbitError, Result};
use std::collections::HashMap;
use std::io::{Read, Write};
use tracing::debug;

/// Decoding data for one code length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct DecodeBand {
    /// Code of the first symbol in this band.
    first: u32,
    /// Symbols of this length in code order.
    symbols: Vec<i32>,
}

impl DecodeBand {
    fn get(&self, code: u32) -> Option<i32> {
        let offset = code.checked_sub(self.first)? as usize;
        self.symbols.get(offset).copied()
    }
}

/// A canonical prefix code over `i32` symbols.
#[derive(Debug, Clone)]
pub struct HuffmanCode {
    /// Codes in canonical order (by length, then code).
    codes: Vec<CanonicalCode>,
    /// Symbol → index into `codes`.
    index: HashMap<i32, usize>,
    /// `bands[i]` covers codes of length `i + 1`.
    bands: Vec<DecodeBand>,
}

impl HuffmanCode {
    /// Build a code from symbols grouped by length: `symbol_lists[i]` holds
    /// the symbols of length `i + 1`, in the order they receive codes.
    pub fn from_symbol_lists(symbol_lists: &[Vec<i32>]) -> Result<Self> {
        let codes = canonical::assign(symbol_lists)?;
        let code = Self::from_codes(codes);
        debug!(
            symbols = code.symbol_count(),
            max_length = code.max_length(),
            "built Huffman code from symbol lists"
        );
        Ok(code)
    }

    /// Build a code from `(symbol, length)` pairs. Length 0 means the
    /// symbol is absent.
    pub fn from_lengths(lengths: &[(i32, usize)]) -> Result<Self> {
        let bands = canonical::bands_from_lengths(lengths)?;
        Self::from_symbol_lists(&bands)
    }

    /// Build an optimal code for `frequencies`, limited to `limit` bits.
    ///
    /// A `limit` of 0 means no limit, although lengths are still capped at
    /// [`MAX_CODE_LENGTH`](crate::MAX_CODE_LENGTH).
    ///
    /// # Errors
    ///
    /// [`HuffbitError::EmptyAlphabet`] for an empty table, and
    /// [`HuffbitError::LimitTooSmall`] when `limit` cannot accommodate the
    /// number of symbols.
    pub fn from_frequencies(frequencies: &Frequencies, limit: usize) -> Result<Self> {
        Self::with_config(frequencies, HuffmanConfig::new(limit))
    }

    /// Build an optimal code for `frequencies` under `config`.
    pub fn with_config(frequencies: &Frequencies, config: HuffmanConfig) -> Result<Self> {
        let lengths = HuffmanTreeBuilder::from_frequencies(frequencies).build_lengths()?;
        let limit = config.effective_limit();

        let mut population = lengths.population.clone();
        let limited = population.len() > limit;
        if limited {
            limit_lengths(&mut population, limit)?;
        }
        let lists = distribute(&lengths, &population);

        let code = Self::from_codes(canonical::assign(&lists)?);
        debug!(
            symbols = code.symbol_count(),
            max_length = code.max_length(),
            tree_depth = lengths.max_length(),
            limited,
            "built Huffman code from frequencies"
        );
        Ok(code)
    }

    fn from_codes(codes: Vec<CanonicalCode>) -> Self {
        let max_length = codes.last().map_or(0, |c| c.length);
        let mut bands = vec![DecodeBand::default(); max_length];
        let mut index = HashMap::with_capacity(codes.len());

        for (i, c) in codes.iter().enumerate() {
            let band = &mut bands[c.length - 1];
            if band.symbols.is_empty() {
                band.first = c.code;
            }
            band.symbols.push(c.symbol);
            index.insert(c.symbol, i);
        }

        Self {
            codes,
            index,
            bands,
        }
    }

    /// The codeword for `symbol`, if it is part of this code.
    pub fn lookup(&self, symbol: i32) -> Option<CanonicalCode> {
        self.index.get(&symbol).map(|&i| self.codes[i])
    }

    /// The symbol whose codeword is exactly `code` in `length` bits.
    pub fn lookup_code(&self, code: u32, length: usize) -> Option<i32> {
        let band = self.bands.get(length.checked_sub(1)?)?;
        band.get(code)
    }

    /// Write the codeword for `symbol`.
    ///
    /// Returns `Ok(false)` and writes nothing if `symbol` has no code.
    pub fn encode<W: Write>(&self, symbol: i32, writer: &mut BitWriter<W>) -> Result<bool> {
        let Some(c) = self.lookup(symbol) else {
            return Ok(false);
        };
        writer.write(c.code, c.length as u32)?;
        Ok(true)
    }

    /// Read one codeword and return its symbol.
    ///
    /// Bits are consumed one at a time until they match a code. If no code
    /// matches within [`max_length`](Self::max_length) bits the input is
    /// malformed.
    pub fn decode<R: Read>(&self, reader: &mut BitReader<R>) -> Result<i32> {
        let start = reader.bit_position();
        let mut code = 0u32;
        for band in &self.bands {
            code = (code << 1) | u32::from(reader.read_bit()?);
            if let Some(symbol) = band.get(code) {
                return Ok(symbol);
            }
        }
        Err(HuffbitError::invalid_code(start))
    }

    /// Number of symbols in the code.
    pub fn symbol_count(&self) -> usize {
        self.codes.len()
    }

    /// Longest code length in bits.
    pub fn max_length(&self) -> usize {
        self.bands.len()
    }

    /// `counts[i]` is the number of codes of length `i + 1`.
    pub fn length_counts(&self) -> Vec<usize> {
        self.bands.iter().map(|b| b.symbols.len()).collect()
    }

    /// Symbols in canonical code order.
    pub fn ordered_symbols(&self) -> Vec<i32> {
        self.codes.iter().map(|c| c.symbol).collect()
    }

    /// Symbols grouped by length, suitable for [`from_symbol_lists`](Self::from_symbol_lists).
    pub fn symbol_lists(&self) -> Vec<Vec<i32>> {
        self.bands.iter().map(|b| b.symbols.clone()).collect()
    }

    /// Iterate over the codewords in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalCode> {
        self.codes.iter()
    }
}

impl<'a> IntoIterator for &'a HuffmanCode {
    type Item = &'a CanonicalCode;
    type IntoIter = std::slice::Iter<'a, CanonicalCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
