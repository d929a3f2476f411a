//! Error types for huffbit operations.
//!
//! Two families of failure surface from this workspace: a construction-time
//! failure when a Huffman length limit cannot be met, and malformed-input
//! failures (bad bit widths, broken UTF-8 sequences, undecodable Huffman
//! codes). Sink/source failures are carried through unchanged as [`HuffbitError::Io`].

use std::io;
use thiserror::Error;

/// The main error type for huffbit operations.
#[derive(Debug, Error)]
pub enum HuffbitError {
    /// I/O error from the underlying sink or source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A bit-stream read or write asked for an unsupported width.
    #[error("Invalid bit width: {0} (must be 1-32)")]
    InvalidBitWidth(u32),

    /// The source ran dry in the middle of a read.
    #[error("Unexpected end of stream at bit position {position}")]
    UnexpectedEof {
        /// Bit position where the source was exhausted.
        position: u64,
    },

    /// A variable-length code point sequence was malformed.
    #[error("Invalid UTF-8 sequence at bit position {position}: byte {byte:#04x}")]
    InvalidUtf8Sequence {
        /// Bit position of the start of the sequence.
        position: u64,
        /// The offending byte.
        byte: u8,
    },

    /// A value is outside the 31-bit range of the extended UTF-8 encoding.
    #[error("Code point {0:#x} out of range (max 0x7fffffff)")]
    CodePointOutOfRange(u32),

    /// The requested maximum code length cannot hold the symbol population.
    #[error("Code length limit too small: {limit} bits cannot encode {symbols} symbols")]
    LimitTooSmall {
        /// The requested maximum code length.
        limit: usize,
        /// Number of symbols that needed a code.
        symbols: usize,
    },

    /// A code was requested for an alphabet with no symbols.
    #[error("Empty alphabet: at least one symbol is required")]
    EmptyAlphabet,

    /// A symbol appeared more than once in an explicit code description.
    #[error("Duplicate symbol {symbol} in code description")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: i32,
    },

    /// Explicit code lengths violate the Kraft inequality.
    #[error("Over-subscribed code lengths")]
    OversubscribedLengths,

    /// No code matched within the longest code length.
    #[error("Invalid Huffman code at bit position {bit_position}")]
    InvalidCode {
        /// Bit position after the last bit examined.
        bit_position: u64,
    },
}

/// Result type alias for huffbit operations.
pub type Result<T> = std::result::Result<T, HuffbitError>;

impl HuffbitError {
    /// Create an invalid bit width error.
    pub fn invalid_bit_width(bits: u32) -> Self {
        Self::InvalidBitWidth(bits)
    }

    /// Create an unexpected end-of-stream error.
    pub fn unexpected_eof(position: u64) -> Self {
        Self::UnexpectedEof { position }
    }

    /// Create an invalid UTF-8 sequence error.
    pub fn invalid_utf8(position: u64, byte: u8) -> Self {
        Self::InvalidUtf8Sequence { position, byte }
    }

    /// Create a code point out of range error.
    pub fn code_point_out_of_range(value: u32) -> Self {
        Self::CodePointOutOfRange(value)
    }

    /// Create a limit-too-small error.
    pub fn limit_too_small(limit: usize, symbols: usize) -> Self {
        Self::LimitTooSmall { limit, symbols }
    }

    /// Create a duplicate symbol error.
    pub fn duplicate_symbol(symbol: i32) -> Self {
        Self::DuplicateSymbol { symbol }
    }

    /// Create an invalid Huffman code error.
    pub fn invalid_code(bit_position: u64) -> Self {
        Self::InvalidCode { bit_position }
    }

    /// Whether this error reports malformed input rather than an I/O or
    /// construction failure.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidBitWidth(_)
                | Self::InvalidUtf8Sequence { .. }
                | Self::CodePointOutOfRange(_)
                | Self::InvalidCode { .. }
                | Self::UnexpectedEof { .. }
        )
    }
}
