//! Huffman code construction parameters.

/// Longest code this crate will assign, bounded by the widest value
/// `BitWriter::write` accepts.
pub const MAX_CODE_LENGTH: usize = 32;

/// Huffman construction configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HuffmanConfig {
    /// Maximum code length in bits, or 0 for no limit beyond
    /// [`MAX_CODE_LENGTH`].
    pub max_code_length: usize,
}

impl HuffmanConfig {
    /// No length limit other than [`MAX_CODE_LENGTH`].
    pub const UNLIMITED: Self = Self { max_code_length: 0 };

    /// DEFLATE literal/length and distance codes (15 bits).
    pub const DEFLATE: Self = Self {
        max_code_length: 15,
    };

    /// JPEG baseline Huffman tables (16 bits).
    pub const JPEG: Self = Self {
        max_code_length: 16,
    };

    /// BZip2 coding tables (20 bits).
    pub const BZIP2: Self = Self {
        max_code_length: 20,
    };

    /// Create a configuration with the given maximum code length.
    pub fn new(max_code_length: usize) -> Self {
        Self { max_code_length }
    }

    /// The length bound actually enforced: the configured limit, or
    /// [`MAX_CODE_LENGTH`] when unlimited or larger.
    pub fn effective_limit(&self) -> usize {
        match self.max_code_length {
            0 => MAX_CODE_LENGTH,
            n => n.min(MAX_CODE_LENGTH),
        }
    }
}
