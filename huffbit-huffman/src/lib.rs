//! # huffbit Huffman
//!
//! Canonical, length-limited Huffman codes over `i32` symbols.
//!
//! ## Pipeline
//!
//! ```text
//! frequencies ─► HuffmanTreeBuilder ─► length histogram
//!                                          │
//!                        (over limit?) ─► limit_lengths
//!                                          │
//!                                 canonical::assign ─► HuffmanCode
//! ```
//!
//! - [`tree`]: Bottom-up tree construction with deterministic tie-breaking
//! - [`limit`]: Heuristic repair of over-long length histograms
//! - [`canonical`]: Canonical code assignment from per-length symbol lists
//! - [`code`]: The [`HuffmanCode`] encode/decode facade
//! - [`config`]: Length limit presets
//!
//! ## Example
//!
//! ```rust
//! use huffbit_core::bitstream::{BitOrder, BitReader, BitWriter};
//! use huffbit_huffman::{Frequencies, HuffmanCode};
//! use std::io::Cursor;
//!
//! let freqs: Frequencies = [(0, 20), (1, 5), (2, 12), (3, 1), (4, 8)]
//!     .into_iter()
//!     .collect();
//! let code = HuffmanCode::from_frequencies(&freqs, 0).unwrap();
//!
//! let mut output = Vec::new();
//! let mut writer = BitWriter::new(&mut output, BitOrder::Msb);
//! for symbol in [0, 4, 2, 3, 1, 4] {
//!     code.encode(symbol, &mut writer).unwrap();
//! }
//! writer.flush(false).unwrap();
//! drop(writer);
//!
//! let mut reader = BitReader::new(Cursor::new(output), BitOrder::Msb);
//! assert_eq!(code.decode(&mut reader).unwrap(), 0);
//! assert_eq!(code.decode(&mut reader).unwrap(), 4);
//! ```
//!
//! ## Length Limits
//!
//! A limit of 0 leaves the optimal lengths alone (up to the 32-bit ceiling).
//! Presets in [`HuffmanConfig`] cover common formats:
//!
//! - DEFLATE: 15 bits
//! - JPEG: 16 bits
//! - BZip2: 20 bits

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod canonical;
pub mod code;
pub mod config;
pub mod limit;
pub mod tree;

// Re-exports
pub use canonical::CanonicalCode;
pub use code::HuffmanCode;
pub use config::{HuffmanConfig, MAX_CODE_LENGTH};
pub use limit::limit_lengths;
pub use tree::{CodeLengths, Frequencies, HuffmanTreeBuilder, byte_frequencies};
