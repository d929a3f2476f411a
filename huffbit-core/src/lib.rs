//! # huffbit Core
//!
//! Core components for the huffbit workspace.
//!
//! This crate provides the bit-level building blocks that binary formats are
//! layered on:
//!
//! - [`bitstream`]: Bit-granular writer/reader with selectable bit order
//! - [`bitops`]: Population count, leading/trailing zeros, bit reversal
//! - [`utf8`]: Extended (6-byte) UTF-8 variable-length integer code
//! - [`md5`]: Incremental MD5 digest
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Format layer (not provided)                             │
//! │     containers, headers, table transmission             │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codec: huffbit-huffman                                  │
//! │     tree building, length limiting, canonical codes     │
//! ├─────────────────────────────────────────────────────────┤
//! │ BitStream (this crate)                                  │
//! │     BitReader/BitWriter, UTF-8 varints, MD5             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use huffbit_core::bitstream::{BitOrder, BitReader, BitWriter};
//! use huffbit_core::md5::Md5;
//! use std::io::Cursor;
//!
//! // Pack a few odd-width values
//! let mut output = Vec::new();
//! let mut writer = BitWriter::new(&mut output, BitOrder::Msb);
//! writer.write(0x5, 3).unwrap();
//! writer.write(0x1FF, 9).unwrap();
//! writer.flush(false).unwrap();
//! drop(writer);
//!
//! let mut reader = BitReader::new(Cursor::new(output), BitOrder::Msb);
//! assert_eq!(reader.read(3).unwrap(), 0x5);
//! assert_eq!(reader.read(9).unwrap(), 0x1FF);
//!
//! // Digest some bytes
//! let digest = Md5::digest(b"abc");
//! assert_eq!(digest[0], 0x90);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitops;
pub mod bitstream;
pub mod error;
pub mod md5;
pub mod utf8;

// Re-exports for convenience
pub use bitstream::{BitCursor, BitOrder, BitReader, BitWriter};
pub use error::{HuffbitError, Result};
pub use md5::Md5;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitOrder, BitReader, BitWriter};
    pub use crate::error::{HuffbitError, Result};
    pub use crate::md5::Md5;
}
