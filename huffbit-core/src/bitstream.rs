//! Bit-level I/O over byte sinks and sources.
//!
//! This module provides [`BitWriter`] and [`BitReader`], which pack and
//! unpack values of 1 to 32 bits into a flat byte sequence. Both hold at most
//! one partially filled byte (a [`BitCursor`]) and touch the underlying
//! sink/source exactly once per byte boundary crossed.
//!
//! # Bit Ordering
//!
//! Values are always accumulated most-significant-bit first: the top bit of a
//! value lands in the highest free bit of the current byte. The configured
//! [`BitOrder`] only decides how a completed byte is put on the wire:
//!
//! - [`BitOrder::Msb`] emits the byte as accumulated.
//! - [`BitOrder::Lsb`] reverses the byte's 8 bits just before it is written
//!   (and just after it is read), which is what DEFLATE-style formats expect.
//!
//! The stream carries no framing and does not describe its own bit order, so
//! writer and reader must agree on it out of band.
//!
//! # Example
//!
//! ```
//! use huffbit_core::bitstream::{BitOrder, BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut output, BitOrder::Msb);
//!     writer.write(0b101, 3).unwrap();
//!     writer.write(0b11, 2).unwrap();
//!     writer.flush(false).unwrap();
//! }
//! assert_eq!(output, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(Cursor::new(&output), BitOrder::Msb);
//! assert_eq!(reader.read(3).unwrap(), 0b101);
//! assert_eq!(reader.read(2).unwrap(), 0b11);
//! ```

use crate::bitops::reverse8;
use crate::error::{HuffbitError, Result};
use crate::utf8::{self, UTF8_MAX_LEN};
use std::io::{self, Read, Write};

/// Widest value a single `write`/`read` call accepts.
pub const MAX_BITS: u32 = 32;

/// Order of bits within each byte on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// Most significant bit first (JPEG, TIFF LZW, bzip2).
    #[default]
    Msb,
    /// Least significant bit first (DEFLATE, zlib, GIF).
    Lsb,
}

impl BitOrder {
    /// Bit order used by DEFLATE streams.
    pub const DEFLATE: Self = Self::Lsb;

    /// Convert a byte between accumulator order and wire order.
    ///
    /// The transform is its own inverse, so the same call is used on both
    /// the write and the read side.
    #[inline]
    pub fn apply(self, cell: u8) -> u8 {
        match self {
            Self::Msb => cell,
            Self::Lsb => reverse8(cell),
        }
    }
}

#[inline]
fn check_width(bits: u32) -> Result<()> {
    if bits == 0 || bits > MAX_BITS {
        return Err(HuffbitError::invalid_bit_width(bits));
    }
    Ok(())
}

/// A partially filled byte and its fill position.
///
/// On the write side `index` counts bits appended so far; on the read side it
/// counts bits already consumed from the fetched byte. Bits are kept in
/// accumulator order: the first bit appended or consumed is the byte's MSB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitCursor {
    cell: u8,
    index: u32,
}

impl BitCursor {
    /// Width of a cell in bits.
    pub const WIDTH: u32 = u8::BITS;

    /// A cursor with no bits appended.
    pub const fn empty() -> Self {
        Self { cell: 0, index: 0 }
    }

    /// A cursor whose bits have all been consumed.
    pub const fn exhausted() -> Self {
        Self {
            cell: 0,
            index: Self::WIDTH,
        }
    }

    /// Current fill position.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Bits left before the cell is full (or fully consumed).
    #[inline]
    pub fn room(&self) -> u32 {
        Self::WIDTH - self.index
    }

    /// Whether the fill position has reached the cell width.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.index == Self::WIDTH
    }

    /// Append the low `count` bits of `bits`. `count` must not exceed [`room`](Self::room).
    #[inline]
    pub fn append(&mut self, bits: u32, count: u32) {
        debug_assert!(count >= 1 && count <= self.room());
        let mask = (1u32 << count) - 1;
        self.cell = (((self.cell as u32) << count) | (bits & mask)) as u8;
        self.index += count;
    }

    /// Take the next `count` unconsumed bits. `count` must not exceed [`room`](Self::room).
    #[inline]
    pub fn extract(&mut self, count: u32) -> u32 {
        debug_assert!(count >= 1 && count <= self.room());
        let shift = self.room() - count;
        let mask = ((1u32 << count) - 1) << shift;
        self.index += count;
        ((self.cell as u32) & mask) >> shift
    }

    /// Replace the cell with a freshly fetched byte.
    #[inline]
    pub fn load(&mut self, cell: u8) {
        self.cell = cell;
        self.index = 0;
    }

    /// Return the completed cell and reset to empty.
    #[inline]
    pub fn take(&mut self) -> u8 {
        let cell = self.cell;
        *self = Self::empty();
        cell
    }

    /// Move pending bits to the top of the cell, padding the vacated low
    /// bits with ones when `fill` is set, and reset to empty.
    pub fn left_justify(&mut self, fill: bool) -> u8 {
        let remaining = self.room();
        let mut cell = ((self.cell as u32) << remaining) as u8;
        if fill {
            cell |= ((1u32 << remaining) - 1) as u8;
        }
        *self = Self::empty();
        cell
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// Bits are accumulated in a single byte; each completed byte is written to
/// the sink immediately. Call [`flush`](Self::flush) to emit a trailing
/// partial byte. Dropping the writer performs a best-effort zero-padded
/// flush.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying sink.
    writer: W,
    /// The byte being built.
    cursor: BitCursor,
    /// Wire bit order.
    order: BitOrder,
    /// Total bits accepted.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given sink.
    pub fn new(writer: W, order: BitOrder) -> Self {
        Self {
            writer,
            cursor: BitCursor::empty(),
            order,
            total_bits_written: 0,
        }
    }

    /// Get a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get a mutable reference to the underlying sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Flush any pending bits (zero-padded) and return the underlying sink.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush(false)?;
        // Use ManuallyDrop to prevent Drop from running (we already flushed)
        let this = std::mem::ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped or used again, so the sink is moved out exactly once
        Ok(unsafe { std::ptr::read(&this.writer) })
    }

    /// The configured wire bit order.
    pub fn order(&self) -> BitOrder {
        self.order
    }

    /// Total number of bits accepted so far, including pending bits and
    /// flush padding.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Number of bits waiting in the partial byte.
    pub fn pending_bits(&self) -> u32 {
        self.cursor.index()
    }

    /// Discard any buffered bits not yet written.
    pub fn reset(&mut self) {
        self.total_bits_written -= self.cursor.index() as u64;
        self.cursor = BitCursor::empty();
    }

    #[inline]
    fn emit(&mut self, cell: u8) -> Result<()> {
        self.writer.write_all(&[self.order.apply(cell)])?;
        Ok(())
    }

    /// Write the low `bits` bits of `value`, most significant first.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to write; bits above `bits` are ignored
    /// * `bits` - Number of bits to write (1-32)
    ///
    /// # Returns
    ///
    /// The number of whole bytes emitted to the sink by this call.
    pub fn write(&mut self, value: u32, bits: u32) -> Result<usize> {
        check_width(bits)?;

        let mut remaining = bits;
        let mut emitted = 0;
        while remaining > 0 {
            let take = self.cursor.room().min(remaining);
            let shift = remaining - take;
            self.cursor.append(value >> shift, take);
            self.total_bits_written += take as u64;
            remaining -= take;

            if self.cursor.is_full() {
                let cell = self.cursor.take();
                self.emit(cell)?;
                emitted += 1;
            }
        }
        Ok(emitted)
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<usize> {
        self.write(bit as u32, 1)
    }

    /// Write each byte of `buf` as an 8-bit value.
    ///
    /// Returns the number of whole bytes emitted to the sink.
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<usize> {
        let mut emitted = 0;
        for &byte in buf {
            emitted += self.write(byte as u32, 8)?;
        }
        Ok(emitted)
    }

    /// Write `value` in the extended UTF-8 variable-length encoding.
    ///
    /// Returns the number of whole bytes emitted to the sink.
    pub fn write_utf8(&mut self, value: u32) -> Result<usize> {
        let mut buf = [0u8; UTF8_MAX_LEN];
        let len = utf8::encode(value, &mut buf)
            .ok_or_else(|| HuffbitError::code_point_out_of_range(value))?;
        self.write_bytes(&buf[..len])
    }

    /// Emit the trailing partial byte, if any.
    ///
    /// Pending bits are moved to the top of the byte and the vacated low
    /// bits are padded with ones when `fill` is set, zeros otherwise. With no
    /// pending bits this is a no-op returning 0.
    ///
    /// Returns the number of bytes emitted (0 or 1).
    pub fn flush(&mut self, fill: bool) -> Result<usize> {
        if self.cursor.index() == 0 {
            return Ok(0);
        }

        let padding = self.cursor.room();
        let cell = self.cursor.left_justify(fill);
        self.emit(cell)?;
        self.total_bits_written += padding as u64;
        self.writer.flush()?;
        Ok(1)
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        // Best-effort flush on drop
        if let Err(e) = self.flush(false) {
            tracing::warn!("dropping BitWriter with unflushed bits: {}", e);
        }
    }
}

/// A bit-level reader that wraps any `Read` implementation.
///
/// Bytes are fetched from the source one at a time, only when the current
/// byte has been fully consumed.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying source.
    reader: R,
    /// The byte being consumed.
    cursor: BitCursor,
    /// Wire bit order.
    order: BitOrder,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given source.
    pub fn new(reader: R, order: BitOrder) -> Self {
        Self {
            reader,
            cursor: BitCursor::exhausted(),
            order,
            total_bits_read: 0,
        }
    }

    /// Get a reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Get a mutable reference to the underlying source.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consume this `BitReader` and return the underlying source.
    ///
    /// Unconsumed bits of the current byte are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// The configured wire bit order.
    pub fn order(&self) -> BitOrder {
        self.order
    }

    /// Get the current bit position (for error reporting).
    pub fn bit_position(&self) -> u64 {
        self.total_bits_read
    }

    fn fetch(&mut self) -> Result<()> {
        let mut byte = [0u8; 1];
        match self.reader.read_exact(&mut byte) {
            Ok(()) => {
                self.cursor.load(self.order.apply(byte[0]));
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(HuffbitError::unexpected_eof(self.total_bits_read))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read `bits` bits, the first bit read becoming the most significant.
    ///
    /// # Arguments
    ///
    /// * `bits` - Number of bits to read (1-32)
    pub fn read(&mut self, bits: u32) -> Result<u32> {
        check_width(bits)?;

        let mut value = 0u32;
        let mut remaining = bits;
        while remaining > 0 {
            if self.cursor.is_full() {
                self.fetch()?;
            }
            let take = self.cursor.room().min(remaining);
            // take <= 8, so the shift never reaches the width of u32
            value = (value << take) | self.cursor.extract(take);
            self.total_bits_read += take as u64;
            remaining -= take;
        }
        Ok(value)
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read(1)? != 0)
    }

    /// Fill `buf` with successive 8-bit values.
    ///
    /// Returns the number of bytes read, which is always `buf.len()` on success.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        for byte in buf.iter_mut() {
            *byte = self.read(8)? as u8;
        }
        Ok(buf.len())
    }

    /// Read one value in the extended UTF-8 variable-length encoding.
    pub fn read_utf8(&mut self) -> Result<u32> {
        let start = self.bit_position();
        let mut buf = [0u8; UTF8_MAX_LEN];
        buf[0] = self.read(8)? as u8;

        let len =
            utf8::sequence_len(buf[0]).ok_or_else(|| HuffbitError::invalid_utf8(start, buf[0]))?;
        self.read_bytes(&mut buf[1..len])?;

        match utf8::decode(&buf[..len]) {
            Some((value, _)) => Ok(value),
            None => {
                let bad = buf[1..len]
                    .iter()
                    .copied()
                    .find(|&b| !utf8::is_continuation(b))
                    .unwrap_or(buf[0]);
                Err(HuffbitError::invalid_utf8(start, bad))
            }
        }
    }

    /// Discard the unconsumed bits of the current byte.
    pub fn align_to_byte(&mut self) {
        self.total_bits_read += self.cursor.room() as u64;
        self.cursor = BitCursor::exhausted();
    }
}
