//! Elementary bit-counting and bit-reversal helpers on 32-bit words.
//!
//! `msb_set` and `lsb_set` report the 0-based position of the highest or
//! lowest set bit and return 32 for an input of zero, so callers can treat
//! "no bit set" as one past the last valid position.

/// Number of bits in the words these helpers operate on.
pub const WORD_BITS: usize = u32::BITS as usize;

/// Count the 1-bits in `number`.
#[inline]
pub fn bits_set(number: u32) -> usize {
    number.count_ones() as usize
}

/// Count contiguous 0-bits starting at the most significant bit.
#[inline]
pub fn leading_zeros(number: u32) -> usize {
    number.leading_zeros() as usize
}

/// Count contiguous 0-bits ending at the least significant bit.
#[inline]
pub fn trailing_zeros(number: u32) -> usize {
    number.trailing_zeros() as usize
}

/// Position of the most significant set bit, or 32 for zero.
#[inline]
pub fn msb_set(number: u32) -> usize {
    if number == 0 {
        WORD_BITS
    } else {
        WORD_BITS - 1 - leading_zeros(number)
    }
}

/// Position of the least significant set bit, or 32 for zero.
#[inline]
pub fn lsb_set(number: u32) -> usize {
    trailing_zeros(number)
}

/// Reverse the order of bits in a byte.
#[inline]
pub fn reverse8(number: u8) -> u8 {
    number.reverse_bits()
}
