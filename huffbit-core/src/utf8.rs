//! Extended (pre-2003) UTF-8 encoding of unsigned integers.
//!
//! Values are packed into 1 to 6 bytes. The lead byte's high-bit pattern
//! gives the sequence length and every continuation byte is tagged
//! `10xxxxxx`. Unlike RFC 3629 UTF-8, which stops at 4 bytes and U+10FFFF,
//! this scheme covers the full 31-bit range, so it works as a general
//! variable-length integer code.
//!
//! | Range                     | Bytes | Lead byte  |
//! |---------------------------|-------|------------|
//! | `0x00..0x80`              | 1     | `0xxxxxxx` |
//! | `0x80..0x800`             | 2     | `110xxxxx` |
//! | `0x800..0x1_0000`         | 3     | `1110xxxx` |
//! | `0x1_0000..0x20_0000`     | 4     | `11110xxx` |
//! | `0x20_0000..0x400_0000`   | 5     | `111110xx` |
//! | `0x400_0000..0x8000_0000` | 6     | `1111110x` |
//!
//! Decoding does not reject overlong forms.

/// Longest encoded sequence in bytes.
pub const UTF8_MAX_LEN: usize = 6;

/// Largest encodable value.
pub const MAX_CODE_POINT: u32 = 0x7FFF_FFFF;

/// Number of bytes needed to encode `value`, or `None` above [`MAX_CODE_POINT`].
pub fn encoded_len(value: u32) -> Option<usize> {
    match value {
        0..0x80 => Some(1),
        0x80..0x800 => Some(2),
        0x800..0x1_0000 => Some(3),
        0x1_0000..0x20_0000 => Some(4),
        0x20_0000..0x400_0000 => Some(5),
        0x400_0000..=MAX_CODE_POINT => Some(6),
        _ => None,
    }
}

/// Encode `value` into `dst`, returning the number of bytes used.
///
/// Returns `None` when `value` exceeds [`MAX_CODE_POINT`]; `dst` is left
/// untouched in that case.
pub fn encode(value: u32, dst: &mut [u8; UTF8_MAX_LEN]) -> Option<usize> {
    let len = encoded_len(value)?;
    if len == 1 {
        dst[0] = value as u8;
        return Some(1);
    }

    let mut v = value;
    for byte in dst[1..len].iter_mut().rev() {
        *byte = 0x80 | (v & 0x3F) as u8;
        v >>= 6;
    }
    // len ones followed by a zero
    let lead_mask = !(0xFFu8 >> len);
    dst[0] = lead_mask | v as u8;
    Some(len)
}

/// Total sequence length announced by a lead byte.
///
/// Returns `None` for a stray continuation byte (`10xxxxxx`) and for
/// `0xFE`/`0xFF`, which would announce more than six bytes.
pub fn sequence_len(lead: u8) -> Option<usize> {
    match lead.leading_ones() as usize {
        0 => Some(1),
        1 => None,
        n if n <= UTF8_MAX_LEN => Some(n),
        _ => None,
    }
}

/// Decode one value from the start of `src`.
///
/// Returns the value and the number of bytes consumed, or `None` if the
/// lead byte is invalid, the input is truncated, or a continuation byte
/// lacks the `10` tag.
pub fn decode(src: &[u8]) -> Option<(u32, usize)> {
    let lead = *src.first()?;
    let len = sequence_len(lead)?;
    if len == 1 {
        return Some((lead as u32, 1));
    }
    if src.len() < len {
        return None;
    }

    let mut value = (lead & (0x7F >> len)) as u32;
    for &byte in &src[1..len] {
        if !is_continuation(byte) {
            return None;
        }
        value = (value << 6) | (byte & 0x3F) as u32;
    }
    Some((value, len))
}

/// Whether `byte` carries the continuation tag `10xxxxxx`.
#[inline]
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
