//! MD5 message digest (RFC 1321).
//!
//! [`Md5`] accumulates input incrementally. [`Md5::finalize`] consumes the
//! accumulator, so feeding more data after the digest has been produced is a
//! compile-time error rather than a silent misuse.
//!
//! # Example
//!
//! ```
//! use huffbit_core::md5::{Md5, to_hex};
//!
//! let mut md5 = Md5::new();
//! md5.consume(b"Hello, ");
//! md5.consume(b"World!");
//! assert_eq!(to_hex(&md5.finalize()), "65a8e27d8879283831b664bd8b7f0ad4");
//! ```

/// Size of an MD5 input block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Size of an MD5 digest in bytes.
pub const DIGEST_SIZE: usize = 16;

/// Per-step additive constants, `floor(abs(sin(i + 1)) * 2^32)`.
const SIN: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Per-step left-rotate amounts.
const SHIFTS: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, //
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, //
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, //
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// Initial register values A, B, C, D.
const INIT: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Incremental MD5 accumulator.
#[derive(Debug, Clone)]
pub struct Md5 {
    state: [u32; 4],
    /// Partially filled input block.
    block: [u8; BLOCK_SIZE],
    /// Number of valid bytes in `block`.
    block_len: usize,
    /// Total bytes consumed.
    length: u64,
}

impl Md5 {
    /// Create a new accumulator.
    pub fn new() -> Self {
        Self {
            state: INIT,
            block: [0; BLOCK_SIZE],
            block_len: 0,
            length: 0,
        }
    }

    /// Feed more bytes into the digest.
    pub fn consume(&mut self, mut data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);

        if self.block_len > 0 {
            let take = (BLOCK_SIZE - self.block_len).min(data.len());
            self.block[self.block_len..self.block_len + take].copy_from_slice(&data[..take]);
            self.block_len += take;
            data = &data[take..];
            if self.block_len < BLOCK_SIZE {
                return;
            }
            let block = self.block;
            self.process_block(&block);
            self.block_len = 0;
        }

        let mut chunks = data.chunks_exact(BLOCK_SIZE);
        for chunk in &mut chunks {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.process_block(&block);
        }

        let rest = chunks.remainder();
        self.block[..rest.len()].copy_from_slice(rest);
        self.block_len = rest.len();
    }

    /// Alias for [`Md5::consume`].
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.consume(data);
    }

    /// Pad the message and return the digest.
    pub fn finalize(mut self) -> [u8; DIGEST_SIZE] {
        let bit_length = self.length.wrapping_mul(8).to_le_bytes();

        let mut padding = [0u8; BLOCK_SIZE + 8];
        padding[0] = 0x80;
        // Pad so that the length field ends exactly on a block boundary.
        let pad_len = if self.block_len < 56 {
            56 - self.block_len
        } else {
            BLOCK_SIZE + 56 - self.block_len
        };
        self.consume(&padding[..pad_len]);
        self.consume(&bit_length);
        debug_assert_eq!(self.block_len, 0);

        let mut digest = [0u8; DIGEST_SIZE];
        for (chunk, word) in digest.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        digest
    }

    /// Compute the digest of `data` in one call.
    pub fn digest(data: &[u8]) -> [u8; DIGEST_SIZE] {
        let mut md5 = Self::new();
        md5.consume(data);
        md5.finalize()
    }

    fn process_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        let mut words = [0u32; 16];
        for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        let [mut a, mut b, mut c, mut d] = self.state;
        for i in 0..64 {
            let (f, g) = match i >> 4 {
                0 => ((b & c) | (!b & d), i),
                1 => ((d & b) | (!d & c), (5 * i + 1) & 15),
                2 => (b ^ c ^ d, (3 * i + 5) & 15),
                _ => (c ^ (b | !d), (7 * i) & 15),
            };
            let f = f
                .wrapping_add(a)
                .wrapping_add(SIN[i])
                .wrapping_add(words[g]);
            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(f.rotate_left(SHIFTS[i]));
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a digest as lowercase hexadecimal.
pub fn to_hex(digest: &[u8]) -> String {
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
