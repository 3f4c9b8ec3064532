#![allow(unused)]

/// Bits stored in one byte of the bitmap
pub const BITS_PER_BYTE: usize = 8;

/// Bits in one scanning word
pub const WORD_BITS: usize = u32::BITS as usize;

/// Bytes in one scanning word
pub const WORD_BYTES: usize = WORD_BITS / BITS_PER_BYTE;

/// A word with every bit busy
pub const WORD_FULL: u32 = u32::MAX;

/// A word with every bit free
pub const WORD_EMPTY: u32 = 0;

/// `FIRST_BYTE_MASK[k]` clears the low `k` bits of a byte
pub const FIRST_BYTE_MASK: [u8; 8] = [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80];

/// `LAST_BYTE_MASK[k]` keeps only the low `k` bits of a byte
pub const LAST_BYTE_MASK: [u8; 8] = [0x00, 0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F];
