//! Fixed-width bit helpers with pinned semantics for zero input.

use crate::constants::*;

/// Number of set bits in a byte.
#[inline]
pub fn popcount_byte(byte: u8) -> usize {
    byte.count_ones() as usize
}

/// Number of set bits in a word.
#[inline]
pub fn popcount_word(word: u32) -> usize {
    word.count_ones() as usize
}

/// Number of trailing zero bits. Returns `WORD_BITS` for a zero word.
#[inline]
pub fn count_trailing_zeros(word: u32) -> usize {
    if word == 0 {
        return WORD_BITS;
    }
    word.trailing_zeros() as usize
}

/// Position of the lowest set bit, `None` for zero.
#[inline]
pub fn bit_scan_forward(byte: u8) -> Option<usize> {
    if byte == 0 {
        None
    } else {
        Some(byte.trailing_zeros() as usize)
    }
}

/// Mask with the low `bits` bits of a word set. `bits` must be below `WORD_BITS`.
#[inline]
pub fn low_bits(bits: usize) -> u32 {
    debug_assert!(bits < WORD_BITS);
    (1u32 << bits) - 1
}

/// Load the word at `byte_offset`.
///
/// Bytes are combined little-endian so that bit `k` of the word is bit
/// `8 * byte_offset + k` of the bitmap on every host.
#[inline]
pub fn load_word(data: &[u8], byte_offset: usize) -> u32 {
    let bytes = &data[byte_offset..byte_offset + WORD_BYTES];
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_inputs_are_pinned() {
        assert_eq!(count_trailing_zeros(0), 32);
        assert_eq!(bit_scan_forward(0), None);
        assert_eq!(popcount_word(0), 0);
    }

    #[test]
    fn lowest_bit() {
        assert_eq!(count_trailing_zeros(0x8000_0000), 31);
        assert_eq!(count_trailing_zeros(0b1010_0000), 5);
        assert_eq!(bit_scan_forward(0b1000_0000), Some(7));
        assert_eq!(bit_scan_forward(0xFF), Some(0));
    }

    #[test]
    fn word_load_is_bit_ordered() {
        let data = [0x01, 0x00, 0x00, 0x80, 0xFF];
        let word = load_word(&data, 0);
        assert_eq!(word & 1, 1);
        assert_eq!(word >> 31, 1);
        assert_eq!(load_word(&data, 1), 0xFF80_0000);
    }

    #[test]
    fn masks() {
        assert_eq!(low_bits(0), 0);
        assert_eq!(low_bits(5), 0b1_1111);
        assert_eq!(low_bits(31), 0x7FFF_FFFF);
        for k in 0..8 {
            assert_eq!(FIRST_BYTE_MASK[k] | LAST_BYTE_MASK[k], 0xFF);
            assert_eq!(FIRST_BYTE_MASK[k] & LAST_BYTE_MASK[k], 0);
            assert_eq!(popcount_byte(LAST_BYTE_MASK[k]), k);
        }
    }
}
