use crate::constants::*;
use crate::prelude::*;
use crate::return_error;
use crate::utils::load_word;

/// A borrowed, read-only view over a packed bitmap.
///
/// The view never owns or mutates the buffer. Writing bits is the business
/// of whoever owns the storage.
#[derive(Debug, Clone, Copy)]
pub struct BitmapView<'a> {
    data: &'a [u8],
    bit_count: usize,
}

impl<'a> BitmapView<'a> {
    /// Create a view of the first `bit_count` bits of `data`.
    ///
    /// Panics if `data` is shorter than `ceil(bit_count / 8)` bytes.
    pub fn new(data: &'a [u8], bit_count: usize) -> Self {
        let byte_count = bit_count.div_ceil(BITS_PER_BYTE);
        assert!(
            data.len() >= byte_count,
            "bitmap of {} bits needs {} bytes, buffer has {}",
            bit_count,
            byte_count,
            data.len()
        );
        Self { data, bit_count }
    }

    /// Create a view, reporting a short buffer as `EINVAL` instead of panicking.
    pub fn try_new(data: &'a [u8], bit_count: usize) -> Result<Self> {
        let byte_count = bit_count.div_ceil(BITS_PER_BYTE);
        if data.len() < byte_count {
            log::debug!(
                "reject bitmap view: {} bits over {} bytes",
                bit_count,
                data.len()
            );
            return_error!(
                ErrCode::EINVAL,
                "bitmap of {} bits needs {} bytes, buffer has {}",
                bit_count,
                byte_count,
                data.len()
            );
        }
        Ok(Self { data, bit_count })
    }

    /// Create a view covering every bit of `data`.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_count: data.len() * BITS_PER_BYTE,
        }
    }

    /// Number of bits in the view
    pub fn size(&self) -> usize {
        self.bit_count
    }

    /// Number of bytes the bits occupy
    pub fn size_in_bytes(&self) -> usize {
        self.bit_count.div_ceil(BITS_PER_BYTE)
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    /// The bytes covered by the view
    pub fn data(&self) -> &'a [u8] {
        &self.data[..self.size_in_bytes()]
    }

    /// Whether bit `index` is set.
    ///
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.bit_count,
            "bit {} out of range for bitmap of {} bits",
            index,
            self.bit_count
        );
        self.data[index / BITS_PER_BYTE] & (1 << (index % BITS_PER_BYTE)) != 0
    }

    /// Mask of the bits of byte `byte_index` that lie inside the view
    pub(crate) fn valid_bits(&self, byte_index: usize) -> u8 {
        if byte_index == self.bit_count / BITS_PER_BYTE {
            LAST_BYTE_MASK[self.bit_count % BITS_PER_BYTE]
        } else {
            0xFF
        }
    }

    /// Number of whole bytes in the view
    pub(crate) fn full_bytes(&self) -> usize {
        self.bit_count / BITS_PER_BYTE
    }

    /// Number of whole words in the view
    pub(crate) fn full_words(&self) -> usize {
        self.bit_count / WORD_BITS
    }

    /// Word `word_index`, which must be a whole word
    pub(crate) fn word(&self, word_index: usize) -> u32 {
        load_word(self.data, word_index * WORD_BYTES)
    }
}
