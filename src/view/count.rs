use crate::constants::*;
use crate::prelude::*;
use crate::utils::*;
use crate::view_defs::*;

impl<'a> BitmapView<'a> {
    /// Count the bits equal to `value` in `[start, start + len)`.
    ///
    /// # Params
    ///
    /// * `start` - first bit of the range, must be below `size()`
    /// * `len` - number of bits, `start + len` must not exceed `size()`
    /// * `value` - the bit value to count
    ///
    /// An empty range counts 0 without reading the buffer.
    pub fn count_in_range(&self, start: usize, len: usize, value: bool) -> usize {
        if len == 0 {
            return 0;
        }
        assert!(
            start < self.size(),
            "range start {} out of bitmap of {} bits",
            start,
            self.size()
        );
        assert!(
            len <= self.size() - start,
            "range {}+{} out of bitmap of {} bits",
            start,
            len,
            self.size()
        );

        let data = self.data();
        let end = start + len;
        let first = start / BITS_PER_BYTE;
        let last = end / BITS_PER_BYTE;

        let mut count;
        let byte = data[first] & FIRST_BYTE_MASK[start % BITS_PER_BYTE];
        if first == last {
            count = popcount_byte(byte & LAST_BYTE_MASK[end % BITS_PER_BYTE]);
        } else {
            count = popcount_byte(byte);
            // `last` is one past the buffer when the range ends on a byte boundary
            if last < data.len() {
                count += popcount_byte(data[last] & LAST_BYTE_MASK[end % BITS_PER_BYTE]);
            }
            count += count_whole_bytes(data, first + 1, last);
        }

        if value {
            count
        } else {
            len - count
        }
    }

    /// Count the bits equal to `value` in the whole bitmap.
    pub fn count_slow(&self, value: bool) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.count_in_range(0, self.size(), value)
    }
}

/// Set bits in `data[from..to]`, a word at a time where aligned.
fn count_whole_bytes(data: &[u8], from: usize, to: usize) -> usize {
    if from >= to {
        return 0;
    }
    let mut count = 0;
    let mut byte = from;
    let aligned = min(from.next_multiple_of(WORD_BYTES), to);
    while byte < aligned {
        count += popcount_byte(data[byte]);
        byte += 1;
    }
    while byte + WORD_BYTES <= to {
        count += popcount_word(load_word(data, byte));
        byte += WORD_BYTES;
    }
    while byte < to {
        count += popcount_byte(data[byte]);
        byte += 1;
    }
    count
}
