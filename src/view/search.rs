use crate::constants::*;
use crate::prelude::*;
use crate::utils::*;
use crate::view_defs::*;

impl<'a> BitmapView<'a> {
    /// Find some bit equal to `value`, seeding the search at `hint`.
    ///
    /// The scan starts at the word holding `hint` and wraps around to the
    /// beginning once. The result is not necessarily the closest match to
    /// `hint`. `None` means no bit of the bitmap equals `value`.
    ///
    /// Panics if `hint` is out of range.
    pub fn find_one_anywhere(&self, hint: usize, value: bool) -> Option<usize> {
        assert!(
            hint < self.size(),
            "hint {} out of range for bitmap of {} bits",
            hint,
            self.size()
        );
        let start_byte = (hint / BITS_PER_BYTE) / WORD_BYTES * WORD_BYTES;
        if let Some(bit) = self.find_one_in_bytes(start_byte, self.size_in_bytes(), value) {
            return Some(bit);
        }
        if start_byte == 0 {
            return None;
        }
        self.find_one_in_bytes(0, start_byte, value)
    }

    pub fn find_one_anywhere_set(&self, hint: usize) -> Option<usize> {
        self.find_one_anywhere(hint, true)
    }

    pub fn find_one_anywhere_unset(&self, hint: usize) -> Option<usize> {
        self.find_one_anywhere(hint, false)
    }

    /// Find the lowest bit equal to `value`.
    pub fn find_first(&self, value: bool) -> Option<usize> {
        let skip = if value { 0x00 } else { 0xFF };
        let data = self.data();
        (0..data.len())
            .filter(|&byte| data[byte] != skip)
            .find_map(|byte| Self::lowest_in(data[byte], byte, value, self.valid_bits(byte)))
    }

    pub fn find_first_set(&self) -> Option<usize> {
        self.find_first(true)
    }

    pub fn find_first_unset(&self) -> Option<usize> {
        self.find_first(false)
    }

    /// Lowest bit equal to `value` in bytes `[from, to)`.
    fn find_one_in_bytes(&self, from: usize, to: usize, value: bool) -> Option<usize> {
        let data = self.data();
        let mut byte = from;
        let aligned = min(from.next_multiple_of(WORD_BYTES), to);
        while byte < aligned {
            if let Some(bit) = Self::lowest_in(data[byte], byte, value, self.valid_bits(byte)) {
                return Some(bit);
            }
            byte += 1;
        }

        // Only whole bytes go through the word path
        let word_end = min(to, self.full_bytes());
        let skip = if value { WORD_EMPTY } else { WORD_FULL };
        while byte + WORD_BYTES <= word_end {
            let word = load_word(data, byte);
            if word != skip {
                let interesting = if value { word } else { !word };
                return Some(byte * BITS_PER_BYTE + count_trailing_zeros(interesting));
            }
            byte += WORD_BYTES;
        }

        while byte < to {
            if let Some(bit) = Self::lowest_in(data[byte], byte, value, self.valid_bits(byte)) {
                return Some(bit);
            }
            byte += 1;
        }
        None
    }

    /// Lowest bit equal to `value` in byte number `byte` holding `raw`,
    /// looking only at the `valid` bits.
    fn lowest_in(raw: u8, byte: usize, value: bool, valid: u8) -> Option<usize> {
        let interesting = (if value { raw } else { !raw }) & valid;
        bit_scan_forward(interesting).map(|bit| byte * BITS_PER_BYTE + bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_utils::bitmap_with;

    #[test]
    fn first_set_and_unset() {
        let data = bitmap_with(100, &[(0, 37), (70, 71)]);
        let view = BitmapView::new(&data, 100);
        assert_eq!(view.find_first_set(), Some(0));
        assert_eq!(view.find_first_unset(), Some(37));

        let data = bitmap_with(100, &[(70, 71)]);
        let view = BitmapView::new(&data, 100);
        assert_eq!(view.find_first_set(), Some(70));
        assert_eq!(view.find_first_unset(), Some(0));
    }

    #[test]
    fn first_on_uniform_bitmaps() {
        let empty = bitmap_with(45, &[]);
        let view = BitmapView::new(&empty, 45);
        assert_eq!(view.find_first_set(), None);
        assert_eq!(view.find_first_unset(), Some(0));

        let full = bitmap_with(45, &[(0, 45)]);
        let view = BitmapView::new(&full, 45);
        assert_eq!(view.find_first_set(), Some(0));
        assert_eq!(view.find_first_unset(), None);
    }

    #[test]
    fn first_ignores_bits_past_the_end() {
        // Bits 10..16 are outside the view
        let data = [0xFFu8, 0b1100_0011];
        let view = BitmapView::new(&data, 10);
        assert_eq!(view.find_first_unset(), None);

        let data = [0x00u8, 0b1111_1100];
        let view = BitmapView::new(&data, 10);
        assert_eq!(view.find_first_set(), None);
        assert_eq!(view.find_one_anywhere_set(9), None);
    }

    #[test]
    fn anywhere_finds_after_hint() {
        let data = bitmap_with(256, &[(200, 201)]);
        let view = BitmapView::new(&data, 256);
        assert_eq!(view.find_one_anywhere_set(0), Some(200));
        assert_eq!(view.find_one_anywhere_set(130), Some(200));
        assert_eq!(view.find_one_anywhere_set(255), Some(200));
    }

    #[test]
    fn anywhere_wraps_around_once() {
        let data = bitmap_with(256, &[(3, 4)]);
        let view = BitmapView::new(&data, 256);
        assert_eq!(view.find_one_anywhere_set(100), Some(3));
        assert_eq!(view.find_one_anywhere_set(255), Some(3));

        let data = bitmap_with(256, &[(0, 250)]);
        let view = BitmapView::new(&data, 256);
        assert_eq!(view.find_one_anywhere_unset(10), Some(250));
        let data = bitmap_with(256, &[(10, 256)]);
        let view = BitmapView::new(&data, 256);
        assert_eq!(view.find_one_anywhere_unset(200), Some(0));
    }

    #[test]
    fn anywhere_in_partial_tail_byte() {
        let data = bitmap_with(77, &[(0, 76)]);
        let view = BitmapView::new(&data, 77);
        assert_eq!(view.find_one_anywhere_unset(5), Some(76));
        assert_eq!(view.find_one_anywhere_unset(76), Some(76));
    }

    #[test]
    fn anywhere_on_uniform_bitmaps() {
        let data = bitmap_with(99, &[]);
        let view = BitmapView::new(&data, 99);
        assert_eq!(view.find_one_anywhere_set(50), None);
        assert!(view.find_one_anywhere_unset(50).is_some());

        let data = bitmap_with(99, &[(0, 99)]);
        let view = BitmapView::new(&data, 99);
        assert_eq!(view.find_one_anywhere_unset(98), None);
        assert!(view.find_one_anywhere_set(98).is_some());
    }

    #[test]
    #[should_panic]
    fn anywhere_hint_out_of_range() {
        let data = [0u8; 1];
        BitmapView::new(&data, 8).find_one_anywhere_set(8);
    }
}
