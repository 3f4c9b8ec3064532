use crate::constants::*;
use crate::prelude::*;
use crate::utils::*;
use crate::view_defs::*;

impl<'a> BitmapView<'a> {
    /// Find the next run of unset bits starting at or after `from`.
    ///
    /// # Params
    ///
    /// * `from` - bit to start searching at
    /// * `min_length` - shortest acceptable run, 0 is treated as 1
    /// * `max_length` - longest length worth measuring
    ///
    /// # Return
    ///
    /// `Some(run)` with `run.start >= from` and
    /// `run.length = min(actual run length, max_length) >= min_length`.
    /// A run that reaches `max_length` is reported as soon as it does,
    /// without scanning the rest of it.
    ///
    /// `None` if no such run exists, or if `min_length > max_length`,
    /// `max_length == 0` or `from` is past the end.
    pub fn find_next_range_of_unset_bits(
        &self,
        from: usize,
        min_length: usize,
        max_length: usize,
    ) -> Option<Run> {
        if min_length > max_length || max_length == 0 || from >= self.size() {
            return None;
        }
        let min_length = max(min_length, 1);

        let mut start = from;
        let mut free = 0usize;

        let full_words = self.full_words();
        let mut word_index = from / WORD_BITS;
        let mut skip_bits = from % WORD_BITS;
        while word_index < full_words {
            let base = word_index * WORD_BITS;
            // Bits before `from` count as busy
            let word = self.word(word_index) | low_bits(skip_bits);
            skip_bits = 0;
            word_index += 1;

            if word == WORD_FULL {
                if free >= min_length {
                    return Some(Run::new(start, min(free, max_length)));
                }
                free = 0;
                continue;
            }
            if word == WORD_EMPTY {
                if free == 0 {
                    start = base;
                }
                free += WORD_BITS;
                if free >= max_length {
                    return Some(Run::new(start, max_length));
                }
                continue;
            }

            let mut viewed = 0;
            while viewed < WORD_BITS {
                let bucket = word >> viewed;
                let zeros = min(count_trailing_zeros(bucket), WORD_BITS - viewed);
                if zeros > 0 {
                    if free == 0 {
                        start = base + viewed;
                    }
                    free += zeros;
                    if free >= max_length {
                        return Some(Run::new(start, max_length));
                    }
                    viewed += zeros;
                    if viewed == WORD_BITS {
                        break;
                    }
                }

                // The run ends at a busy bit
                if free >= min_length {
                    return Some(Run::new(start, min(free, max_length)));
                }
                free = 0;
                let ones = min(count_trailing_zeros(!(word >> viewed)), WORD_BITS - viewed);
                viewed += ones;
            }
        }

        // Bits past the last whole word
        for index in max(full_words * WORD_BITS, from)..self.size() {
            if self.get(index) {
                if free >= min_length {
                    return Some(Run::new(start, min(free, max_length)));
                }
                free = 0;
            } else {
                if free == 0 {
                    start = index;
                }
                free += 1;
                if free >= max_length {
                    return Some(Run::new(start, max_length));
                }
            }
        }

        if free >= min_length {
            Some(Run::new(start, min(free, max_length)))
        } else {
            None
        }
    }

    /// Iterate over every maximal run of unset bits, left to right.
    pub fn unset_runs(&self) -> UnsetRuns<'a> {
        UnsetRuns {
            view: *self,
            cursor: 0,
        }
    }

    /// First set bit at or after `from`, or `size()` if there is none.
    pub(crate) fn next_set_bit(&self, from: usize) -> usize {
        let mut index = from;
        while index < self.size() && index % WORD_BITS != 0 {
            if self.get(index) {
                return index;
            }
            index += 1;
        }
        while index + WORD_BITS <= self.size() {
            let word = self.word(index / WORD_BITS);
            if word != WORD_EMPTY {
                return index + count_trailing_zeros(word);
            }
            index += WORD_BITS;
        }
        while index < self.size() {
            if self.get(index) {
                return index;
            }
            index += 1;
        }
        self.size()
    }
}

/// Iterator over the maximal runs of unset bits of a [`BitmapView`].
#[derive(Debug, Clone)]
pub struct UnsetRuns<'a> {
    view: BitmapView<'a>,
    cursor: usize,
}

impl<'a> Iterator for UnsetRuns<'a> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let run = self
            .view
            .find_next_range_of_unset_bits(self.cursor, 1, usize::MAX)?;
        self.cursor = run.end();
        Some(run)
    }
}
