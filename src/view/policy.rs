//! Allocation policies built on repeated run searches.
//!
//! Each policy walks the bitmap left to right exactly once. After a match
//! the cursor jumps to the next set bit, so the rest of a run cut short by
//! `max_length` is never mistaken for a separate, smaller run.

use crate::view_defs::*;

impl<'a> BitmapView<'a> {
    /// Find the longest run of unset bits, measuring at most `max_length`.
    ///
    /// # Return
    ///
    /// `Some(run)` where `run.length` (capped at `max_length`) is no shorter
    /// than any other run. On ties the leftmost run wins. `None` if there
    /// is no unset bit or `max_length` is 0.
    pub fn find_longest_range_of_unset_bits(&self, max_length: usize) -> Option<Run> {
        let mut best: Option<Run> = None;
        let mut from = 0;
        loop {
            let min_length = best.map_or(1, |run| run.length + 1);
            let Some(run) = self.find_next_range_of_unset_bits(from, min_length, max_length)
            else {
                break;
            };
            log::trace!("longest range: candidate {:?}", run);
            best = Some(run);
            from = self.next_set_bit(run.end());
        }
        log::debug!("longest range up to {}: {:?}", max_length, best);
        best
    }

    /// Find the leftmost run of at least `minimum_length` unset bits.
    ///
    /// The search stops as soon as the run is long enough, so nothing is
    /// known about how far it extends.
    pub fn find_first_fit(&self, minimum_length: usize) -> Option<usize> {
        if minimum_length == 0 {
            return None;
        }
        let found = self
            .find_next_range_of_unset_bits(0, minimum_length, minimum_length)
            .map(|run| run.start);
        log::debug!("first fit for {}: {:?}", minimum_length, found);
        found
    }

    /// Find the shortest run of at least `minimum_length` unset bits.
    ///
    /// Among runs of the same length the leftmost one is returned.
    pub fn find_best_fit(&self, minimum_length: usize) -> Option<usize> {
        if minimum_length == 0 {
            return None;
        }
        let mut best: Option<Run> = None;
        let mut from = 0;
        loop {
            let max_length = best.map_or(usize::MAX, |run| run.length);
            let Some(run) = self.find_next_range_of_unset_bits(from, minimum_length, max_length)
            else {
                break;
            };
            log::trace!("best fit: candidate {:?}", run);
            if best.map_or(true, |best| run.length < best.length) {
                best = Some(run);
                if run.length == minimum_length {
                    // Nothing can fit tighter
                    break;
                }
            }
            from = self.next_set_bit(run.end());
        }
        log::debug!("best fit for {}: {:?}", minimum_length, best);
        best.map(|run| run.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_utils::bitmap_with;

    #[test]
    fn scenario() {
        let data = bitmap_with(32, &[(10, 16)]);
        let view = BitmapView::new(&data, 32);
        assert_eq!(view.find_first_fit(4), Some(0));
        assert_eq!(view.find_first_fit(7), Some(0));
        assert_eq!(view.find_first_fit(11), Some(16));
        assert_eq!(view.find_first_fit(17), None);
        assert_eq!(view.find_best_fit(4), Some(0));
        assert_eq!(view.find_best_fit(11), Some(16));
        assert_eq!(
            view.find_longest_range_of_unset_bits(32),
            Some(Run::new(16, 16))
        );
    }

    #[test]
    fn longest_is_capped() {
        let data = bitmap_with(200, &[(50, 51)]);
        let view = BitmapView::new(&data, 200);
        assert_eq!(
            view.find_longest_range_of_unset_bits(usize::MAX),
            Some(Run::new(51, 149))
        );
        assert_eq!(
            view.find_longest_range_of_unset_bits(40),
            Some(Run::new(0, 40))
        );
        assert_eq!(view.find_longest_range_of_unset_bits(0), None);
    }

    #[test]
    fn longest_on_full_bitmap() {
        let data = bitmap_with(70, &[(0, 70)]);
        let view = BitmapView::new(&data, 70);
        assert_eq!(view.find_longest_range_of_unset_bits(usize::MAX), None);
    }

    #[test]
    fn best_fit_skips_the_rest_of_capped_runs() {
        // Runs: [0, 10), [16, 100), [105, 112)
        let data = bitmap_with(128, &[(10, 16), (100, 105), (112, 128)]);
        let view = BitmapView::new(&data, 128);
        assert_eq!(view.find_best_fit(4), Some(105));
        assert_eq!(view.find_best_fit(8), Some(0));
        assert_eq!(view.find_best_fit(11), Some(16));
        assert_eq!(view.find_best_fit(85), None);
    }

    #[test]
    fn best_fit_prefers_leftmost_tie() {
        let data = bitmap_with(64, &[(5, 6), (11, 12), (20, 21), (25, 26)]);
        let view = BitmapView::new(&data, 64);
        // Runs: [0,5) [6,11) [12,20) [21,25) [26,64)
        assert_eq!(view.find_best_fit(5), Some(0));
        assert_eq!(view.find_best_fit(4), Some(21));
        assert_eq!(view.find_best_fit(6), Some(12));
    }

    #[test]
    fn zero_length_requests() {
        let data = bitmap_with(16, &[]);
        let view = BitmapView::new(&data, 16);
        assert_eq!(view.find_first_fit(0), None);
        assert_eq!(view.find_best_fit(0), None);
    }

    #[test]
    fn queries_are_idempotent() {
        let data = bitmap_with(300, &[(7, 40), (90, 91), (200, 260)]);
        let view = BitmapView::new(&data, 300);
        assert_eq!(view.find_best_fit(3), view.find_best_fit(3));
        assert_eq!(view.find_first_fit(30), view.find_first_fit(30));
        assert_eq!(
            view.find_longest_range_of_unset_bits(1000),
            view.find_longest_range_of_unset_bits(1000)
        );
    }
}
