//! Query and search operations over a [`BitmapView`].
//!
//! ```text
//! policy (longest / first fit / best fit)
//!   -> range (find_next_range_of_unset_bits)
//!     -> get / word loads
//! count, search: standalone helpers for the owning allocator
//! ```
//!
//! [`BitmapView`]: crate::BitmapView

mod count;
mod policy;
mod range;
mod search;

pub use range::UnsetRuns;

#[cfg(test)]
pub(crate) mod test_utils {
    use alloc::vec;
    use alloc::vec::Vec;

    /// A zeroed buffer for `bit_count` bits with `busy` ranges set.
    pub fn bitmap_with(bit_count: usize, busy: &[(usize, usize)]) -> Vec<u8> {
        let mut data = vec![0u8; bit_count.div_ceil(8)];
        for &(start, end) in busy {
            for bit in start..end {
                data[bit / 8] |= 1 << (bit % 8);
            }
        }
        data
    }
}
