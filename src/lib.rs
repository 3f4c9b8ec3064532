//! A read-only bitmap view for free-space tracking and range allocation.
//!
//! Each bit flags one fixed-size resource unit (a physical page, a disk
//! block, an object slot) as busy (set) or free (clear). [`BitmapView`]
//! borrows the bytes of such a bitmap and answers the questions an
//! allocator asks: is a unit busy, how many units in a range are busy,
//! where is a free unit, and where is a run of free units, by first-fit or
//! best-fit.
//!
//! ```
//! use bmap_view::{BitmapView, Run};
//!
//! // Units 10..16 are busy
//! let data = [0x00, 0xFC, 0x00, 0x00];
//! let view = BitmapView::new(&data, 32);
//! assert_eq!(view.count_in_range(0, 32, true), 6);
//! assert_eq!(view.find_first_fit(7), Some(0));
//! assert_eq!(view.find_best_fit(4), Some(0));
//! assert_eq!(view.find_longest_range_of_unset_bits(32), Some(Run::new(16, 16)));
//! ```

#![no_std]

extern crate alloc;

mod constants;
mod error;
mod prelude;
mod utils;
mod view;
mod view_defs;

pub use error::*;
pub use prelude::Result;
pub use view::*;
pub use view_defs::*;

#[doc(hidden)]
pub use alloc::format as __alloc_format;
