//! # The Definition of the Bitmap View
//!
//! A bitmap packs one busy/free flag per resource unit, least significant
//! bit first:
//!
//! | byte 0: bits 0..8 | byte 1: bits 8..16 | ... | last byte (maybe partial) |
//!
//! Bit `i` lives in byte `i / 8` under mask `1 << (i % 8)`. A set bit marks a
//! busy unit, a clear bit a free one.

mod bitmap_view;
mod run;

pub use bitmap_view::*;
pub use run::*;
