#![allow(unused)]

pub(crate) use alloc::format;
pub(crate) use alloc::string::String;
pub(crate) use core::cmp::{max, min};
pub(crate) use core::fmt::Debug;

pub(crate) use crate::error::*;

pub type Result<T> = core::result::Result<T, BitmapError>;
