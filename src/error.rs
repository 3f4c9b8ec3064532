// SPDX-License-Identifier: MPL-2.0
extern crate alloc;

use crate::prelude::*;

/// BitmapError number.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrCode {
    ENOENT = 2,  /* No such file or directory */
    EIO = 5,     /* I/O error */
    EINVAL = 22, /* Invalid argument */
    ERANGE = 34, /* Math result not representable */
}

/// error used in this crate
pub struct BitmapError {
    code: ErrCode,
    message: Option<String>,
}

impl Debug for BitmapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(message) = &self.message {
            write!(
                f,
                "BitmapError {{ code: {:?}, message: {:?} }}",
                self.code, message
            )
        } else {
            write!(f, "BitmapError {{ code: {:?} }}", self.code)
        }
    }
}

impl core::fmt::Display for BitmapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{:?}: {}", self.code, message),
            None => write!(f, "{:?}", self.code),
        }
    }
}

impl core::error::Error for BitmapError {}

impl BitmapError {
    pub const fn new(code: ErrCode) -> Self {
        BitmapError {
            code,
            message: None,
        }
    }

    pub const fn with_message(code: ErrCode, message: String) -> Self {
        BitmapError {
            code,
            message: Some(message),
        }
    }

    pub const fn code(&self) -> ErrCode {
        self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[macro_export]
macro_rules! format_error {
    ($code: expr, $message: expr) => {
        $crate::BitmapError::with_message($code, $crate::__alloc_format!($message))
    };
    ($code: expr, $fmt: expr,  $($args:tt)*) => {
        $crate::BitmapError::with_message($code, $crate::__alloc_format!($fmt, $($args)*))
    };
}

#[macro_export]
macro_rules! return_error {
    ($code: expr, $message: expr) => {
        return Err($crate::format_error!($code, $message));
    };
    ($code: expr, $fmt: expr,  $($args:tt)*) => {
        return Err($crate::format_error!($code, $fmt, $($args)*));
    }
}
