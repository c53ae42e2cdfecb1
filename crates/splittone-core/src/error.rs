//! Error types for splittone-core operations.
//!
//! The [`Error`] enum covers failures that can occur while building or
//! addressing image buffers:
//! - Buffer construction (sample count vs. bounds)
//! - Typed sample access for a pixel layout
//! - Explicit coordinate lookups
//!
//! Per-pixel addressing misses inside a render are *not* errors; buffer
//! accessors return `Option` for those. Only call-level problems surface here.
//!
//! # Usage
//!
//! ```rust
//! use splittone_core::{Error, Rect, Result};
//!
//! fn check(bounds: Rect, x: i32, y: i32) -> Result<()> {
//!     if !bounds.contains(x, y) {
//!         return Err(Error::out_of_bounds(x, y, bounds));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(Rect::from_size(4, 4), 5, 0).is_err());
//! ```

use crate::Rect;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during buffer operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside buffer bounds.
    #[error("pixel ({x}, {y}) out of bounds {bounds}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: i32,
        /// Y coordinate that was out of bounds
        y: i32,
        /// Bounds of the buffer
        bounds: Rect,
    },

    /// Invalid buffer dimensions or sample count.
    ///
    /// Returned when the sample vector does not match the bounds, or the
    /// sample count would overflow.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Pixel layout is not supported for this operation.
    #[error("unsupported pixel format: {format}")]
    UnsupportedFormat {
        /// Format name or description
        format: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: i32, y: i32, bounds: Rect) -> Self {
        Self::OutOfBounds { x, y, bounds }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::UnsupportedFormat`] error.
    #[inline]
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if this is a format error.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }
}
