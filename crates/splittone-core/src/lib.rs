//! # splittone-core
//!
//! Core types for split-tone image processing.
//!
//! - [`Rect`] - Render windows and buffer bounds with a signed origin
//! - [`PixelLayout`] - Bit depth and component set of a buffer
//! - [`ImageBuffer`] - Owned buffer addressed by host coordinates
//! - [`PixelSource`] - Read capability consumed by the frame processor
//! - [`Error`] - Buffer-level error taxonomy
//!
//! ## Crate Structure
//!
//! ```text
//! splittone-core (this crate)
//!    ^
//!    |
//!    +-- splittone-ops (zone curve, overlay, frame processor)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod image;
pub mod rect;

// Re-exports for convenience
pub use error::*;
pub use format::{BitDepth, PixelComponents, PixelLayout};
pub use image::{ImageBuffer, PixelSource, Samples};
pub use rect::*;

/// Prelude module for convenient imports.
///
/// ```
/// use splittone_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::{BitDepth, PixelComponents, PixelLayout};
    pub use crate::image::{ImageBuffer, PixelSource, Samples};
    pub use crate::rect::Rect;
}
