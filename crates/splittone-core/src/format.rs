//! Pixel layouts: bit depth and component set.
//!
//! A host presents buffers in several layouts. Only one of them, four
//! interleaved 32-bit float channels, is renderable by the split-tone
//! processor; the others exist so that a mismatch can be detected and
//! reported instead of misread.
//!
//! # Usage
//!
//! ```rust
//! use splittone_core::format::{BitDepth, PixelComponents, PixelLayout};
//!
//! let layout = PixelLayout::new(BitDepth::F16, PixelComponents::Rgba);
//! assert_eq!(layout.bytes_per_pixel(), 8);
//! assert!(!layout.is_rgba_f32());
//! assert_eq!(layout.to_string(), "RGBA/F16");
//! ```

use std::fmt;

/// Storage precision of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 16-bit half-precision float.
    F16,
    /// 32-bit single-precision float.
    #[default]
    F32,
}

impl BitDepth {
    /// Number of bits per channel.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U16 | Self::F16 => 16,
            Self::F32 => 32,
        }
    }

    /// Whether this is a floating-point format.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F16 | Self::F32)
    }

    /// Bytes per channel.
    #[inline]
    pub const fn bytes_per_channel(&self) -> usize {
        (self.bits() / 8) as usize
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::U8 => "U8",
            Self::U16 => "U16",
            Self::F16 => "F16",
            Self::F32 => "F32",
        };
        f.write_str(s)
    }
}

/// Which channels a pixel carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelComponents {
    /// Single alpha/matte channel.
    Alpha,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    #[default]
    Rgba,
}

impl PixelComponents {
    /// Number of channels.
    #[inline]
    pub const fn count(&self) -> usize {
        match self {
            Self::Alpha => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

impl fmt::Display for PixelComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Alpha => "A",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
        };
        f.write_str(s)
    }
}

/// Complete pixel layout of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelLayout {
    /// Channel precision.
    pub depth: BitDepth,
    /// Channel set.
    pub components: PixelComponents,
}

impl PixelLayout {
    /// Four interleaved f32 channels.
    pub const RGBA_F32: Self = Self::new(BitDepth::F32, PixelComponents::Rgba);

    /// Creates a layout.
    #[inline]
    pub const fn new(depth: BitDepth, components: PixelComponents) -> Self {
        Self { depth, components }
    }

    /// Channels per pixel.
    #[inline]
    pub const fn channels(&self) -> usize {
        self.components.count()
    }

    /// Bytes per pixel.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> usize {
        self.channels() * self.depth.bytes_per_channel()
    }

    /// Whether this is the renderable RGBA/F32 layout.
    #[inline]
    pub const fn is_rgba_f32(&self) -> bool {
        matches!(self.depth, BitDepth::F32) && matches!(self.components, PixelComponents::Rgba)
    }
}

impl fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.components, self.depth)
    }
}
