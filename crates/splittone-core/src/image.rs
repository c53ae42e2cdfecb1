//! Pixel buffers addressed by host coordinates.
//!
//! - [`ImageBuffer`] - Owned buffer with signed bounds and typed storage
//! - [`Samples`] - Typed sample storage (u8, u16, f16, f32)
//! - [`PixelSource`] - The read capability a render needs from its source
//!
//! # Memory Layout
//!
//! Samples are interleaved and row-major, first row = `bounds.y`:
//!
//! ```text
//! [R G B A R G B A ...]  ← row bounds.y
//! [R G B A R G B A ...]  ← row bounds.y + 1
//! ```
//!
//! # Usage
//!
//! ```rust
//! use splittone_core::{ImageBuffer, Rect};
//!
//! let mut img = ImageBuffer::new_rgba(Rect::new(-2, -2, 4, 4));
//! assert!(img.set_pixel(-2, 1, [0.5, 0.25, 1.0, 1.0]));
//! assert_eq!(img.pixel(-2, 1), Some([0.5, 0.25, 1.0, 1.0]));
//!
//! // Outside the bounds nothing is addressable
//! assert_eq!(img.pixel(2, 0), None);
//! ```

use crate::format::{BitDepth, PixelLayout};
use crate::{Error, Rect, Result};
use half::f16;

/// Typed sample storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    /// 8-bit unsigned samples.
    U8(Vec<u8>),
    /// 16-bit unsigned samples.
    U16(Vec<u16>),
    /// Half-float samples.
    F16(Vec<f16>),
    /// 32-bit float samples.
    F32(Vec<f32>),
}

impl Samples {
    /// Zero-filled storage of `len` samples at the given depth.
    pub fn zeroed(depth: BitDepth, len: usize) -> Self {
        match depth {
            BitDepth::U8 => Self::U8(vec![0; len]),
            BitDepth::U16 => Self::U16(vec![0; len]),
            BitDepth::F16 => Self::F16(vec![f16::ZERO; len]),
            BitDepth::F32 => Self::F32(vec![0.0; len]),
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            Self::U8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::F16(v) => v.len(),
            Self::F32(v) => v.len(),
        }
    }

    /// Returns `true` if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Depth of the stored samples.
    pub fn depth(&self) -> BitDepth {
        match self {
            Self::U8(_) => BitDepth::U8,
            Self::U16(_) => BitDepth::U16,
            Self::F16(_) => BitDepth::F16,
            Self::F32(_) => BitDepth::F32,
        }
    }
}

/// Read access a render needs from its source buffer.
///
/// `pixel` returns `None` when the coordinate cannot be addressed; callers
/// treat that as a per-pixel miss, not an error. Implementations must be
/// [`Sync`] so tiles can read the source from several threads.
pub trait PixelSource: Sync {
    /// Rectangle of addressable coordinates.
    fn bounds(&self) -> Rect;

    /// Layout of the underlying samples.
    fn layout(&self) -> PixelLayout;

    /// RGBA value at (x, y), or `None` if unaddressable.
    fn pixel(&self, x: i32, y: i32) -> Option<[f32; 4]>;
}

/// Owned pixel buffer with signed bounds.
///
/// The buffer may hold any [`PixelLayout`]; float RGBA accessors return
/// [`Error::UnsupportedFormat`] for anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    bounds: Rect,
    layout: PixelLayout,
    samples: Samples,
}

impl ImageBuffer {
    /// Creates a zero-filled RGBA/F32 buffer.
    pub fn new_rgba(bounds: Rect) -> Self {
        Self::with_layout(bounds, PixelLayout::RGBA_F32)
    }

    /// Creates an RGBA/F32 buffer with every pixel set to `px`.
    pub fn filled(bounds: Rect, px: [f32; 4]) -> Self {
        let data = px.repeat(bounds.area() as usize);
        Self {
            bounds,
            layout: PixelLayout::RGBA_F32,
            samples: Samples::F32(data),
        }
    }

    /// Creates a zero-filled buffer of any layout.
    pub fn with_layout(bounds: Rect, layout: PixelLayout) -> Self {
        let len = bounds.area() as usize * layout.channels();
        Self {
            bounds,
            layout,
            samples: Samples::zeroed(layout.depth, len),
        }
    }

    /// Wraps existing interleaved RGBA f32 samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `bounds.area() * 4`.
    pub fn from_rgba(bounds: Rect, data: Vec<f32>) -> Result<Self> {
        let expected = (bounds.area() as usize)
            .checked_mul(4)
            .ok_or_else(|| {
                Error::invalid_dimensions(bounds.width, bounds.height, "sample count overflows")
            })?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                bounds.width,
                bounds.height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            bounds,
            layout: PixelLayout::RGBA_F32,
            samples: Samples::F32(data),
        })
    }

    /// Buffer bounds.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Pixel layout.
    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Raw typed samples.
    #[inline]
    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    /// Samples per row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.bounds.width as usize * self.layout.channels()
    }

    /// Index of the first sample of (x, y), or `None` outside the bounds.
    #[inline]
    pub fn sample_index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let col = (x as i64 - self.bounds.x as i64) as usize;
        let row = (y as i64 - self.bounds.y as i64) as usize;
        Some((row * self.bounds.width as usize + col) * self.layout.channels())
    }

    /// Interleaved RGBA f32 samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for any other layout.
    pub fn rgba_f32(&self) -> Result<&[f32]> {
        match &self.samples {
            Samples::F32(v) if self.layout.is_rgba_f32() => Ok(v),
            _ => Err(Error::unsupported_format(self.layout.to_string())),
        }
    }

    /// Mutable interleaved RGBA f32 samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for any other layout.
    pub fn rgba_f32_mut(&mut self) -> Result<&mut [f32]> {
        match &mut self.samples {
            Samples::F32(v) if self.layout.is_rgba_f32() => Ok(v),
            _ => Err(Error::unsupported_format(self.layout.to_string())),
        }
    }

    /// RGBA value at (x, y).
    ///
    /// `None` outside the bounds or for non RGBA/F32 layouts.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[f32; 4]> {
        let idx = self.sample_index(x, y)?;
        let data = self.rgba_f32().ok()?;
        let px = data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Writes an RGBA value at (x, y). Returns `false` if nothing was written.
    pub fn set_pixel(&mut self, x: i32, y: i32, px: [f32; 4]) -> bool {
        let Some(idx) = self.sample_index(x, y) else {
            return false;
        };
        match self.rgba_f32_mut() {
            Ok(data) => {
                data[idx..idx + 4].copy_from_slice(&px);
                true
            }
            Err(_) => false,
        }
    }

    /// RGBA value at (x, y), failing with [`Error::OutOfBounds`].
    pub fn try_pixel(&self, x: i32, y: i32) -> Result<[f32; 4]> {
        self.rgba_f32()?;
        self.pixel(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.bounds))
    }
}

impl PixelSource for ImageBuffer {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn layout(&self) -> PixelLayout {
        self.layout
    }

    fn pixel(&self, x: i32, y: i32) -> Option<[f32; 4]> {
        ImageBuffer::pixel(self, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PixelComponents;

    #[test]
    fn test_from_rgba_validates_length() {
        let bounds = Rect::new(0, 0, 2, 2);
        assert!(ImageBuffer::from_rgba(bounds, vec![0.0; 16]).is_ok());
        let err = ImageBuffer::from_rgba(bounds, vec![0.0; 15]).unwrap_err();
        assert!(err.to_string().contains("expected 16"));
    }

    #[test]
    fn test_signed_origin_addressing() {
        let mut img = ImageBuffer::filled(Rect::new(-3, 5, 3, 2), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(img.sample_index(-3, 5), Some(0));
        assert_eq!(img.sample_index(-1, 6), Some(20));
        assert_eq!(img.sample_index(0, 5), None);

        assert!(img.set_pixel(-1, 6, [1.0, 2.0, 3.0, 4.0]));
        assert_eq!(img.rgba_f32().unwrap()[20..24], [1.0, 2.0, 3.0, 4.0]);
        assert!(!img.set_pixel(-4, 5, [0.0; 4]));
    }

    #[test]
    fn test_non_float_layout_rejected() {
        let layout = PixelLayout::new(BitDepth::F16, PixelComponents::Rgba);
        let mut img = ImageBuffer::with_layout(Rect::from_size(4, 4), layout);
        assert_eq!(img.samples().len(), 64);
        assert_eq!(img.samples().depth(), BitDepth::F16);
        assert!(img.rgba_f32().unwrap_err().is_format_error());
        assert!(img.rgba_f32_mut().is_err());
        assert_eq!(img.pixel(0, 0), None);
        assert!(!img.set_pixel(0, 0, [1.0; 4]));
        assert!(img.try_pixel(0, 0).unwrap_err().is_format_error());
    }

    #[test]
    fn test_try_pixel_out_of_bounds() {
        let img = ImageBuffer::new_rgba(Rect::from_size(2, 2));
        assert_eq!(img.try_pixel(1, 1).unwrap(), [0.0; 4]);
        assert!(img.try_pixel(2, 1).unwrap_err().is_bounds_error());
    }

    #[test]
    fn test_row_len() {
        let img = ImageBuffer::new_rgba(Rect::new(10, 10, 7, 3));
        assert_eq!(img.row_len(), 28);
        let rgb = ImageBuffer::with_layout(
            Rect::from_size(7, 3),
            PixelLayout::new(BitDepth::U8, PixelComponents::Rgb),
        );
        assert_eq!(rgb.row_len(), 21);
    }
}
