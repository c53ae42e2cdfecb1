//! Frame processor: applies the zone curve over a render window.
//!
//! The window is split into row bands of the destination buffer. Bands own
//! disjoint rows, read the shared source and the immutable curve state, and
//! need no synchronization; with the `parallel` feature they run on the
//! rayon pool and are joined before [`FrameProcessor::process`] returns.
//!
//! # Failure model
//!
//! - A missing buffer or a layout other than RGBA/F32 fails the whole call
//!   before any pixel is touched.
//! - A pixel that either buffer cannot address is skipped silently.
//!
//! # Example
//!
//! ```
//! use splittone_core::{ImageBuffer, Rect};
//! use splittone_ops::{render, RenderOutcome, SplitToneParams};
//!
//! let bounds = Rect::from_size(64, 32);
//! let src = ImageBuffer::filled(bounds, [0.1, 0.336, 0.9, 1.0]);
//! let mut dst = ImageBuffer::new_rgba(bounds);
//!
//! let params = SplitToneParams::default()
//!     .with_preserve(0.5)
//!     .with_shadow_power([2.0; 3]);
//!
//! let outcome = render(Some(&src), Some(&mut dst), bounds, &params).unwrap();
//! assert_eq!(outcome, RenderOutcome::Processed);
//!
//! let px = dst.pixel(5, 5).unwrap();
//! assert!((px[0] - 0.0595).abs() < 1e-3);
//! assert_eq!(px[3], 1.0);
//! ```

use splittone_core::{ImageBuffer, PixelSource, Rect};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::curve::CurveParams;
use crate::overlay::OverlayFrame;
use crate::params::SplitToneParams;
use crate::{OpsError, OpsResult};

/// Default rows per tile.
pub const DEFAULT_BAND_ROWS: u32 = 32;

const CHANNELS: usize = 4;

/// What a [`render`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Parameters were a no-op; the window was copied verbatim.
    Identity,
    /// The curve (or overlay) was applied.
    Processed,
}

/// Per-render processor state.
///
/// Built once from a parameter snapshot and shared read-only by all tiles.
#[derive(Debug, Clone, Copy)]
pub struct FrameProcessor {
    curve: CurveParams,
    overlay: bool,
    band_rows: u32,
}

impl FrameProcessor {
    /// Creates a processor from a snapshot.
    pub fn new(params: &SplitToneParams) -> Self {
        Self {
            curve: params.curve_params(),
            overlay: params.show_curve,
            band_rows: DEFAULT_BAND_ROWS,
        }
    }

    /// Sets the tile height (minimum 1).
    pub fn with_band_rows(mut self, rows: u32) -> Self {
        self.band_rows = rows.max(1);
        self
    }

    /// Curve state used by this processor.
    #[inline]
    pub fn curve(&self) -> &CurveParams {
        &self.curve
    }

    /// Whether the diagnostic overlay replaces grading.
    #[inline]
    pub fn overlay_enabled(&self) -> bool {
        self.overlay
    }

    /// Processes one pixel at (x, y). Alpha is passed through.
    ///
    /// `frame` is the overlay normalization frame; `None` disables the
    /// overlay for this pixel.
    #[inline]
    pub fn process_pixel(
        &self,
        px: [f32; 4],
        x: i32,
        y: i32,
        frame: Option<&OverlayFrame>,
    ) -> [f32; 4] {
        let mut rgb = self.curve.apply_rgb([px[0], px[1], px[2]]);
        if let Some(frame) = frame {
            rgb = frame.shade_at(rgb, x, y, &self.curve);
        }
        [rgb[0], rgb[1], rgb[2], px[3]]
    }

    /// Processes `window` serially. Returns the number of pixels written.
    ///
    /// This is the single-tile entry point; hosts that schedule their own
    /// tiles call it once per tile.
    ///
    /// # Errors
    ///
    /// [`OpsError::UnsupportedLayout`] if either buffer is not RGBA/F32.
    pub fn process_window<S>(&self, src: &S, dst: &mut ImageBuffer, window: Rect) -> OpsResult<usize>
    where
        S: PixelSource + ?Sized,
    {
        self.run(src, dst, window, false)
    }

    /// Processes `window` as row-band tiles, in parallel when the `parallel`
    /// feature is enabled. Returns the number of pixels written.
    ///
    /// # Errors
    ///
    /// [`OpsError::UnsupportedLayout`] if either buffer is not RGBA/F32.
    pub fn process<S>(&self, src: &S, dst: &mut ImageBuffer, window: Rect) -> OpsResult<usize>
    where
        S: PixelSource + ?Sized,
    {
        self.run(src, dst, window, true)
    }

    fn run<S>(&self, src: &S, dst: &mut ImageBuffer, window: Rect, tiled: bool) -> OpsResult<usize>
    where
        S: PixelSource + ?Sized,
    {
        trace!(%window, overlay = self.overlay, tiled, "split_tone::process");
        check_layouts(src, dst)?;

        let dst_bounds = dst.bounds();
        let frame = if self.overlay {
            OverlayFrame::new(dst_bounds)
        } else {
            None
        };
        let Some(active) = window.intersect(&dst_bounds) else {
            debug!(%window, %dst_bounds, "Render window outside destination");
            return Ok(0);
        };

        let row_len = dst.row_len();
        let data = dst.rgba_f32_mut()?;
        let first = (active.y as i64 - dst_bounds.y as i64) as usize * row_len;
        let rows = &mut data[first..first + active.height as usize * row_len];

        let band_rows = if tiled { self.band_rows } else { active.height };
        let chunk = band_rows as usize * row_len;
        let band_at = |i: usize, len: usize| {
            Rect::new(
                active.x,
                active.y + (i as u32 * band_rows) as i32,
                active.width,
                (len / row_len) as u32,
            )
        };

        #[cfg(feature = "parallel")]
        let written: usize = if tiled {
            rows.par_chunks_mut(chunk)
                .enumerate()
                .map(|(i, band)| {
                    self.process_band(src, band_at(i, band.len()), band, dst_bounds, frame.as_ref())
                })
                .sum()
        } else {
            self.process_band(src, active, rows, dst_bounds, frame.as_ref())
        };

        #[cfg(not(feature = "parallel"))]
        let written: usize = rows
            .chunks_mut(chunk)
            .enumerate()
            .map(|(i, band)| {
                self.process_band(src, band_at(i, band.len()), band, dst_bounds, frame.as_ref())
            })
            .sum();

        let skipped = active.area() as usize - written;
        debug!(%active, written, skipped, "Split tone applied");
        Ok(written)
    }

    /// Processes one band. `rows` holds the full destination rows of `band`.
    fn process_band<S>(
        &self,
        src: &S,
        band: Rect,
        rows: &mut [f32],
        dst_bounds: Rect,
        frame: Option<&OverlayFrame>,
    ) -> usize
    where
        S: PixelSource + ?Sized,
    {
        let row_len = dst_bounds.width as usize * CHANNELS;
        let mut written = 0;
        for (row, y) in rows.chunks_exact_mut(row_len).zip(band.y..band.bottom()) {
            for x in band.x..band.right() {
                let Some(px) = src.pixel(x, y) else {
                    continue;
                };
                let col = (x as i64 - dst_bounds.x as i64) as usize * CHANNELS;
                let Some(out) = row.get_mut(col..col + CHANNELS) else {
                    continue;
                };
                out.copy_from_slice(&self.process_pixel(px, x, y, frame));
                written += 1;
            }
        }
        written
    }
}

/// Fails unless both buffers are RGBA/F32.
fn check_layouts<S>(src: &S, dst: &ImageBuffer) -> OpsResult<()>
where
    S: PixelSource + ?Sized,
{
    if !src.layout().is_rgba_f32() {
        return Err(OpsError::UnsupportedLayout {
            role: "source",
            layout: src.layout(),
        });
    }
    if !dst.layout().is_rgba_f32() {
        return Err(OpsError::UnsupportedLayout {
            role: "destination",
            layout: dst.layout(),
        });
    }
    Ok(())
}

/// Copies `window` from source to destination without evaluating the curve.
fn copy_window<S>(src: &S, dst: &mut ImageBuffer, window: Rect) -> usize
where
    S: PixelSource + ?Sized,
{
    let Some(active) = window.intersect(&dst.bounds()) else {
        return 0;
    };
    let mut written = 0;
    for (x, y) in active.iter_coords() {
        if let Some(px) = src.pixel(x, y) {
            if dst.set_pixel(x, y, px) {
                written += 1;
            }
        }
    }
    written
}

/// Renders one frame.
///
/// Buffers arrive as options the way a host fetches them; a missing one is
/// fatal. When `params` is an identity snapshot the window is copied from
/// the source bit for bit and no curve is evaluated; callers that can alias
/// the source should check [`SplitToneParams::is_identity`] first and skip
/// the call entirely.
///
/// # Errors
///
/// - [`OpsError::MissingBuffer`] if either buffer is absent
/// - [`OpsError::UnsupportedLayout`] if either buffer is not RGBA/F32
pub fn render<S>(
    src: Option<&S>,
    dst: Option<&mut ImageBuffer>,
    window: Rect,
    params: &SplitToneParams,
) -> OpsResult<RenderOutcome>
where
    S: PixelSource + ?Sized,
{
    trace!(%window, preset = %params.preset, "split_tone::render");
    let src = src.ok_or(OpsError::MissingBuffer("source"))?;
    let dst = dst.ok_or(OpsError::MissingBuffer("destination"))?;
    check_layouts(src, dst)?;

    if params.is_identity() {
        let copied = copy_window(src, dst, window);
        debug!(%window, copied, "Identity params, copied source");
        return Ok(RenderOutcome::Identity);
    }

    FrameProcessor::new(params).process(src, dst, window)?;
    Ok(RenderOutcome::Processed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::{CYAN, MAGENTA, RED, YELLOW};
    use approx::assert_relative_eq;
    use splittone_core::{BitDepth, PixelComponents, PixelLayout};

    fn graded() -> SplitToneParams {
        SplitToneParams::default()
            .with_preserve(0.5)
            .with_shadow_power([2.0; 3])
    }

    #[test]
    fn test_process_pixel_scenario() {
        let proc = FrameProcessor::new(&graded());
        let out = proc.process_pixel([0.1, 0.336, 0.9, 1.0], 0, 0, None);
        assert_relative_eq!(out[0], 0.0595, epsilon = 1e-4);
        assert_eq!(out[1], 0.336);
        assert_relative_eq!(out[2], 0.9, epsilon = 1e-6);
        assert_eq!(out[3], 1.0);
    }

    #[test]
    fn test_snapshot_state() {
        let params = graded().with_overlay(true);
        let proc = FrameProcessor::new(&params);
        assert!(proc.overlay_enabled());
        assert_eq!(*proc.curve(), params.curve_params());
        assert_relative_eq!(proc.curve().bounds.shadow_end, 0.168);
        assert_eq!(proc.curve().shadow_power, [2.0; 3]);
        assert!(!FrameProcessor::new(&graded()).overlay_enabled());
    }

    #[test]
    fn test_alpha_untouched() {
        let proc = FrameProcessor::new(&graded());
        for a in [0.0_f32, 0.25, -3.0, 7.5, f32::MAX] {
            assert_eq!(proc.process_pixel([0.1, 0.2, 0.3, a], 0, 0, None)[3], a);
        }
    }

    #[test]
    fn test_tiled_matches_serial() {
        let bounds = Rect::new(-7, 3, 37, 45);
        let mut src = ImageBuffer::new_rgba(bounds);
        for (x, y) in bounds.iter_coords() {
            let v = (x + 7) as f32 / 37.0;
            let w = (y - 3) as f32 / 45.0;
            src.set_pixel(x, y, [v, w, 1.2 - v, 0.5]);
        }
        let proc = FrameProcessor::new(&graded().with_highlight_power([0.7, 1.3, 2.0]))
            .with_band_rows(4);

        let mut serial = ImageBuffer::new_rgba(bounds);
        let mut tiled = ImageBuffer::new_rgba(bounds);
        assert_eq!(proc.process_window(&src, &mut serial, bounds).unwrap(), 37 * 45);
        assert_eq!(proc.process(&src, &mut tiled, bounds).unwrap(), 37 * 45);
        assert_eq!(serial, tiled);
    }

    #[test]
    fn test_window_limits_writes() {
        let bounds = Rect::from_size(8, 8);
        let src = ImageBuffer::filled(bounds, [0.05, 0.05, 0.05, 1.0]);
        let mut dst = ImageBuffer::filled(bounds, [9.0; 4]);
        let window = Rect::new(2, 2, 3, 3);
        let n = FrameProcessor::new(&graded()).process(&src, &mut dst, window).unwrap();
        assert_eq!(n, 9);
        assert_eq!(dst.pixel(1, 1), Some([9.0; 4]));
        assert_eq!(dst.pixel(5, 5), Some([9.0; 4]));
        assert_ne!(dst.pixel(2, 2), Some([9.0; 4]));
    }

    #[test]
    fn test_window_outside_destination_skips() {
        let src = ImageBuffer::filled(Rect::from_size(16, 16), [0.1; 4]);
        let mut dst = ImageBuffer::filled(Rect::from_size(4, 4), [9.0; 4]);
        // Partially outside: only the overlap is written
        let n = FrameProcessor::new(&graded())
            .process(&src, &mut dst, Rect::new(2, 2, 10, 10))
            .unwrap();
        assert_eq!(n, 4);
        // Entirely outside
        let n = FrameProcessor::new(&graded())
            .process(&src, &mut dst, Rect::new(20, 20, 4, 4))
            .unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn test_unsupported_layout_is_fatal() {
        let bounds = Rect::from_size(4, 4);
        let src = ImageBuffer::new_rgba(bounds);
        let half = PixelLayout::new(BitDepth::F16, PixelComponents::Rgba);
        let mut dst = ImageBuffer::with_layout(bounds, half);
        let err = FrameProcessor::new(&graded())
            .process(&src, &mut dst, bounds)
            .unwrap_err();
        assert!(matches!(err, OpsError::UnsupportedLayout { role: "destination", .. }));

        let rgb = ImageBuffer::with_layout(
            bounds,
            PixelLayout::new(BitDepth::F32, PixelComponents::Rgb),
        );
        let mut dst = ImageBuffer::new_rgba(bounds);
        let err = render(Some(&rgb), Some(&mut dst), bounds, &graded()).unwrap_err();
        assert!(matches!(err, OpsError::UnsupportedLayout { role: "source", .. }));
        assert!(err.to_string().contains("RGB/F32"));
    }

    #[test]
    fn test_missing_buffers() {
        let bounds = Rect::from_size(2, 2);
        let src = ImageBuffer::new_rgba(bounds);
        let mut dst = ImageBuffer::new_rgba(bounds);
        let err = render::<ImageBuffer>(None, Some(&mut dst), bounds, &graded()).unwrap_err();
        assert!(matches!(err, OpsError::MissingBuffer("source")));
        let err = render(Some(&src), None, bounds, &graded()).unwrap_err();
        assert!(matches!(err, OpsError::MissingBuffer("destination")));
    }

    #[test]
    fn test_identity_copies_bits() {
        let bounds = Rect::from_size(16, 16);
        let mut src = ImageBuffer::new_rgba(bounds);
        for (x, y) in bounds.iter_coords() {
            let v = 0.1 + x as f32 * 0.0371 + y as f32 * 0.00713;
            src.set_pixel(x, y, [v, v * 0.7, -v, 0.3]);
        }
        let mut dst = ImageBuffer::new_rgba(bounds);
        let outcome = render(Some(&src), Some(&mut dst), bounds, &SplitToneParams::default());
        assert_eq!(outcome.unwrap(), RenderOutcome::Identity);
        let a = src.rgba_f32().unwrap();
        let b = dst.rgba_f32().unwrap();
        assert!(a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits()));
    }

    #[test]
    fn test_overlay_draws_markers() {
        let bounds = Rect::from_size(1000, 1000);
        let src = ImageBuffer::filled(bounds, [0.2, 0.2, 0.2, 0.75]);
        let mut dst = ImageBuffer::new_rgba(bounds);
        let params = graded().with_overlay(true);
        render(Some(&src), Some(&mut dst), bounds, &params).unwrap();

        // Column at shadow_end (0.168 * 1000)
        assert_eq!(dst.pixel(168, 900).map(|p| [p[0], p[1], p[2]]), Some(CYAN));
        // Column at middle gray (0.336 * 1000)
        assert_eq!(dst.pixel(336, 900).map(|p| [p[0], p[1], p[2]]), Some(YELLOW));
        // Column at highlight start (0.504 * 1000)
        assert_eq!(dst.pixel(504, 900).map(|p| [p[0], p[1], p[2]]), Some(MAGENTA));
        // Bottom-left corner lies on every trace at x = 0
        assert_eq!(dst.pixel(0, 999).map(|p| [p[0], p[1], p[2]]), Some(RED));

        // Alpha survives the overlay everywhere
        let data = dst.rgba_f32().unwrap();
        assert!(data.chunks_exact(4).all(|p| p[3] == 0.75));
    }

    #[test]
    fn test_overlay_normalizes_against_destination() {
        // Same plot position whatever the window covers
        let bounds = Rect::new(-50, -50, 100, 100);
        let src = ImageBuffer::filled(bounds, [0.5; 4]);
        let params = graded().with_overlay(true);
        let proc = FrameProcessor::new(&params).with_band_rows(7);

        let mut full = ImageBuffer::new_rgba(bounds);
        proc.process(&src, &mut full, bounds).unwrap();

        let mut part = ImageBuffer::new_rgba(bounds);
        let window = Rect::new(-10, -20, 30, 40);
        proc.process(&src, &mut part, window).unwrap();

        for (x, y) in window.iter_coords() {
            assert_eq!(full.pixel(x, y), part.pixel(x, y));
        }
    }
}
