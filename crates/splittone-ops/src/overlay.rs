//! Diagnostic curve overlay.
//!
//! In overlay mode every pixel becomes a point of a plot: its position,
//! normalized against the destination bounds, is the plot coordinate with
//! the bottom row at 0. The three channel curves are traced by evaluating
//! the same zone curve used for grading at `x_norm`.
//!
//! Marker order (later wins where they overlap):
//!
//! 1. red / green / blue curve traces, first match only
//! 2. otherwise the identity diagonal, blended toward light gray
//! 3. cyan vertical at `shadow_end`
//! 4. yellow vertical and horizontal at middle gray
//! 5. magenta vertical at `highlight_start`

use splittone_core::Rect;

use crate::curve::CurveParams;

/// Red curve trace.
pub const RED: [f32; 3] = [1.0, 0.0, 0.0];
/// Green curve trace.
pub const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
/// Blue curve trace.
pub const MARKER_BLUE: [f32; 3] = [0.3, 0.5, 1.0];
/// Shadow-end line.
pub const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
/// Middle-gray lines.
pub const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
/// Highlight-start line.
pub const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];

/// Line half-thickness in plot rows.
pub const LINE_ROWS: f32 = 2.5;
/// Thickness scale for the diagonal and the boundary lines.
pub const THIN_SCALE: f32 = 0.6;
/// Weight kept from the graded color under the diagonal.
pub const DIAGONAL_KEEP: f32 = 0.4;

/// Normalization frame of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    bounds: Rect,
    line: f32,
}

impl OverlayFrame {
    /// Frame over `bounds`, or `None` when the bounds are empty.
    pub fn new(bounds: Rect) -> Option<Self> {
        if bounds.is_empty() {
            return None;
        }
        Some(Self {
            bounds,
            line: LINE_ROWS / bounds.height as f32,
        })
    }

    /// Curve line tolerance (`2.5 / height`).
    #[inline]
    pub fn line_thickness(&self) -> f32 {
        self.line
    }

    /// Maps a pixel coordinate to plot space.
    ///
    /// `x_norm = (x - x1) / width`, `y_norm = 1 - (y - y1) / height`.
    #[inline]
    pub fn normalize(&self, x: i32, y: i32) -> (f32, f32) {
        let dx = (x as i64 - self.bounds.x as i64) as f32;
        let dy = (y as i64 - self.bounds.y as i64) as f32;
        (
            dx / self.bounds.width as f32,
            1.0 - dy / self.bounds.height as f32,
        )
    }

    /// Shades one plot pixel over the graded color `rgb`.
    pub fn shade(&self, rgb: [f32; 3], x_norm: f32, y_norm: f32, curve: &CurveParams) -> [f32; 3] {
        let line = self.line;
        let thin = line * THIN_SCALE;
        let [trace_r, trace_g, trace_b] = curve.trace(x_norm);
        let near = |a: f32, b: f32, tol: f32| (a - b).abs() < tol;

        let mut out = if near(y_norm, trace_r, line) {
            RED
        } else if near(y_norm, trace_g, line) {
            GREEN
        } else if near(y_norm, trace_b, line) {
            MARKER_BLUE
        } else if near(y_norm, x_norm, thin) {
            rgb.map(|c| c * DIAGONAL_KEEP + (1.0 - DIAGONAL_KEEP))
        } else {
            rgb
        };

        let bounds = &curve.bounds;
        if near(x_norm, bounds.shadow_end, thin) {
            out = CYAN;
        }
        if near(x_norm, bounds.middle_gray, thin) || near(y_norm, bounds.middle_gray, thin) {
            out = YELLOW;
        }
        if near(x_norm, bounds.highlight_start, thin) {
            out = MAGENTA;
        }
        out
    }

    /// Normalizes (x, y) and shades it.
    #[inline]
    pub fn shade_at(&self, rgb: [f32; 3], x: i32, y: i32, curve: &CurveParams) -> [f32; 3] {
        let (x_norm, y_norm) = self.normalize(x, y);
        self.shade(rgb, x_norm, y_norm, curve)
    }
}
