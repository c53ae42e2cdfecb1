//! Three-zone tone curve.
//!
//! The curve splits `[0, 1]` into three contiguous zones around a middle
//! gray anchor:
//!
//! ```text
//!  0 ──── shadow_end ──── highlight_start ──── 1 ──── overrange
//!  │ power  │   preserved (identity)  │  power  │ identity
//! ```
//!
//! - **Shadows** `[0, shadow_end]`: `shadow_end * (x / shadow_end)^p`
//! - **Preserved mids** `(shadow_end, highlight_start]`: identity
//! - **Highlights** `(highlight_start, 1]`:
//!   `hs + (1 - hs) * ((x - hs) / (1 - hs))^p`
//! - **Overrange** `(1, inf)`: identity
//!
//! Each zone owns its lower boundary inclusively, so zone end points are
//! fixed points of the curve. Negative inputs are floored to zero.
//!
//! A power of 1 is the identity, above 1 compresses toward the zone anchor,
//! below 1 expands. Powers are not validated: a non-positive power yields
//! whatever `powf` yields, including non-finite values.

/// Evaluates the zone curve at `x`.
///
/// Pure and stateless. Used both for grading pixel values and for tracing
/// the diagnostic plot at normalized positions.
///
/// # Example
///
/// ```
/// use splittone_ops::zone_curve;
///
/// // Preserved band passes through
/// assert_eq!(zone_curve(0.3, 0.168, 0.504, 2.0, 2.0), 0.3);
///
/// // Shadow zone compresses
/// let y = zone_curve(0.1, 0.168, 0.504, 2.0, 1.0);
/// assert!((y - 0.0595).abs() < 1e-3);
///
/// // Overrange is untouched
/// assert_eq!(zone_curve(4.0, 0.168, 0.504, 2.0, 2.0), 4.0);
/// ```
#[inline]
pub fn zone_curve(
    x: f32,
    shadow_end: f32,
    highlight_start: f32,
    shadow_power: f32,
    highlight_power: f32,
) -> f32 {
    let x = x.max(0.0);

    if x <= shadow_end {
        if shadow_end > 0.0 {
            let ratio = (x / shadow_end).clamp(0.0, 1.0);
            return shadow_end * ratio.powf(shadow_power);
        }
        return x;
    }

    if x <= highlight_start {
        return x;
    }

    if x <= 1.0 {
        let range = 1.0 - highlight_start;
        if range > 0.0 {
            let ratio = ((x - highlight_start) / range).clamp(0.0, 1.0);
            return highlight_start + range * ratio.powf(highlight_power);
        }
        return x;
    }

    x
}

/// Zone boundaries derived from a middle gray and a preserve width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneBounds {
    /// Anchor of the preserved band.
    pub middle_gray: f32,
    /// Upper end of the shadow zone (inclusive).
    pub shadow_end: f32,
    /// Upper end of the preserved band (inclusive).
    pub highlight_start: f32,
}

impl ZoneBounds {
    /// Derives boundaries symmetric around `middle_gray`.
    ///
    /// The half width is `middle_gray * preserve_width`; the shadow end is
    /// floored at 0 and the highlight start capped at 1.
    ///
    /// ```
    /// use splittone_ops::ZoneBounds;
    ///
    /// let b = ZoneBounds::new(0.336, 0.5);
    /// assert!((b.shadow_end - 0.168).abs() < 1e-6);
    /// assert!((b.highlight_start - 0.504).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn new(middle_gray: f32, preserve_width: f32) -> Self {
        let gap = middle_gray * preserve_width;
        Self {
            middle_gray,
            shadow_end: (middle_gray - gap).max(0.0),
            highlight_start: (middle_gray + gap).min(1.0),
        }
    }
}

/// Per-render curve state: boundaries plus per-channel powers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    /// Zone boundaries shared by all channels.
    pub bounds: ZoneBounds,
    /// Shadow power for R, G, B.
    pub shadow_power: [f32; 3],
    /// Highlight power for R, G, B.
    pub highlight_power: [f32; 3],
}

impl CurveParams {
    /// Applies the curve for one channel (0 = R, 1 = G, 2 = B).
    ///
    /// # Panics
    ///
    /// Panics if `channel > 2`.
    #[inline]
    pub fn apply_channel(&self, channel: usize, x: f32) -> f32 {
        zone_curve(
            x,
            self.bounds.shadow_end,
            self.bounds.highlight_start,
            self.shadow_power[channel],
            self.highlight_power[channel],
        )
    }

    /// Applies the curve to each of R, G, B independently.
    #[inline]
    pub fn apply_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        [
            self.apply_channel(0, rgb[0]),
            self.apply_channel(1, rgb[1]),
            self.apply_channel(2, rgb[2]),
        ]
    }

    /// Evaluates all three channel curves at one input.
    ///
    /// This is what the diagnostic overlay plots.
    #[inline]
    pub fn trace(&self, x: f32) -> [f32; 3] {
        self.apply_rgb([x, x, x])
    }
}
