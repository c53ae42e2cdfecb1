//! Parameter snapshot for one render.
//!
//! A [`SplitToneParams`] is taken once per render (at the render time) and is
//! immutable while tiles run. [`SplitToneParams::curve_params`] derives the
//! zone boundaries from it fresh each time.
//!
//! # Example
//!
//! ```
//! use splittone_ops::{ColorPreset, SplitToneParams};
//!
//! let params = SplitToneParams::default()
//!     .with_preset(ColorPreset::DavinciIntermediate)
//!     .with_preserve(0.5)
//!     .with_shadow_power([2.0, 2.0, 2.0]);
//!
//! assert!(!params.is_identity());
//! let curve = params.curve_params();
//! assert!((curve.bounds.highlight_start - 0.504).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::curve::{CurveParams, ZoneBounds};
use crate::reference::ColorPreset;

/// Tolerance of the no-op query.
pub const IDENTITY_EPSILON: f32 = 1e-8;

/// Host-facing parameter values at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitToneParams {
    /// Middle-gray reference.
    pub preset: ColorPreset,
    /// Half width of the preserved band as a fraction of middle gray.
    pub preserve_midgray: f32,
    /// Shadow power for R, G, B.
    pub shadow_power: [f32; 3],
    /// Highlight power for R, G, B.
    pub highlight_power: [f32; 3],
    /// Replace the graded image with the diagnostic curve plot.
    pub show_curve: bool,
}

impl Default for SplitToneParams {
    fn default() -> Self {
        Self {
            preset: ColorPreset::default(),
            preserve_midgray: 0.0,
            shadow_power: [1.0; 3],
            highlight_power: [1.0; 3],
            show_curve: false,
        }
    }
}

impl SplitToneParams {
    /// Sets the preset.
    pub fn with_preset(mut self, preset: ColorPreset) -> Self {
        self.preset = preset;
        self
    }

    /// Sets the preset from a host menu index (clamped).
    pub fn with_preset_index(mut self, index: i64) -> Self {
        self.preset = ColorPreset::from_index(index);
        self
    }

    /// Sets the preserve width.
    pub fn with_preserve(mut self, width: f32) -> Self {
        self.preserve_midgray = width;
        self
    }

    /// Sets the per-channel shadow powers.
    pub fn with_shadow_power(mut self, power: [f32; 3]) -> Self {
        self.shadow_power = power;
        self
    }

    /// Sets the per-channel highlight powers.
    pub fn with_highlight_power(mut self, power: [f32; 3]) -> Self {
        self.highlight_power = power;
        self
    }

    /// Enables or disables the diagnostic overlay.
    pub fn with_overlay(mut self, show: bool) -> Self {
        self.show_curve = show;
        self
    }

    /// Returns `true` when rendering would not change any pixel.
    ///
    /// Holds iff the overlay is off, the preserve width is within
    /// [`IDENTITY_EPSILON`] of 0 and all six powers are within it of 1.
    /// Callers may then alias the source instead of rendering.
    pub fn is_identity(&self) -> bool {
        let near_one = |p: &f32| (p - 1.0).abs() < IDENTITY_EPSILON;
        !self.show_curve
            && self.preserve_midgray.abs() < IDENTITY_EPSILON
            && self.shadow_power.iter().all(near_one)
            && self.highlight_power.iter().all(near_one)
    }

    /// Derives the curve state for this snapshot.
    pub fn curve_params(&self) -> CurveParams {
        CurveParams {
            bounds: ZoneBounds::new(self.preset.middle_gray(), self.preserve_midgray),
            shadow_power: self.shadow_power,
            highlight_power: self.highlight_power,
        }
    }
}

/// Identity query for a snapshot.
#[inline]
pub fn is_identity(params: &SplitToneParams) -> bool {
    params.is_identity()
}

/// Describes one numeric host parameter.
///
/// Descriptors are metadata for hosts building controls; processing never
/// validates values against them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Script name.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Default value.
    pub default: f64,
    /// Lower end of the slider range.
    pub min: f64,
    /// Upper end of the slider range.
    pub max: f64,
    /// Slider increment.
    pub increment: f64,
}

const fn power_slider(name: &'static str, label: &'static str) -> ParamDescriptor {
    ParamDescriptor {
        name,
        label,
        default: 1.0,
        min: 0.2,
        max: 2.0,
        increment: 0.01,
    }
}

/// Numeric parameters in host page order.
pub const DESCRIPTORS: [ParamDescriptor; 7] = [
    ParamDescriptor {
        name: "preserveMidgray",
        label: "Preserve Midgray",
        default: 0.0,
        min: 0.0,
        max: 1.0,
        increment: 0.01,
    },
    power_slider("shadowR", "Shadow Red"),
    power_slider("shadowG", "Shadow Green"),
    power_slider("shadowB", "Shadow Blue"),
    power_slider("highlightR", "Highlight Red"),
    power_slider("highlightG", "Highlight Green"),
    power_slider("highlightB", "Highlight Blue"),
];

/// Looks up a descriptor by script name.
pub fn descriptor(name: &str) -> Option<&'static ParamDescriptor> {
    DESCRIPTORS.iter().find(|d| d.name == name)
}
