//! # splittone-ops
//!
//! Three-zone split-tone grading for float RGBA images.
//!
//! Each of R, G and B is reshaped by a curve with a power-law shadow zone,
//! an untouched band around a middle-gray anchor and a power-law highlight
//! zone. The middle gray comes from a table of camera/display encodings; no
//! color space conversion takes place.
//!
//! # Modules
//!
//! - [`reference`] - Middle-gray table keyed by [`ColorPreset`]
//! - [`curve`] - The pure zone curve and its boundaries
//! - [`params`] - Per-render parameter snapshot and identity query
//! - [`config`] - YAML parameter files
//! - [`overlay`] - Diagnostic curve plot
//! - [`processor`] - Tiled frame processor and the render call
//!
//! # Example
//!
//! ```rust
//! use splittone_core::{ImageBuffer, Rect};
//! use splittone_ops::{render, ColorPreset, SplitToneParams};
//!
//! let bounds = Rect::from_size(320, 180);
//! let src = ImageBuffer::filled(bounds, [0.05, 0.4, 0.8, 1.0]);
//! let mut dst = ImageBuffer::new_rgba(bounds);
//!
//! let params = SplitToneParams::default()
//!     .with_preset(ColorPreset::SonySLog3)
//!     .with_preserve(0.3)
//!     .with_shadow_power([1.2, 1.0, 0.9])
//!     .with_highlight_power([0.9, 1.0, 1.2]);
//!
//! render(Some(&src), Some(&mut dst), bounds, &params)?;
//! # Ok::<(), splittone_ops::OpsError>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - run tiles on the rayon thread pool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod config;
pub mod curve;
pub mod overlay;
pub mod params;
pub mod processor;
pub mod reference;

pub use curve::{zone_curve, CurveParams, ZoneBounds};
pub use error::{OpsError, OpsResult};
pub use overlay::OverlayFrame;
pub use params::{is_identity, ParamDescriptor, SplitToneParams, DESCRIPTORS};
pub use processor::{render, FrameProcessor, RenderOutcome};
pub use reference::{middle_gray, ColorPreset};
