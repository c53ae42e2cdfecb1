//! Middle-gray reference table.
//!
//! Each [`ColorPreset`] names one camera or display encoding and carries the
//! code value that encoding assigns to 18% scene gray. The preset only picks
//! the anchor of the zone curve: no colorimetric conversion is performed.
//!
//! # Example
//!
//! ```
//! use splittone_ops::ColorPreset;
//!
//! assert_eq!(ColorPreset::DavinciIntermediate.middle_gray(), 0.336);
//!
//! // Host choice indices saturate into the table
//! assert_eq!(ColorPreset::from_index(-4), ColorPreset::Linear);
//! assert_eq!(ColorPreset::from_index(57), ColorPreset::AppleLog);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::PresetRepr;
use crate::OpsError;

/// Number of presets in the reference table.
pub const PRESET_COUNT: usize = 20;

/// Encoding whose middle gray anchors the curve.
///
/// Variant order matches the host choice parameter; [`index`](Self::index)
/// is the position in that menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "PresetRepr", into = "PresetRepr")]
pub enum ColorPreset {
    /// Scene linear.
    Linear,
    /// ACEScc.
    AcesCc,
    /// ACEScct.
    AcesCct,
    /// ARRI LogC3.
    ArriLogC3,
    /// ARRI LogC4.
    ArriLogC4,
    /// Blackmagic Film Gen5.
    BmdFilmGen5,
    /// Canon Log.
    CanonLog,
    /// Canon Log2.
    CanonLog2,
    /// Canon Log3.
    CanonLog3,
    /// DaVinci Intermediate.
    #[default]
    DavinciIntermediate,
    /// DJI D-Log.
    DjiDLog,
    /// Fujifilm F-Log.
    FujifilmFLog,
    /// Fujifilm F-Log2.
    FujifilmFLog2,
    /// Pure 2.2 gamma.
    Gamma22,
    /// Pure 2.4 gamma.
    Gamma24,
    /// Nikon N-Log.
    NikonNLog,
    /// Panasonic V-Log.
    PanasonicVLog,
    /// RED Log3G10.
    RedLog3G10,
    /// Sony S-Log3.
    SonySLog3,
    /// Apple Log.
    AppleLog,
}

impl ColorPreset {
    /// All presets in menu order.
    pub const ALL: [ColorPreset; PRESET_COUNT] = [
        Self::Linear,
        Self::AcesCc,
        Self::AcesCct,
        Self::ArriLogC3,
        Self::ArriLogC4,
        Self::BmdFilmGen5,
        Self::CanonLog,
        Self::CanonLog2,
        Self::CanonLog3,
        Self::DavinciIntermediate,
        Self::DjiDLog,
        Self::FujifilmFLog,
        Self::FujifilmFLog2,
        Self::Gamma22,
        Self::Gamma24,
        Self::NikonNLog,
        Self::PanasonicVLog,
        Self::RedLog3G10,
        Self::SonySLog3,
        Self::AppleLog,
    ];

    /// Preset at a host menu index, saturating out-of-range values to the
    /// nearest entry.
    #[inline]
    pub fn from_index(index: i64) -> Self {
        let i = index.clamp(0, PRESET_COUNT as i64 - 1) as usize;
        Self::ALL[i]
    }

    /// Position in the host menu.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Middle-gray code value.
    #[inline]
    pub const fn middle_gray(self) -> f32 {
        match self {
            Self::Linear => 0.180,
            Self::AcesCc => 0.413,
            Self::AcesCct => 0.413,
            Self::ArriLogC3 => 0.391,
            Self::ArriLogC4 => 0.278,
            Self::BmdFilmGen5 => 0.383,
            Self::CanonLog => 0.312,
            Self::CanonLog2 => 0.387,
            Self::CanonLog3 => 0.330,
            Self::DavinciIntermediate => 0.336,
            Self::DjiDLog => 0.398,
            Self::FujifilmFLog => 0.459,
            Self::FujifilmFLog2 => 0.391,
            Self::Gamma22 => 0.458,
            Self::Gamma24 => 0.489,
            Self::NikonNLog => 0.363,
            Self::PanasonicVLog => 0.423,
            Self::RedLog3G10 => 0.333,
            Self::SonySLog3 => 0.410,
            Self::AppleLog => 0.488,
        }
    }

    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::AcesCc => "ACEScc",
            Self::AcesCct => "ACEScct",
            Self::ArriLogC3 => "ARRI LogC3",
            Self::ArriLogC4 => "ARRI LogC4",
            Self::BmdFilmGen5 => "BMD Film Gen5",
            Self::CanonLog => "Canon Log",
            Self::CanonLog2 => "Canon Log2",
            Self::CanonLog3 => "Canon Log3",
            Self::DavinciIntermediate => "DaVinci Intermediate",
            Self::DjiDLog => "DJI D-Log",
            Self::FujifilmFLog => "Fujifilm F-Log",
            Self::FujifilmFLog2 => "Fujifilm F-Log2",
            Self::Gamma22 => "Gamma 2.2",
            Self::Gamma24 => "Gamma 2.4",
            Self::NikonNLog => "Nikon N-Log",
            Self::PanasonicVLog => "Panasonic V-Log",
            Self::RedLog3G10 => "RED Log3G10",
            Self::SonySLog3 => "Sony S-Log3",
            Self::AppleLog => "Apple Log",
        }
    }

    /// Config-file key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::AcesCc => "acescc",
            Self::AcesCct => "acescct",
            Self::ArriLogC3 => "arri_logc3",
            Self::ArriLogC4 => "arri_logc4",
            Self::BmdFilmGen5 => "bmd_film_gen5",
            Self::CanonLog => "canon_log",
            Self::CanonLog2 => "canon_log2",
            Self::CanonLog3 => "canon_log3",
            Self::DavinciIntermediate => "davinci_intermediate",
            Self::DjiDLog => "dji_dlog",
            Self::FujifilmFLog => "fujifilm_flog",
            Self::FujifilmFLog2 => "fujifilm_flog2",
            Self::Gamma22 => "gamma_2_2",
            Self::Gamma24 => "gamma_2_4",
            Self::NikonNLog => "nikon_nlog",
            Self::PanasonicVLog => "panasonic_vlog",
            Self::RedLog3G10 => "red_log3g10",
            Self::SonySLog3 => "sony_slog3",
            Self::AppleLog => "apple_log",
        }
    }
}

/// Middle gray for a host menu index (clamped into the table).
#[inline]
pub fn middle_gray(index: i64) -> f32 {
    ColorPreset::from_index(index).middle_gray()
}

impl FromStr for ColorPreset {
    type Err = OpsError;

    /// Accepts a [`key`](ColorPreset::key) or a [`label`](ColorPreset::label),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.key().eq_ignore_ascii_case(s) || p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| OpsError::InvalidParameter(format!("unknown color preset '{s}'")))
    }
}

impl fmt::Display for ColorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [f32; PRESET_COUNT] = [
        0.180, 0.413, 0.413, 0.391, 0.278, 0.383, 0.312, 0.387, 0.330, 0.336, 0.398, 0.459,
        0.391, 0.458, 0.489, 0.363, 0.423, 0.333, 0.410, 0.488,
    ];

    #[test]
    fn test_table_matches_reference() {
        for (i, expected) in TABLE.iter().enumerate() {
            let got = middle_gray(i as i64);
            assert_eq!(got.to_bits(), expected.to_bits(), "preset {i}");
            assert_eq!(ColorPreset::from_index(i as i64).index(), i);
        }
    }

    #[test]
    fn test_index_saturates() {
        assert_eq!(ColorPreset::from_index(-1), ColorPreset::Linear);
        assert_eq!(ColorPreset::from_index(i64::MIN), ColorPreset::Linear);
        assert_eq!(ColorPreset::from_index(20), ColorPreset::AppleLog);
        assert_eq!(ColorPreset::from_index(i64::MAX), ColorPreset::AppleLog);
        assert_eq!(middle_gray(100), 0.488);
    }

    #[test]
    fn test_all_in_range() {
        for p in ColorPreset::ALL {
            let mg = p.middle_gray();
            assert!(mg > 0.0 && mg < 1.0, "{p} = {mg}");
        }
    }

    #[test]
    fn test_default_is_davinci() {
        assert_eq!(ColorPreset::default().index(), 9);
        assert_eq!(ColorPreset::default().label(), "DaVinci Intermediate");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("sony_slog3".parse::<ColorPreset>().unwrap(), ColorPreset::SonySLog3);
        assert_eq!("ARRI LogC4".parse::<ColorPreset>().unwrap(), ColorPreset::ArriLogC4);
        assert_eq!(" acescct ".parse::<ColorPreset>().unwrap(), ColorPreset::AcesCct);
        assert!("rec709".parse::<ColorPreset>().is_err());
    }

    #[test]
    fn test_keys_and_labels_unique() {
        for (i, a) in ColorPreset::ALL.iter().enumerate() {
            for b in &ColorPreset::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
