//! YAML parameter files.
//!
//! A snapshot can be stored as YAML; missing fields take their defaults.
//! The preset may be written as a menu index (clamped like the host choice
//! parameter) or as a preset key or label:
//!
//! ```yaml
//! preset: sony_slog3        # or: 18, or: "Sony S-Log3"
//! preserve_midgray: 0.35
//! shadow_power: [1.4, 1.2, 1.0]
//! highlight_power: [0.8, 1.0, 1.1]
//! show_curve: false
//! ```
//!
//! # Example
//!
//! ```
//! use splittone_ops::{ColorPreset, SplitToneParams};
//!
//! let p = SplitToneParams::from_yaml("preset: 3\npreserve_midgray: 0.2\n").unwrap();
//! assert_eq!(p.preset, ColorPreset::ArriLogC3);
//! assert_eq!(p.shadow_power, [1.0; 3]);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::params::SplitToneParams;
use crate::reference::ColorPreset;
use crate::{OpsError, OpsResult};

/// On-disk form of a [`ColorPreset`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum PresetRepr {
    Index(i64),
    Name(String),
}

impl TryFrom<PresetRepr> for ColorPreset {
    type Error = OpsError;

    fn try_from(repr: PresetRepr) -> Result<Self, Self::Error> {
        match repr {
            PresetRepr::Index(i) => Ok(ColorPreset::from_index(i)),
            PresetRepr::Name(name) => name.parse(),
        }
    }
}

impl From<ColorPreset> for PresetRepr {
    fn from(preset: ColorPreset) -> Self {
        PresetRepr::Name(preset.key().to_string())
    }
}

impl SplitToneParams {
    /// Parses a snapshot from YAML text.
    pub fn from_yaml(yaml: &str) -> OpsResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a snapshot from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> OpsResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let params = Self::from_yaml(&text)?;
        debug!(path = %path.display(), preset = %params.preset, "Loaded split-tone params");
        Ok(params)
    }

    /// Serializes the snapshot to YAML text.
    pub fn to_yaml(&self) -> OpsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Writes the snapshot to a YAML file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> OpsResult<()> {
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let p = SplitToneParams::from_yaml("{}").unwrap();
        assert_eq!(p, SplitToneParams::default());
    }

    #[test]
    fn test_preset_forms() {
        let by_key = SplitToneParams::from_yaml("preset: red_log3g10").unwrap();
        let by_label = SplitToneParams::from_yaml("preset: \"RED Log3G10\"").unwrap();
        let by_index = SplitToneParams::from_yaml("preset: 17").unwrap();
        assert_eq!(by_key.preset, ColorPreset::RedLog3G10);
        assert_eq!(by_label.preset, ColorPreset::RedLog3G10);
        assert_eq!(by_index.preset, ColorPreset::RedLog3G10);

        let clamped = SplitToneParams::from_yaml("preset: -3").unwrap();
        assert_eq!(clamped.preset, ColorPreset::Linear);
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let err = SplitToneParams::from_yaml("preset: rec709").unwrap_err();
        assert!(matches!(err, OpsError::Config(_)));
        assert!(err.to_string().contains("rec709"));
    }

    #[test]
    fn test_full_document() {
        let yaml = "\
preset: sony_slog3
preserve_midgray: 0.35
shadow_power: [1.4, 1.2, 1.0]
highlight_power: [0.8, 1.0, 1.1]
show_curve: true
";
        let p = SplitToneParams::from_yaml(yaml).unwrap();
        assert_eq!(p.preset, ColorPreset::SonySLog3);
        assert_eq!(p.preserve_midgray, 0.35);
        assert_eq!(p.shadow_power, [1.4, 1.2, 1.0]);
        assert_eq!(p.highlight_power, [0.8, 1.0, 1.1]);
        assert!(p.show_curve);
    }

    #[test]
    fn test_yaml_roundtrip_uses_key() {
        let p = SplitToneParams::default()
            .with_preset(ColorPreset::FujifilmFLog2)
            .with_preserve(0.5);
        let text = p.to_yaml().unwrap();
        assert!(text.contains("preset: fujifilm_flog2"));
        assert_eq!(SplitToneParams::from_yaml(&text).unwrap(), p);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("look.yaml");
        let p = SplitToneParams::default()
            .with_preset(ColorPreset::AppleLog)
            .with_shadow_power([0.6, 0.8, 1.2]);
        p.to_file(&path).unwrap();
        assert_eq!(SplitToneParams::from_file(&path).unwrap(), p);
    }

    #[test]
    fn test_missing_file() {
        let err = SplitToneParams::from_file("/nonexistent/splittone.yaml").unwrap_err();
        assert!(matches!(err, OpsError::Io(_)));
    }
}
