use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_ASSET_ROOT: &str = "sdmc";
pub const DEFAULT_OPACITY: u8 = 0xC0;

const BASE_IMAGE: &str = "img/switchpro-base.png";
const DPAD_IMAGE: &str = "img/switchpro-dpad.png";
const LBUTTON_IMAGE: &str = "img/switchpro-lbutton.png";
const RBUTTON_IMAGE: &str = "img/switchpro-rbutton.png";

/// Settings handed to the controller view when it is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Directory the artwork paths are resolved against.
    pub asset_root: PathBuf,
    /// Overall overlay opacity; `0xFF` is fully opaque.
    pub opacity: u8,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl OverlayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opacity == 0 {
            return Err(ConfigError::Opacity);
        }
        Ok(())
    }

    /// Normalised multiplier applied to asset alpha at load time.
    pub fn alpha_multiplier(&self) -> f32 {
        self.opacity as f32 / u8::MAX as f32
    }

    pub fn asset_paths(&self) -> AssetPaths {
        AssetPaths {
            base: self.asset_root.join(BASE_IMAGE),
            dpad: self.asset_root.join(DPAD_IMAGE),
            lbutton: self.asset_root.join(LBUTTON_IMAGE),
            rbutton: self.asset_root.join(RBUTTON_IMAGE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub base: PathBuf,
    pub dpad: PathBuf,
    pub lbutton: PathBuf,
    pub rbutton: PathBuf,
}

pub fn load_config(path: &Path) -> Result<OverlayConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: OverlayConfig =
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp = tempdir().expect("temp dir");
        let path = temp.path().join("overlay.json");
        fs::write(&path, r#"{ "opacity": 255 }"#).expect("write config");

        let config = load_config(&path).expect("load config");
        assert_eq!(config.opacity, 0xFF);
        assert_eq!(config.asset_root, PathBuf::from(DEFAULT_ASSET_ROOT));
        assert_eq!(config.alpha_multiplier(), 1.0);
    }

    #[test]
    fn zero_opacity_is_rejected() {
        let temp = tempdir().expect("temp dir");
        let path = temp.path().join("overlay.json");
        fs::write(&path, r#"{ "asset_root": "assets", "opacity": 0 }"#).expect("write config");

        assert!(matches!(load_config(&path), Err(ConfigError::Opacity)));
    }

    #[test]
    fn malformed_json_reports_path() {
        let temp = tempdir().expect("temp dir");
        let path = temp.path().join("overlay.json");
        fs::write(&path, "{ opacity: ").expect("write config");

        let err = load_config(&path).expect_err("parse failure");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("overlay.json"));
    }

    #[test]
    fn asset_paths_resolve_under_root() {
        let config = OverlayConfig {
            asset_root: PathBuf::from("/mnt/sd"),
            ..Default::default()
        };
        let paths = config.asset_paths();
        assert_eq!(paths.base, PathBuf::from("/mnt/sd/img/switchpro-base.png"));
        assert_eq!(paths.dpad, PathBuf::from("/mnt/sd/img/switchpro-dpad.png"));
        assert_eq!(
            paths.rbutton,
            PathBuf::from("/mnt/sd/img/switchpro-rbutton.png")
        );
    }
}
