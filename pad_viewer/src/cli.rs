use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pad_overlay::{OverlayConfig, load_config};

#[derive(Parser, Debug)]
#[command(about = "Desktop host for the controller input overlay", version)]
pub struct Args {
    /// Overlay config JSON (`asset_root`, `opacity`); flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding img/switchpro-*.png
    #[arg(long)]
    pub asset_root: Option<PathBuf>,

    /// Overlay opacity, 1-255
    #[arg(long)]
    pub opacity: Option<u8>,

    /// TTF/OTF font used for menu and frame text; text is skipped without one
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Skip creating a winit window/event loop; replays --script instead
    #[arg(long)]
    pub headless: bool,

    /// Input script JSON replayed in headless mode
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// When set, write the last rendered frame to this PNG
    #[arg(long)]
    pub dump_frame: Option<PathBuf>,

    /// When set, write every rendered frame as frame_NNNN.png into this directory
    #[arg(long)]
    pub dump_dir: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 448)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn overlay_config(&self) -> Result<OverlayConfig> {
        let mut config = match self.config.as_deref() {
            Some(path) => load_config(path)
                .with_context(|| format!("loading overlay config {}", path.display()))?,
            None => OverlayConfig::default(),
        };
        if let Some(root) = &self.asset_root {
            config.asset_root = root.clone();
        }
        if let Some(opacity) = self.opacity {
            config.opacity = opacity;
        }
        config.validate().context("validating overlay config")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn flags_override_config_file() {
        let temp = tempdir().expect("temp dir");
        let path = temp.path().join("overlay.json");
        fs::write(&path, r#"{ "asset_root": "from-file", "opacity": 64 }"#).expect("write");

        let args = Args::parse_from([
            "pad_viewer",
            "--config",
            path.to_str().expect("utf8 path"),
            "--opacity",
            "255",
        ]);
        let config = args.overlay_config().expect("config");
        assert_eq!(config.asset_root, PathBuf::from("from-file"));
        assert_eq!(config.opacity, 255);
    }

    #[test]
    fn defaults_without_config() {
        let args = Args::parse_from(["pad_viewer"]);
        assert_eq!(args.overlay_config().expect("config"), OverlayConfig::default());
        assert_eq!((args.width, args.height), (448, 720));
    }

    #[test]
    fn zero_opacity_flag_is_rejected() {
        let args = Args::parse_from(["pad_viewer", "--opacity", "0"]);
        assert!(args.overlay_config().is_err());
    }
}
