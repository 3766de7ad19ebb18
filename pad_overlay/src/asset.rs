use std::fs;
use std::path::Path;

use image::ImageFormat;
use log::{debug, info};

use crate::color::Color;
use crate::error::AssetDecodeError;
use crate::transform;

/// Decoded RGBA8 artwork owned by a single overlay renderer.
///
/// The buffer length is fixed at `width * height * 4` when the asset is
/// created and never changes afterwards.
#[derive(Debug, Clone)]
pub struct PixelAsset {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl PixelAsset {
    /// Read and decode a PNG, then scale its alpha channel by `alpha`.
    pub fn load(path: &Path, alpha: f32) -> Result<Self, AssetDecodeError> {
        let bytes = fs::read(path).map_err(|source| AssetDecodeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let asset = Self::decode(&bytes, alpha).map_err(|source| AssetDecodeError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "loaded asset {} ({}x{}, alpha x{:.3})",
            path.display(),
            asset.width,
            asset.height,
            alpha
        );
        Ok(asset)
    }

    /// Decode PNG bytes already in memory. Any channel layout is widened to
    /// RGBA with 8 bits per channel.
    pub fn decode(bytes: &[u8], alpha: f32) -> Result<Self, image::ImageError> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.into_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self::from_rgba(width, height, image.into_raw(), alpha))
    }

    fn from_rgba(width: u32, height: u32, mut buffer: Vec<u8>, alpha: f32) -> Self {
        debug_assert_eq!(buffer.len(), width as usize * height as usize * 4);
        transform::scale_alpha(&mut buffer, alpha);
        Self {
            width,
            height,
            buffer,
        }
    }

    pub fn tint(&mut self, color: Color) {
        debug!(
            "tinting {}x{} asset with {:X}{:X}{:X}",
            self.width, self.height, color.r, color.g, color.b
        );
        transform::tint(&mut self.buffer, color);
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
