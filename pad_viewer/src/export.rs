use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use image::{ColorType, ImageEncoder, codecs::png::PngEncoder};

use crate::canvas::Canvas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub opaque_pixels: u32,
    pub total_pixels: u32,
}

pub fn dump_canvas_to_png(canvas: &Canvas, destination: &Path) -> Result<FrameStats> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    export_rgba_to_png(destination, canvas.width(), canvas.height(), canvas.pixels())?;
    Ok(compute_frame_stats(canvas))
}

fn export_rgba_to_png(path: &Path, width: u32, height: u32, data: &[u8]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let encoder = PngEncoder::new(file);
    encoder
        .write_image(data, width, height, ColorType::Rgba8)
        .with_context(|| format!("writing PNG to {}", path.display()))?;
    Ok(())
}

pub fn compute_frame_stats(canvas: &Canvas) -> FrameStats {
    let opaque_pixels = canvas
        .pixels()
        .chunks_exact(4)
        .filter(|pixel| pixel[3] > 0)
        .count() as u32;
    FrameStats {
        opaque_pixels,
        total_pixels: canvas.width() * canvas.height(),
    }
}
