//! Software framebuffer implementing the overlay drawing primitives.

use anyhow::{Result, ensure};
use pad_overlay::{BlendMode, Color, Renderer};

use crate::font::{GlyphBitmap, TextRasterizer};

/// Largest canvas side accepted; matches wgpu's default texture limit.
pub const MAX_CANVAS_SIDE: u32 = 8192;

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    font: Option<TextRasterizer>,
    warned_no_font: bool,
}

impl Canvas {
    pub fn new(width: u32, height: u32, font: Option<TextRasterizer>) -> Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        ensure!(
            width <= MAX_CANVAS_SIDE && height <= MAX_CANVAS_SIDE,
            "canvas {width}x{height} exceeds {MAX_CANVAS_SIDE}x{MAX_CANVAS_SIDE}"
        );
        Ok(Self {
            width,
            height,
            pixels: vec![0u8; width as usize * height as usize * 4],
            font,
            warned_no_font: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(out)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    fn blend_pixel(&mut self, x: i32, y: i32, src: [u8; 4], mode: BlendMode) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let dst = &mut self.pixels[idx..idx + 4];
        match mode {
            BlendMode::Src => dst.copy_from_slice(&src),
            BlendMode::Std => {
                let alpha = src[3] as u32;
                mix_color(dst, src, alpha);
                dst[3] = (alpha + dst[3] as u32 * (255 - alpha) / 255) as u8;
            }
            BlendMode::Dst => {
                let alpha = src[3] as u32;
                if alpha == 0 {
                    return;
                }
                mix_color(dst, src, alpha);
                dst[3] = dst[3].max(src[3]);
            }
        }
    }

    fn blit_glyph(&mut self, pen_x: i32, baseline: i32, glyph: &GlyphBitmap, color: [u8; 4]) {
        let left = pen_x + glyph.xmin;
        let top = baseline - (glyph.height as i32 + glyph.ymin);
        for gy in 0..glyph.height {
            let row = (gy * glyph.width) as usize;
            for gx in 0..glyph.width {
                let coverage = glyph.coverage[row + gx as usize];
                if coverage == 0 {
                    continue;
                }
                let alpha = ((coverage as u16 * color[3] as u16) / u8::MAX as u16) as u8;
                self.blend_pixel(
                    left + gx as i32,
                    top + gy as i32,
                    [color[0], color[1], color[2], alpha],
                    BlendMode::Std,
                );
            }
        }
    }
}

fn mix_color(dst: &mut [u8], src: [u8; 4], alpha: u32) {
    for channel in 0..3 {
        let blended = (src[channel] as u32 * alpha + dst[channel] as u32 * (255 - alpha) + 127) / 255;
        dst[channel] = blended as u8;
    }
}

impl Renderer for Canvas {
    fn fill_screen(&mut self, color: Color) {
        let rgba = color.to_rgba8();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    fn draw_string(&mut self, text: &str, x: i32, y: i32, size: u32, color: Color) {
        let Some(mut font) = self.font.take() else {
            if !self.warned_no_font {
                log::warn!("no font loaded; skipping text such as {text:?}");
                self.warned_no_font = true;
            }
            return;
        };
        let rgba = color.to_rgba8();
        let mut pen_x = x as f32;
        for ch in text.chars() {
            let glyph = font.glyph(ch, size);
            self.blit_glyph(pen_x.round() as i32, y, &glyph, rgba);
            pen_x += glyph.advance;
        }
        self.font = Some(font);
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: u32, filled: bool, color: Color) {
        let rgba = color.to_rgba8();
        let r = radius as i32;
        let outer = r * r;
        let inner = (r - 1).max(0) * (r - 1).max(0);
        for dy in -r..=r {
            for dx in -r..=r {
                let dist = dx * dx + dy * dy;
                if dist > outer || (!filled && dist <= inner) {
                    continue;
                }
                self.blend_pixel(x + dx, y + dy, rgba, BlendMode::Std);
            }
        }
    }

    fn draw_bitmap(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        pixels: &[u8],
        blend: BlendMode,
    ) {
        let row_bytes = width as usize * 4;
        for (row, line) in pixels.chunks_exact(row_bytes.max(4)).take(height as usize).enumerate() {
            for (col, src) in line.chunks_exact(4).enumerate() {
                self.blend_pixel(
                    x + col as i32,
                    y + row as i32,
                    [src[0], src[1], src[2], src[3]],
                    blend,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(r: u8, g: u8, b: u8) -> Color {
        Color::new(r, g, b, 0xF)
    }

    #[test]
    fn fill_expands_nibbles() {
        let mut canvas = Canvas::new(2, 2, None).expect("canvas");
        canvas.fill_screen(Color::new(0xF, 0x0, 0xA, 0xC));
        assert_eq!(canvas.pixel(1, 1), Some([0xFF, 0x00, 0xAA, 0xCC]));
    }

    #[test]
    fn filled_circle_covers_disc_only() {
        let mut canvas = Canvas::new(32, 32, None).expect("canvas");
        canvas.fill_screen(Color::TRANSPARENT);
        canvas.draw_circle(16, 16, 5, true, opaque(0xF, 0xF, 0xF));

        assert_eq!(canvas.pixel(16, 16), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(21, 16), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(16, 11), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(21, 21), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(22, 16), Some([0, 0, 0, 0]));
    }

    #[test]
    fn outlined_circle_leaves_center_empty() {
        let mut canvas = Canvas::new(32, 32, None).expect("canvas");
        canvas.draw_circle(16, 16, 6, false, opaque(0xF, 0x0, 0x0));
        assert_eq!(canvas.pixel(16, 16), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(22, 16), Some([255, 0, 0, 255]));
    }

    #[test]
    fn circles_clip_at_edges() {
        let mut canvas = Canvas::new(8, 8, None).expect("canvas");
        canvas.draw_circle(-2, -2, 4, true, opaque(0x0, 0xF, 0x0));
        assert_eq!(canvas.pixel(0, 0), Some([0, 255, 0, 255]));
        assert_eq!(canvas.pixel(7, 7), Some([0, 0, 0, 0]));
    }

    #[test]
    fn dst_blend_skips_transparent_and_mixes_by_alpha() {
        let mut canvas = Canvas::new(3, 1, None).expect("canvas");
        canvas.fill_screen(opaque(0x0, 0x0, 0x0));
        let bitmap: [u8; 12] = [
            255, 255, 255, 0, //
            255, 255, 255, 255, //
            200, 100, 0, 128,
        ];
        canvas.draw_bitmap(0, 0, 3, 1, &bitmap, BlendMode::Dst);

        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(1, 0), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(2, 0), Some([100, 50, 0, 255]));
    }

    #[test]
    fn dst_blend_never_adds_alpha() {
        let mut canvas = Canvas::new(1, 1, None).expect("canvas");
        canvas.fill_screen(Color::new(0, 0, 0, 0x8));
        canvas.draw_bitmap(0, 0, 1, 1, &[255u8, 0, 0, 0x40], BlendMode::Dst);
        assert_eq!(canvas.pixel(0, 0).map(|p| p[3]), Some(0x88));
    }

    #[test]
    fn bitmap_is_offset_and_clipped() {
        let mut canvas = Canvas::new(4, 4, None).expect("canvas");
        let bitmap = [9u8, 9, 9, 255].repeat(4);
        canvas.draw_bitmap(3, 3, 2, 2, &bitmap, BlendMode::Src);
        assert_eq!(canvas.pixel(3, 3), Some([9, 9, 9, 255]));
        assert_eq!(canvas.pixel(2, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let err = Canvas::new(40_000, 40_000, None)
            .err()
            .expect("40000x40000 canvas must be rejected");
        assert!(err.to_string().contains("40000x40000"));
        assert!(Canvas::new(MAX_CANVAS_SIDE + 1, 1, None).is_err());

        let edge = Canvas::new(MAX_CANVAS_SIDE, 1, None).expect("widest canvas");
        assert_eq!(edge.pixels().len(), MAX_CANVAS_SIDE as usize * 4);
        assert_eq!(edge.pixel(MAX_CANVAS_SIDE - 1, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn text_without_font_is_skipped() {
        let mut canvas = Canvas::new(4, 4, None).expect("canvas");
        canvas.draw_string("Controller Overlay", 0, 3, 15, Color::TEXT);
        canvas.draw_string("again", 0, 3, 15, Color::TEXT);
        assert!(canvas.pixels().iter().all(|b| *b == 0));
    }
}
