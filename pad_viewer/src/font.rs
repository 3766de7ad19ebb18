use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use fontdue::{Font, FontSettings};

/// Coverage bitmap for one rasterised glyph.
#[derive(Clone)]
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    pub xmin: i32,
    pub ymin: i32,
    pub advance: f32,
    pub coverage: Arc<[u8]>,
}

/// Rasterises text with a TTF/OTF font, caching glyphs per pixel size.
pub struct TextRasterizer {
    font: Font,
    cache: HashMap<(char, u32), GlyphBitmap>,
}

impl TextRasterizer {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|err| anyhow!("parsing font {}: {err}", path.display()))?;
        Ok(Self {
            font,
            cache: HashMap::new(),
        })
    }

    pub fn glyph(&mut self, ch: char, size: u32) -> GlyphBitmap {
        if let Some(glyph) = self.cache.get(&(ch, size)) {
            return glyph.clone();
        }
        let (metrics, bitmap) = self.font.rasterize(ch, size as f32);
        let glyph = GlyphBitmap {
            width: metrics.width as u32,
            height: metrics.height as u32,
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            advance: metrics.advance_width,
            coverage: Arc::from(bitmap.into_boxed_slice()),
        };
        self.cache.insert((ch, size), glyph.clone());
        glyph
    }
}
