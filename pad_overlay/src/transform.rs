//! In-place color transforms over tightly packed RGBA8 buffers.
//!
//! Both transforms work on raw bytes with fixed-width `u8` arithmetic: the
//! alpha scale truncates toward zero and the tint multiply wraps. The tint is
//! a coarse multiplicative effect rather than a blend, and callers rely on the
//! wrapped result, so it must not be "corrected" into a saturating or
//! normalised multiply.

use crate::color::Color;

/// Multiply the alpha byte of every pixel by `multiplier`, truncating.
///
/// `multiplier` is clamped to `[0, 1]` so the result stays in `0..=255`.
/// Color channels are left untouched.
pub fn scale_alpha(buffer: &mut [u8], multiplier: f32) {
    let multiplier = if multiplier.is_nan() {
        0.0
    } else {
        multiplier.clamp(0.0, 1.0)
    };
    for alpha in buffer.iter_mut().skip(3).step_by(4) {
        *alpha = (*alpha as f32 * multiplier) as u8;
    }
}

/// Multiply the R, G and B bytes of every pixel by the matching nibble of
/// `color` shifted left four bits. Products wrap modulo 256; alpha is kept.
///
/// Not idempotent: a second call compounds on the first.
pub fn tint(buffer: &mut [u8], color: Color) {
    let r = color.r << 4;
    let g = color.g << 4;
    let b = color.b << 4;
    for pixel in buffer.chunks_exact_mut(4) {
        pixel[0] = pixel[0].wrapping_mul(r);
        pixel[1] = pixel[1].wrapping_mul(g);
        pixel[2] = pixel[2].wrapping_mul(b);
    }
}
