/// A 4-bit-per-channel color as understood by the host renderer.
///
/// Every field holds a nibble (`0x0..=0xF`). The same type doubles as the
/// packed multiplier fed to [`crate::transform::tint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0x0, 0x0, 0x0, 0x0);
    pub const FRAME_BACKGROUND: Color = Color::new(0x0, 0x0, 0x0, 0xD);
    pub const TEXT: Color = Color::new(0xF, 0xF, 0xF, 0xF);
    pub const DESCRIPTION: Color = Color::new(0xA, 0xA, 0xA, 0xF);
    pub const HIGHLIGHT: Color = Color::new(0x0, 0xC, 0xF, 0xF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r & 0xF,
            g: g & 0xF,
            b: b & 0xF,
            a: a & 0xF,
        }
    }

    /// Color used for an indicator whose input is currently pressed.
    pub const fn active(opacity: u8) -> Self {
        Color::new(0x0, 0xF, 0xD, opacity >> 4)
    }

    /// Color used for an indicator whose input is released.
    pub const fn inactive(opacity: u8) -> Self {
        Color::new(0xA, 0xA, 0xA, opacity >> 4)
    }

    /// Expand to 8 bits per channel, `0xF` mapping to `0xFF`. Only the low
    /// nibble of each field counts.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [
            (self.r & 0xF) * 17,
            (self.g & 0xF) * 17,
            (self.b & 0xF) * 17,
            (self.a & 0xF) * 17,
        ]
    }
}
