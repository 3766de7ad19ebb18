//! The live controller drawing: base plate, d-pad and one indicator per
//! tracked button or stick, all positioned from a fixed anchor.

use log::info;

use crate::asset::PixelAsset;
use crate::color::Color;
use crate::config::OverlayConfig;
use crate::error::AssetDecodeError;
use crate::host::{BlendMode, Renderer};
use crate::input::{buttons, AnalogStick, ControllerSnapshot, JOYSTICK_MAX};

/// Top-left corner every offset below is measured from.
pub const ANCHOR: (i32, i32) = (5, 5);
pub const DPAD_OFFSET: (i32, i32) = (69, 71);
pub const LBUTTON_OFFSET: (i32, i32) = (28, 1);
pub const RBUTTON_OFFSET: (i32, i32) = (166, 1);

pub const FACE_BUTTON_RADIUS: u32 = 9;
pub const AUX_BUTTON_RADIUS: u32 = 5;
pub const STICK_RADIUS: u32 = 14;
/// Pixels a stick indicator moves at full deflection.
pub const STICK_TRAVEL: i32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonIndicator {
    pub button: u64,
    pub offset: (i32, i32),
    pub radius: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickIndicator {
    pub side: StickSide,
    pub offset: (i32, i32),
    pub click: u64,
}

pub const BUTTON_INDICATORS: [ButtonIndicator; 6] = [
    ButtonIndicator {
        button: buttons::A,
        offset: (215, 54),
        radius: FACE_BUTTON_RADIUS,
    },
    ButtonIndicator {
        button: buttons::B,
        offset: (195, 71),
        radius: FACE_BUTTON_RADIUS,
    },
    ButtonIndicator {
        button: buttons::X,
        offset: (195, 37),
        radius: FACE_BUTTON_RADIUS,
    },
    ButtonIndicator {
        button: buttons::Y,
        offset: (175, 54),
        radius: FACE_BUTTON_RADIUS,
    },
    ButtonIndicator {
        button: buttons::MINUS,
        offset: (96, 35),
        radius: AUX_BUTTON_RADIUS,
    },
    ButtonIndicator {
        button: buttons::PLUS,
        offset: (159, 35),
        radius: AUX_BUTTON_RADIUS,
    },
];

pub const STICK_INDICATORS: [StickIndicator; 2] = [
    StickIndicator {
        side: StickSide::Left,
        offset: (57, 54),
        click: buttons::STICK_L,
    },
    StickIndicator {
        side: StickSide::Right,
        offset: (161, 89),
        click: buttons::STICK_R,
    },
];

/// Pixel displacement for one stick axis. Screen Y grows downward, so
/// callers pass the negated Y axis.
pub fn stick_displacement(axis: i32) -> i32 {
    let axis = axis.clamp(-JOYSTICK_MAX, JOYSTICK_MAX);
    STICK_TRAVEL * axis / JOYSTICK_MAX
}

impl StickIndicator {
    fn stick(&self, snapshot: &ControllerSnapshot) -> AnalogStick {
        match self.side {
            StickSide::Left => snapshot.left_stick(),
            StickSide::Right => snapshot.right_stick(),
        }
    }

    /// Indicator center relative to the anchor.
    pub fn position(&self, snapshot: &ControllerSnapshot) -> (i32, i32) {
        let stick = self.stick(snapshot);
        (
            self.offset.0 + stick_displacement(stick.x),
            self.offset.1 + stick_displacement(-stick.y.max(-JOYSTICK_MAX)),
        )
    }

    pub fn is_active(&self, snapshot: &ControllerSnapshot) -> bool {
        self.stick(snapshot).is_deflected() || snapshot.is_set(self.click)
    }
}

/// Owns the pre-transformed artwork for one controller view.
#[derive(Debug)]
pub struct ControllerOverlay {
    anchor: (i32, i32),
    active: Color,
    inactive: Color,
    base: PixelAsset,
    dpad: PixelAsset,
    lbutton: PixelAsset,
    rbutton: PixelAsset,
}

impl ControllerOverlay {
    /// Load every asset and tint the non-base art. Any asset failure aborts
    /// construction.
    pub fn new(config: &OverlayConfig) -> Result<Self, AssetDecodeError> {
        let alpha = config.alpha_multiplier();
        let paths = config.asset_paths();
        let inactive = Color::inactive(config.opacity);

        let base = PixelAsset::load(&paths.base, alpha)?;
        let mut dpad = PixelAsset::load(&paths.dpad, alpha)?;
        let mut lbutton = PixelAsset::load(&paths.lbutton, alpha)?;
        let mut rbutton = PixelAsset::load(&paths.rbutton, alpha)?;

        for asset in [&mut dpad, &mut lbutton, &mut rbutton] {
            asset.tint(inactive);
        }

        info!(
            "controller overlay ready (opacity 0x{:02X}, assets from {})",
            config.opacity,
            config.asset_root.display()
        );

        Ok(Self {
            anchor: ANCHOR,
            active: Color::active(config.opacity),
            inactive,
            base,
            dpad,
            lbutton,
            rbutton,
        })
    }

    pub fn active_color(&self) -> Color {
        self.active
    }

    pub fn inactive_color(&self) -> Color {
        self.inactive
    }

    fn indicator_color(&self, active: bool) -> Color {
        if active {
            self.active
        } else {
            self.inactive
        }
    }

    /// Shoulder art with its screen position. It is tinted and kept but not
    /// drawn yet.
    pub fn shoulder_assets(&self) -> [((i32, i32), &PixelAsset); 2] {
        let (x, y) = self.anchor;
        [
            ((x + LBUTTON_OFFSET.0, y + LBUTTON_OFFSET.1), &self.lbutton),
            ((x + RBUTTON_OFFSET.0, y + RBUTTON_OFFSET.1), &self.rbutton),
        ]
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, snapshot: &ControllerSnapshot) {
        let (x, y) = self.anchor;

        blit(renderer, &self.base, x, y);
        blit(
            renderer,
            &self.dpad,
            x + DPAD_OFFSET.0,
            y + DPAD_OFFSET.1,
        );

        for indicator in &BUTTON_INDICATORS {
            renderer.draw_circle(
                x + indicator.offset.0,
                y + indicator.offset.1,
                indicator.radius,
                true,
                self.indicator_color(snapshot.is_set(indicator.button)),
            );
        }

        for indicator in &STICK_INDICATORS {
            let (dx, dy) = indicator.position(snapshot);
            renderer.draw_circle(
                x + dx,
                y + dy,
                STICK_RADIUS,
                true,
                self.indicator_color(indicator.is_active(snapshot)),
            );
        }
    }
}

fn blit(renderer: &mut dyn Renderer, asset: &PixelAsset, x: i32, y: i32) {
    renderer.draw_bitmap(
        x,
        y,
        asset.width(),
        asset.height(),
        asset.buffer(),
        BlendMode::Dst,
    );
}
