//! Per-frame controller input as delivered by the host.

/// Button bits of the host pad bitmask.
pub mod buttons {
    pub const A: u64 = 1 << 0;
    pub const B: u64 = 1 << 1;
    pub const X: u64 = 1 << 2;
    pub const Y: u64 = 1 << 3;
    pub const STICK_L: u64 = 1 << 4;
    pub const STICK_R: u64 = 1 << 5;
    pub const L: u64 = 1 << 6;
    pub const R: u64 = 1 << 7;
    pub const ZL: u64 = 1 << 8;
    pub const ZR: u64 = 1 << 9;
    pub const PLUS: u64 = 1 << 10;
    pub const MINUS: u64 = 1 << 11;
    pub const LEFT: u64 = 1 << 12;
    pub const UP: u64 = 1 << 13;
    pub const RIGHT: u64 = 1 << 14;
    pub const DOWN: u64 = 1 << 15;

    pub(crate) const NAMES: [(&str, u64); 16] = [
        ("a", A),
        ("b", B),
        ("x", X),
        ("y", Y),
        ("stickl", STICK_L),
        ("stickr", STICK_R),
        ("l", L),
        ("r", R),
        ("zl", ZL),
        ("zr", ZR),
        ("plus", PLUS),
        ("minus", MINUS),
        ("left", LEFT),
        ("up", UP),
        ("right", RIGHT),
        ("down", DOWN),
    ];
}

/// Largest magnitude reported on either stick axis.
pub const JOYSTICK_MAX: i32 = 0x7FFF;

/// Look up a button bit by name, ignoring case and `_`/`-` separators.
pub fn button_from_name(name: &str) -> Option<u64> {
    let normalized: String = name
        .chars()
        .filter(|ch| *ch != '_' && *ch != '-')
        .map(|ch| ch.to_ascii_lowercase())
        .collect();
    buttons::NAMES
        .iter()
        .find(|(candidate, _)| *candidate == normalized)
        .map(|(_, bit)| *bit)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalogStick {
    pub x: i32,
    pub y: i32,
}

impl AnalogStick {
    pub const CENTER: AnalogStick = AnalogStick { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_deflected(&self) -> bool {
        self.x != 0 || self.y != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchState {
    pub touched: bool,
    pub x: u32,
    pub y: u32,
}

/// Everything the host hands to one `handle_input` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    pub keys_down: u64,
    pub keys_held: u64,
    pub touch: TouchState,
    pub left_stick: AnalogStick,
    pub right_stick: AnalogStick,
}

impl InputFrame {
    pub fn pressed(&self, button: u64) -> bool {
        self.keys_down & button != 0
    }
}

/// Controller state captured from a single input frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerSnapshot {
    buttons: u64,
    left_stick: AnalogStick,
    right_stick: AnalogStick,
}

impl ControllerSnapshot {
    pub const fn new(buttons: u64, left_stick: AnalogStick, right_stick: AnalogStick) -> Self {
        Self {
            buttons,
            left_stick,
            right_stick,
        }
    }

    /// Buttons that went down this frame or are still held both count.
    pub fn capture(input: &InputFrame) -> Self {
        Self::new(
            input.keys_down | input.keys_held,
            input.left_stick,
            input.right_stick,
        )
    }

    pub fn buttons(&self) -> u64 {
        self.buttons
    }

    pub fn is_set(&self, button: u64) -> bool {
        self.buttons & button != 0
    }

    pub fn left_stick(&self) -> AnalogStick {
        self.left_stick
    }

    pub fn right_stick(&self) -> AnalogStick {
        self.right_stick
    }
}

/// Both stick clicks held together leave the controller view.
pub fn is_exit_chord(keys_held: u64) -> bool {
    keys_held & buttons::STICK_L != 0 && keys_held & buttons::STICK_R != 0
}
