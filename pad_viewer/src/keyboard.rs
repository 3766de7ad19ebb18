//! Keyboard stand-in for a pad: tracks held keys and turns them into one
//! `InputFrame` per tick.

use pad_overlay::input::JOYSTICK_MAX;
use pad_overlay::{AnalogStick, InputFrame, TouchState, buttons};
use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Pad,
    Back,
    Quit,
    Ignored,
}

#[derive(Debug, Clone, Copy, Default)]
struct StickKeys {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl StickKeys {
    fn axis(positive: bool, negative: bool) -> i32 {
        match (positive, negative) {
            (true, false) => JOYSTICK_MAX,
            (false, true) => -JOYSTICK_MAX,
            _ => 0,
        }
    }

    fn stick(&self) -> AnalogStick {
        AnalogStick::new(
            Self::axis(self.right, self.left),
            Self::axis(self.up, self.down),
        )
    }
}

#[derive(Debug, Default)]
pub struct KeyboardPad {
    held: u64,
    previous: u64,
    left: StickKeys,
    right: StickKeys,
    touch: TouchState,
    back_pending: bool,
}

fn button_for_key(code: KeyCode) -> Option<u64> {
    let bit = match code {
        KeyCode::KeyX => buttons::A,
        KeyCode::KeyZ => buttons::B,
        KeyCode::KeyS => buttons::X,
        KeyCode::KeyA => buttons::Y,
        KeyCode::KeyQ => buttons::L,
        KeyCode::KeyE => buttons::R,
        KeyCode::Digit1 => buttons::ZL,
        KeyCode::Digit3 => buttons::ZR,
        KeyCode::Enter => buttons::PLUS,
        KeyCode::ShiftRight => buttons::MINUS,
        KeyCode::ArrowLeft => buttons::LEFT,
        KeyCode::ArrowUp => buttons::UP,
        KeyCode::ArrowRight => buttons::RIGHT,
        KeyCode::ArrowDown => buttons::DOWN,
        KeyCode::KeyC => buttons::STICK_L,
        KeyCode::KeyV => buttons::STICK_R,
        _ => return None,
    };
    Some(bit)
}

impl KeyboardPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) -> KeyAction {
        if let Some(bit) = button_for_key(code) {
            if pressed {
                self.held |= bit;
            } else {
                self.held &= !bit;
            }
            return KeyAction::Pad;
        }

        let slot = match code {
            KeyCode::KeyT => &mut self.left.up,
            KeyCode::KeyG => &mut self.left.down,
            KeyCode::KeyF => &mut self.left.left,
            KeyCode::KeyH => &mut self.left.right,
            KeyCode::KeyI => &mut self.right.up,
            KeyCode::KeyK => &mut self.right.down,
            KeyCode::KeyJ => &mut self.right.left,
            KeyCode::KeyL => &mut self.right.right,
            KeyCode::Backspace => {
                if pressed {
                    self.back_pending = true;
                }
                return KeyAction::Back;
            }
            KeyCode::Escape => return KeyAction::Quit,
            _ => return KeyAction::Ignored,
        };
        *slot = pressed;
        KeyAction::Pad
    }

    pub fn set_touch(&mut self, touched: bool, x: u32, y: u32) {
        self.touch = TouchState { touched, x, y };
    }

    /// Snapshot the keys for this tick. `keys_down` only reports keys that
    /// were not held on the previous tick.
    pub fn take_frame(&mut self) -> InputFrame {
        let frame = InputFrame {
            keys_down: self.held & !self.previous,
            keys_held: self.held,
            touch: self.touch,
            left_stick: self.left.stick(),
            right_stick: self.right.stick(),
        };
        self.previous = self.held;
        frame
    }

    pub fn take_back(&mut self) -> bool {
        std::mem::take(&mut self.back_pending)
    }
}
