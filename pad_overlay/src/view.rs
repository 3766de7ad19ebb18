//! The two screens the overlay can show and the frame chrome around them.

use crate::color::Color;
use crate::config::OverlayConfig;
use crate::error::AssetDecodeError;
use crate::host::Renderer;
use crate::input::{buttons, is_exit_chord, ControllerSnapshot, InputFrame};
use crate::overlay::ControllerOverlay;

pub const MENU_TITLE: &str = "Controller Overlay";
pub const MENU_SUBTITLE: &str = concat!("v", env!("CARGO_PKG_VERSION"));
pub const CONTROLLER_ENTRY: &str = "Controller Overlay";

const TITLE_POS: (i32, i32, u32) = (20, 50, 30);
const SUBTITLE_POS: (i32, i32, u32) = (20, 70, 15);
const ENTRY_TEXT_POS: (i32, i32, u32) = (39, 155, 23);
const ENTRY_MARKER: (i32, i32, u32) = (27, 148, 4);
const ENTRY_HEIGHT: i32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStyle {
    /// Opaque backdrop with title and subtitle.
    Standard,
    /// Fully transparent backdrop so only the content shows.
    Invisible,
}

/// Chrome drawn around a view's content, built once when the view becomes
/// active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub style: FrameStyle,
}

impl Frame {
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.fill_screen(match self.style {
            FrameStyle::Standard => Color::FRAME_BACKGROUND,
            FrameStyle::Invisible => Color::TRANSPARENT,
        });

        let (x, y, size) = TITLE_POS;
        if !self.title.is_empty() {
            renderer.draw_string(self.title, x, y, size, Color::TEXT);
        }
        let (x, y, size) = SUBTITLE_POS;
        if !self.subtitle.is_empty() {
            renderer.draw_string(self.subtitle, x, y, size, Color::DESCRIPTION);
        }
    }
}

/// What a view wants done after it saw an input frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Input was not used; the host may apply its own handling.
    Unhandled,
    Handled,
    /// The menu entry for the live controller view was confirmed.
    OpenController,
    /// The view asked to return to the previous screen.
    Back,
}

#[derive(Debug, Default)]
pub struct MenuView {
    focused: usize,
}

impl MenuView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &'static [&'static str] {
        &[CONTROLLER_ENTRY]
    }

    fn handle_input(&mut self, input: &InputFrame) -> ViewEvent {
        if input.pressed(buttons::A) && self.entries().get(self.focused).is_some() {
            return ViewEvent::OpenController;
        }
        ViewEvent::Unhandled
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        let (x, y, size) = ENTRY_TEXT_POS;
        let (mx, my, radius) = ENTRY_MARKER;
        for (idx, entry) in self.entries().iter().enumerate() {
            let row = idx as i32 * ENTRY_HEIGHT;
            renderer.draw_string(entry, x, y + row, size, Color::TEXT);
            if idx == self.focused {
                renderer.draw_circle(mx, my + row, radius, true, Color::HIGHLIGHT);
            }
        }
    }
}

/// The live controller screen: the overlay art plus the latest snapshot.
#[derive(Debug)]
pub struct ControllerView {
    overlay: ControllerOverlay,
    snapshot: ControllerSnapshot,
}

impl ControllerView {
    pub fn new(config: &OverlayConfig) -> Result<Self, AssetDecodeError> {
        Ok(Self {
            overlay: ControllerOverlay::new(config)?,
            snapshot: ControllerSnapshot::default(),
        })
    }

    pub fn overlay(&self) -> &ControllerOverlay {
        &self.overlay
    }

    pub fn snapshot(&self) -> &ControllerSnapshot {
        &self.snapshot
    }

    fn handle_input(&mut self, input: &InputFrame) -> ViewEvent {
        self.snapshot = ControllerSnapshot::capture(input);
        if is_exit_chord(input.keys_held) {
            return ViewEvent::Back;
        }
        ViewEvent::Handled
    }
}

#[derive(Debug)]
pub enum View {
    Menu(MenuView),
    Controller(ControllerView),
}

impl View {
    pub fn create_ui(&self) -> Frame {
        match self {
            View::Menu(_) => Frame {
                title: MENU_TITLE,
                subtitle: MENU_SUBTITLE,
                style: FrameStyle::Standard,
            },
            View::Controller(_) => Frame {
                title: "",
                subtitle: "",
                style: FrameStyle::Invisible,
            },
        }
    }

    /// Called once per frame before drawing. Neither screen animates.
    pub fn update(&mut self) {}

    pub fn handle_input(&mut self, input: &InputFrame) -> ViewEvent {
        match self {
            View::Menu(menu) => menu.handle_input(input),
            View::Controller(controller) => controller.handle_input(input),
        }
    }

    pub fn draw(&self, frame: &Frame, renderer: &mut dyn Renderer) {
        frame.draw(renderer);
        match self {
            View::Menu(menu) => menu.draw(renderer),
            View::Controller(controller) => controller.overlay.draw(renderer, &controller.snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCall, RecordingRenderer};

    #[test]
    fn menu_frame_draws_title_and_entry() {
        let view = View::Menu(MenuView::new());
        let frame = view.create_ui();
        let mut renderer = RecordingRenderer::default();
        view.draw(&frame, &mut renderer);

        assert_eq!(renderer.calls[0], DrawCall::Fill(Color::FRAME_BACKGROUND));
        let texts: Vec<&str> = renderer
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec![MENU_TITLE, MENU_SUBTITLE, CONTROLLER_ENTRY]);
    }

    #[test]
    fn invisible_frame_clears_and_skips_empty_text() {
        let frame = Frame {
            title: "",
            subtitle: "",
            style: FrameStyle::Invisible,
        };
        let mut renderer = RecordingRenderer::default();
        frame.draw(&mut renderer);
        assert_eq!(renderer.calls, vec![DrawCall::Fill(Color::TRANSPARENT)]);
    }

    #[test]
    fn menu_opens_controller_only_on_confirm() {
        let mut view = View::Menu(MenuView::new());
        let confirm = InputFrame {
            keys_down: buttons::A,
            ..Default::default()
        };
        let held_only = InputFrame {
            keys_held: buttons::A,
            ..Default::default()
        };
        let other = InputFrame {
            keys_down: buttons::B | buttons::X | buttons::DOWN,
            ..Default::default()
        };
        assert_eq!(view.handle_input(&confirm), ViewEvent::OpenController);
        assert_eq!(view.handle_input(&held_only), ViewEvent::Unhandled);
        assert_eq!(view.handle_input(&other), ViewEvent::Unhandled);
    }
}
