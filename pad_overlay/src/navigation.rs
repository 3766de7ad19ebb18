use log::{info, warn};

use crate::config::OverlayConfig;
use crate::error::AssetDecodeError;
use crate::host::{HostControl, Renderer};
use crate::input::InputFrame;
use crate::view::{ControllerView, Frame, MenuView, View, ViewEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    ControllerOverlay,
}

/// Menu-rooted navigation between the menu and the live controller view.
///
/// The menu is always the root and the controller view sits one level above
/// it, so the stack never grows past two entries. Leaving the controller view
/// drops it together with its assets.
#[derive(Debug)]
pub struct Navigator {
    config: OverlayConfig,
    view: View,
    frame: Frame,
}

impl Navigator {
    pub fn new(config: OverlayConfig) -> Self {
        Self::with_view(config, View::Menu(MenuView::new()))
    }

    pub fn with_view(config: OverlayConfig, view: View) -> Self {
        let frame = view.create_ui();
        Self {
            config,
            view,
            frame,
        }
    }

    pub fn screen(&self) -> Screen {
        match self.view {
            View::Menu(_) => Screen::Menu,
            View::Controller(_) => Screen::ControllerOverlay,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Route one frame of input to the active view and apply any transition
    /// it asks for. Returns whether the input was consumed.
    ///
    /// A failure to build the controller view leaves the menu active.
    pub fn handle_input(
        &mut self,
        input: &InputFrame,
        host: &mut dyn HostControl,
    ) -> Result<bool, AssetDecodeError> {
        match self.view.handle_input(input) {
            ViewEvent::OpenController => {
                self.open_controller(host)?;
                Ok(true)
            }
            ViewEvent::Back => {
                self.go_back();
                Ok(true)
            }
            ViewEvent::Handled => Ok(true),
            ViewEvent::Unhandled => Ok(false),
        }
    }

    /// The host's generic back gesture. Returns `false` at the root, where
    /// closing the overlay is the host's business.
    pub fn back(&mut self) -> bool {
        match self.view {
            View::Controller(_) => {
                self.go_back();
                true
            }
            View::Menu(_) => {
                warn!("back gesture ignored at menu root");
                false
            }
        }
    }

    pub fn update(&mut self) {
        self.view.update();
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        self.view.draw(&self.frame, renderer);
    }

    fn open_controller(&mut self, host: &mut dyn HostControl) -> Result<(), AssetDecodeError> {
        host.request_foreground(false);
        let controller = ControllerView::new(&self.config)?;
        self.switch_to(View::Controller(controller));
        info!("navigated menu -> controller overlay");
        Ok(())
    }

    fn go_back(&mut self) {
        self.switch_to(View::Menu(MenuView::new()));
        info!("navigated controller overlay -> menu");
    }

    fn switch_to(&mut self, view: View) {
        self.frame = view.create_ui();
        self.view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{buttons, AnalogStick};
    use crate::overlay::tests::write_asset_set;
    use crate::recording::{DrawCall, RecordingHost, RecordingRenderer};
    use crate::view::FrameStyle;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn down(bits: u64) -> InputFrame {
        InputFrame {
            keys_down: bits,
            keys_held: bits,
            ..Default::default()
        }
    }

    fn held(bits: u64) -> InputFrame {
        InputFrame {
            keys_held: bits,
            ..Default::default()
        }
    }

    fn navigator_with_assets() -> (tempfile::TempDir, Navigator) {
        let temp = tempdir().expect("temp dir");
        write_asset_set(temp.path());
        let config = OverlayConfig {
            asset_root: temp.path().to_path_buf(),
            opacity: 0xC0,
        };
        (temp, Navigator::new(config))
    }

    fn open(navigator: &mut Navigator, host: &mut RecordingHost) {
        let consumed = navigator
            .handle_input(&down(buttons::A), host)
            .expect("open controller view");
        assert!(consumed);
        assert_eq!(navigator.screen(), Screen::ControllerOverlay);
    }

    #[test]
    fn starts_at_menu() {
        let navigator = Navigator::new(OverlayConfig::default());
        assert_eq!(navigator.screen(), Screen::Menu);
    }

    #[test]
    fn menu_ignores_everything_but_confirm() {
        let (_temp, mut navigator) = navigator_with_assets();
        let mut host = RecordingHost::default();

        let inputs = [
            down(buttons::B),
            down(buttons::X | buttons::Y),
            held(buttons::A),
            down(buttons::STICK_L | buttons::STICK_R),
            InputFrame {
                left_stick: AnalogStick::new(5000, -5000),
                ..Default::default()
            },
        ];
        for input in &inputs {
            let consumed = navigator.handle_input(input, &mut host).expect("menu input");
            assert!(!consumed);
            assert_eq!(navigator.screen(), Screen::Menu);
        }
        assert!(!navigator.back());
        assert_eq!(navigator.screen(), Screen::Menu);
        assert!(host.foreground_requests.is_empty());
    }

    #[test]
    fn confirm_opens_controller_and_requests_foreground() {
        let (_temp, mut navigator) = navigator_with_assets();
        let mut host = RecordingHost::default();

        open(&mut navigator, &mut host);

        assert_eq!(host.foreground_requests, vec![false]);
        let mut renderer = RecordingRenderer::default();
        navigator.draw(&mut renderer);
        assert_eq!(renderer.calls[0], DrawCall::Fill(crate::color::Color::TRANSPARENT));
        assert!(matches!(renderer.calls[1], DrawCall::Bitmap { .. }));
        match navigator.view() {
            View::Controller(view) => assert_eq!(view.snapshot().buttons(), 0),
            View::Menu(_) => panic!("expected controller view"),
        }
    }

    #[test]
    fn controller_stays_open_for_ordinary_input() {
        let (_temp, mut navigator) = navigator_with_assets();
        let mut host = RecordingHost::default();
        open(&mut navigator, &mut host);

        let inputs = [
            down(buttons::A),
            down(buttons::B),
            held(buttons::STICK_L),
            held(buttons::STICK_R | buttons::PLUS),
            InputFrame {
                right_stick: AnalogStick::new(0, 30000),
                ..Default::default()
            },
        ];
        for input in &inputs {
            let consumed = navigator.handle_input(input, &mut host).expect("overlay input");
            assert!(consumed);
            assert_eq!(navigator.screen(), Screen::ControllerOverlay);
        }
        match navigator.view() {
            View::Controller(view) => {
                assert_eq!(view.snapshot().right_stick(), AnalogStick::new(0, 30000));
                assert_eq!(view.snapshot().buttons(), 0);
            }
            View::Menu(_) => panic!("expected controller view"),
        }
    }

    #[test]
    fn stick_chord_returns_to_menu() {
        let (_temp, mut navigator) = navigator_with_assets();
        let mut host = RecordingHost::default();
        open(&mut navigator, &mut host);

        let consumed = navigator
            .handle_input(&held(buttons::STICK_L | buttons::STICK_R), &mut host)
            .expect("chord");
        assert!(consumed);
        assert_eq!(navigator.screen(), Screen::Menu);
    }

    #[test]
    fn back_gesture_returns_to_menu() {
        let (_temp, mut navigator) = navigator_with_assets();
        let mut host = RecordingHost::default();
        open(&mut navigator, &mut host);

        assert!(navigator.back());
        assert_eq!(navigator.screen(), Screen::Menu);
        let mut renderer = RecordingRenderer::default();
        navigator.draw(&mut renderer);
        assert_eq!(
            renderer.calls[0],
            DrawCall::Fill(crate::color::Color::FRAME_BACKGROUND)
        );
    }

    #[test]
    fn reopening_reloads_assets() {
        let (temp, mut navigator) = navigator_with_assets();
        let mut host = RecordingHost::default();
        open(&mut navigator, &mut host);
        assert!(navigator.back());

        std::fs::remove_file(temp.path().join("img/switchpro-dpad.png")).expect("remove dpad");
        let err = navigator
            .handle_input(&down(buttons::A), &mut host)
            .expect_err("reload must hit the filesystem");
        assert!(err.path().ends_with("img/switchpro-dpad.png"));
        assert_eq!(navigator.screen(), Screen::Menu);
    }

    #[test]
    fn missing_assets_keep_menu_active() {
        let config = OverlayConfig {
            asset_root: PathBuf::from("/nonexistent/pad_overlay/assets"),
            opacity: 0xC0,
        };
        let mut navigator = Navigator::new(config);
        let mut host = RecordingHost::default();

        let err = navigator
            .handle_input(&down(buttons::A), &mut host)
            .expect_err("missing assets");
        assert!(matches!(err, AssetDecodeError::Read { .. }));
        assert_eq!(navigator.screen(), Screen::Menu);
        assert!(matches!(navigator.view(), View::Menu(_)));

        let mut renderer = RecordingRenderer::default();
        navigator.draw(&mut renderer);
        assert!(renderer
            .calls
            .iter()
            .all(|call| !matches!(call, DrawCall::Bitmap { .. })));
        assert_eq!(navigator.view().create_ui().style, FrameStyle::Standard);
    }
}
