//! Live controller input overlay.
//!
//! Loads controller artwork once per view, then redraws it every frame with
//! indicators driven by the latest pad snapshot. The host runtime supplies
//! input, drawing primitives and the frame loop through the traits in
//! [`host`].

pub mod app;
pub mod asset;
pub mod color;
pub mod config;
pub mod error;
pub mod host;
pub mod input;
pub mod navigation;
pub mod overlay;
pub mod transform;
pub mod view;

#[cfg(test)]
pub(crate) mod recording;

pub use app::ControllerOverlayApp;
pub use asset::PixelAsset;
pub use color::Color;
pub use config::{load_config, AssetPaths, OverlayConfig};
pub use error::{AssetDecodeError, ConfigError, ServiceError};
pub use host::{BlendMode, HostControl, Overlay, Renderer};
pub use input::{
    button_from_name, buttons, AnalogStick, ControllerSnapshot, InputFrame, TouchState, JOYSTICK_MAX,
};
pub use navigation::{Navigator, Screen};
pub use overlay::ControllerOverlay;
pub use view::{Frame, FrameStyle, View, ViewEvent};
