//! Seams to the host overlay runtime.
//!
//! The host owns the event loop, the framebuffer and the primitive
//! rasteriser. Everything in this crate talks to it through these traits.

use crate::color::Color;
use crate::error::ServiceError;
use crate::view::View;

/// How a blitted bitmap combines with what is already on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Host default blending.
    Std,
    /// Source replaces destination outright.
    Src,
    /// Source composites onto destination weighted by source alpha, never
    /// additively.
    Dst,
}

/// Primitive drawing operations provided by the host renderer.
pub trait Renderer {
    fn fill_screen(&mut self, color: Color);

    fn draw_string(&mut self, text: &str, x: i32, y: i32, size: u32, color: Color);

    fn draw_circle(&mut self, x: i32, y: i32, radius: u32, filled: bool, color: Color);

    /// `pixels` is tightly packed RGBA8, `width * height * 4` bytes.
    fn draw_bitmap(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        pixels: &[u8],
        blend: BlendMode,
    );
}

/// Navigation requests the core makes back into the host.
pub trait HostControl {
    fn request_foreground(&mut self, enabled: bool);
}

/// Lifecycle hooks the host calls around its run loop.
pub trait Overlay {
    /// Mount whatever storage the asset paths live on.
    fn init_services(&mut self) -> Result<(), ServiceError>;

    fn exit_services(&mut self);

    fn on_show(&mut self) {}

    fn on_hide(&mut self) {}

    fn initial_view(&self) -> View;
}
