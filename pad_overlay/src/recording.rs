use crate::color::Color;
use crate::host::{BlendMode, HostControl, Renderer};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCall {
    Fill(Color),
    Text {
        text: String,
        x: i32,
        y: i32,
        size: u32,
        color: Color,
    },
    Circle {
        x: i32,
        y: i32,
        radius: u32,
        filled: bool,
        color: Color,
    },
    Bitmap {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        len: usize,
        blend: BlendMode,
    },
}

#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub(crate) calls: Vec<DrawCall>,
}

impl Renderer for RecordingRenderer {
    fn fill_screen(&mut self, color: Color) {
        self.calls.push(DrawCall::Fill(color));
    }

    fn draw_string(&mut self, text: &str, x: i32, y: i32, size: u32, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: u32, filled: bool, color: Color) {
        self.calls.push(DrawCall::Circle {
            x,
            y,
            radius,
            filled,
            color,
        });
    }

    fn draw_bitmap(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        pixels: &[u8],
        blend: BlendMode,
    ) {
        self.calls.push(DrawCall::Bitmap {
            x,
            y,
            width,
            height,
            len: pixels.len(),
            blend,
        });
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub(crate) foreground_requests: Vec<bool>,
}

impl HostControl for RecordingHost {
    fn request_foreground(&mut self, enabled: bool) {
        self.foreground_requests.push(enabled);
    }
}
