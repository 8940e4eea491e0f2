//! Recording renderer — captures draw calls for assertions.

use selim_core::geometry::{Point, Rect};
use selim_core::render::{Color, Renderer, Stroke, TextStyle};

/// One captured draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// A filled rectangle.
    Rect {
        /// Geometry.
        rect: Rect,
        /// Fill colour.
        fill: Color,
        /// Fill opacity.
        alpha: f32,
        /// Outline, if any.
        stroke: Option<Stroke>,
    },
    /// An image.
    Image {
        /// Texture key.
        texture: String,
        /// Centre position.
        at: Point,
        /// Uniform scale.
        scale: f32,
    },
    /// A text run.
    Text {
        /// The text drawn.
        text: String,
        /// Top-left position.
        at: Point,
        /// Style.
        style: TextStyle,
    },
}

/// A `Renderer` that remembers everything it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Calls in the order they were made.
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts drawn, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Texture keys drawn, in order.
    #[must_use]
    pub fn textures(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Image { texture, .. } => Some(texture.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, fill: Color, alpha: f32, stroke: Option<Stroke>) {
        self.calls.push(DrawCall::Rect {
            rect,
            fill,
            alpha,
            stroke,
        });
    }

    fn draw_image(&mut self, texture: &str, at: Point, scale: f32) {
        self.calls.push(DrawCall::Image {
            texture: texture.to_owned(),
            at,
            scale,
        });
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            at,
            style: style.clone(),
        });
    }
}
