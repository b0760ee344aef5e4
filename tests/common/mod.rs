//! Shared test doubles and constructors for the integration tests.
use glam::IVec2;
use harukaze::{Canvas, Color, Drawable, DrawableRef};

/// One recorded draw primitive.
#[derive(Clone, Debug, PartialEq)]
#[allow(dead_code)]
pub enum DrawCall {
    Circle {
        center: IVec2,
        radius: i32,
        color: Color,
    },
    BlendedCircle {
        center: IVec2,
        radius: i32,
        color: Color,
        alpha: f64,
    },
    Line {
        from: IVec2,
        to: IVec2,
        color: Color,
        thickness: i32,
    },
}

/// Canvas that records draw calls instead of rasterizing them.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Color) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn blend_circle(&mut self, center: IVec2, radius: i32, color: Color, alpha: f64) {
        self.calls.push(DrawCall::BlendedCircle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn line(&mut self, from: IVec2, to: IVec2, color: Color, thickness: i32) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            color,
            thickness,
        });
    }
}

/// Convenience constructor for a shared anchor drawable.
#[allow(dead_code)]
pub fn anchor(x: i32, y: i32, name: &str) -> DrawableRef {
    Drawable::shared(x, y, name)
}
