//! Canvas domain: immediate-mode draw list rebuilt every frame.

use bevy::prelude::*;

/// One primitive in viewport coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled square with its top-left corner at `pos`
    Dot { pos: Vec2, size: f32, color: Color },
    /// Circle outline
    Circle { center: Vec2, radius: f32, color: Color },
    /// Filled circle
    Disc { center: Vec2, radius: f32, color: Color },
    Line { from: Vec2, to: Vec2, color: Color },
    /// Ellipse outline rotated by `rotation` radians
    Ellipse {
        center: Vec2,
        half_size: Vec2,
        rotation: f32,
        color: Color,
    },
}

/// The frame being drawn. Cleared at the start of every simulated frame.
#[derive(Resource, Debug, Default)]
pub struct Canvas {
    shapes: Vec<Shape>,
    wash: Option<Color>,
    shake: Option<Vec2>,
}

impl Canvas {
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.wash = None;
        self.shake = None;
    }

    pub fn dot(&mut self, pos: Vec2, size: f32, color: Color) {
        self.shapes.push(Shape::Dot { pos, size, color });
    }

    /// Filled square centred on `center`
    pub fn dot_centered(&mut self, center: Vec2, size: f32, color: Color) {
        self.dot(center - Vec2::splat(size * 0.5), size, color);
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius > 0.0 {
            self.shapes.push(Shape::Circle {
                center,
                radius,
                color,
            });
        }
    }

    pub fn disc(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius > 0.0 {
            self.shapes.push(Shape::Disc {
                center,
                radius,
                color,
            });
        }
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.shapes.push(Shape::Line { from, to, color });
    }

    pub fn ellipse(&mut self, center: Vec2, half_size: Vec2, rotation: f32, color: Color) {
        self.shapes.push(Shape::Ellipse {
            center,
            half_size,
            rotation,
            color,
        });
    }

    /// Full-viewport tint. The most opaque wash of the frame wins.
    pub fn wash(&mut self, color: Color) {
        let replace = match self.wash {
            Some(current) => color.alpha() > current.alpha(),
            None => true,
        };
        if replace {
            self.wash = Some(color);
        }
    }

    /// Offset the whole view for this frame.
    pub fn shake(&mut self, offset: Vec2) {
        self.shake = Some(offset);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn wash_color(&self) -> Option<Color> {
        self.wash
    }

    pub fn shake_offset(&self) -> Option<Vec2> {
        self.shake
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.wash.is_none()
    }
}

/// `rgba(r, g, b, a)` with channels in 0-255 and alpha clamped to 0-1.
pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Color {
    Color::srgba_u8(r, g, b, (a.clamp(0.0, 1.0) * 255.0) as u8)
}
