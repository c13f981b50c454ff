use nalgebra::Vector2;

use crate::{surface::Surface, Float};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const ORANGE_RED: Color = Color::rgb(255, 69, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS notation, e.g. `rgb(255, 215, 0)`.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: Float,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Vector2<Float>,
    pub end: Vector2<Float>,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vector2<Float>, end: Vector2<Float>) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    #[must_use]
    pub fn stop(mut self, offset: Float, color: Color) -> Self {
        self.stops.push(ColorStop { offset, color });
        self
    }
}

/// A fill or stroke style.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(LinearGradient),
}

/// Axis along which the gradient runs across the field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GradientDirection {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
}

/// The white, gold, orange-red look of the field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Theme {
    pub direction: GradientDirection,
    /// Outline color. `None` strokes with the gradient as well.
    pub stroke: Option<Color>,
}

impl Theme {
    /// Vertical gradient used for fill and stroke.
    pub fn vertical() -> Self {
        Self {
            direction: GradientDirection::Vertical,
            stroke: None,
        }
    }

    /// Diagonal gradient fill with white outlines.
    pub fn diagonal() -> Self {
        Self {
            direction: GradientDirection::Diagonal,
            stroke: Some(Color::WHITE),
        }
    }

    pub fn gradient(&self, width: Float, height: Float) -> LinearGradient {
        let end = match self.direction {
            GradientDirection::Vertical => Vector2::new(0., height),
            GradientDirection::Diagonal => Vector2::new(width, height),
        };
        LinearGradient::new(Vector2::zeros(), end)
            .stop(0., Color::WHITE)
            .stop(0.5, Color::GOLD)
            .stop(1., Color::ORANGE_RED)
    }

    /// Set fill and stroke style for a field of the given size.
    ///
    /// Call again after every resize, since the gradient spans the whole field.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S, width: Float, height: Float) {
        let gradient = Paint::Gradient(self.gradient(width, height));
        match self.stroke {
            Some(color) => surface.set_stroke_style(&Paint::Solid(color)),
            None => surface.set_stroke_style(&gradient),
        }
        surface.set_fill_style(&gradient);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::vertical()
    }
}
