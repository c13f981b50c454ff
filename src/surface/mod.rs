mod recorder;

pub use recorder::*;

use crate::{style::Paint, Float};

/// A 2D drawing surface with canvas-style path operations.
///
/// The field only ever draws through this trait, so it runs against a browser
/// canvas, a recording surface, or nothing at all.
pub trait Surface {
    fn clear_rect(&mut self, x: Float, y: Float, width: Float, height: Float);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: Float, y: Float);

    fn line_to(&mut self, x: Float, y: Float);

    fn arc(&mut self, x: Float, y: Float, radius: Float, start_angle: Float, end_angle: Float);

    fn fill(&mut self);

    fn stroke(&mut self);

    /// Push the paint state (alpha and styles).
    fn save(&mut self);

    /// Pop the paint state pushed by the matching [`Surface::save`].
    fn restore(&mut self);

    fn set_global_alpha(&mut self, alpha: Float);

    fn set_fill_style(&mut self, paint: &Paint);

    fn set_stroke_style(&mut self, paint: &Paint);
}

/// Discards everything drawn on it.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear_rect(&mut self, _x: Float, _y: Float, _width: Float, _height: Float) {}

    fn begin_path(&mut self) {}

    fn move_to(&mut self, _x: Float, _y: Float) {}

    fn line_to(&mut self, _x: Float, _y: Float) {}

    fn arc(&mut self, _x: Float, _y: Float, _radius: Float, _start: Float, _end: Float) {}

    fn fill(&mut self) {}

    fn stroke(&mut self) {}

    fn save(&mut self) {}

    fn restore(&mut self) {}

    fn set_global_alpha(&mut self, _alpha: Float) {}

    fn set_fill_style(&mut self, _paint: &Paint) {}

    fn set_stroke_style(&mut self, _paint: &Paint) {}
}
