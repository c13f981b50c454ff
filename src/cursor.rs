use nalgebra::Vector2;

use crate::Float;

/// When pointer movement updates the cursor position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CursorTracking {
    /// Every pointer movement moves the cursor.
    #[default]
    Always,
    /// Pointer movement is only followed while the pointer is pressed.
    WhilePressed,
}

/// The pointer as seen by the particles.
#[derive(Clone, Debug, PartialEq)]
pub struct Cursor {
    position: Vector2<Float>,
    radius: Float,
    pressed: bool,
    tracking: CursorTracking,
}

impl Cursor {
    /// A released cursor at the origin with the given active radius.
    pub fn new(radius: Float) -> Self {
        Self {
            position: Vector2::zeros(),
            radius,
            pressed: false,
            tracking: CursorTracking::Always,
        }
    }

    #[must_use]
    pub fn tracking(mut self, tracking: CursorTracking) -> Self {
        self.tracking = tracking;
        self
    }

    pub fn position(&self) -> &Vector2<Float> {
        &self.position
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn tracking_policy(&self) -> CursorTracking {
        self.tracking
    }

    /// Set the position unconditionally.
    pub fn move_to(&mut self, position: Vector2<Float>) {
        self.position = position;
    }

    /// Follow a pointer movement, subject to the tracking policy.
    pub fn pointer_moved(&mut self, position: Vector2<Float>) {
        match self.tracking {
            CursorTracking::Always => self.position = position,
            CursorTracking::WhilePressed if self.pressed => self.position = position,
            CursorTracking::WhilePressed => {}
        }
    }

    pub fn press(&mut self, position: Vector2<Float>) {
        self.position = position;
        self.pressed = true;
    }

    /// Release the pointer. The last position is kept.
    pub fn release(&mut self) {
        self.pressed = false;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(100.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_tracks_movement() {
        let mut cursor = Cursor::default();

        cursor.pointer_moved(Vector2::new(10., 20.));

        assert_eq!(*cursor.position(), Vector2::new(10., 20.));
        assert!(!cursor.pressed());
    }

    #[test]
    fn while_pressed_ignores_hover() {
        let mut cursor = Cursor::new(150.).tracking(CursorTracking::WhilePressed);

        cursor.pointer_moved(Vector2::new(10., 20.));
        assert_eq!(*cursor.position(), Vector2::zeros());

        cursor.press(Vector2::new(30., 40.));
        cursor.pointer_moved(Vector2::new(35., 45.));
        assert_eq!(*cursor.position(), Vector2::new(35., 45.));
        assert!(cursor.pressed());

        cursor.release();
        cursor.pointer_moved(Vector2::new(90., 90.));
        assert_eq!(*cursor.position(), Vector2::new(35., 45.));
        assert!(!cursor.pressed());
    }
}
