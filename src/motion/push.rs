use super::{clamp_after_move, Bounds, Motion};
use crate::{cursor::Cursor, particle::Particle, surface::Surface, Float};

/// Repulsion from the cursor while it is pressed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Push {
    friction: Float,
}

impl Push {
    pub fn new(friction: Float) -> Self {
        Self { friction }
    }

    pub fn friction(&self) -> Float {
        self.friction
    }
}

impl Default for Push {
    fn default() -> Self {
        Self::new(0.95)
    }
}

impl Motion for Push {
    fn integrate<S: Surface + ?Sized>(
        &self,
        particle: &mut Particle,
        bounds: &Bounds,
        cursor: &Cursor,
        _surface: &mut S,
    ) {
        if cursor.pressed() {
            let offset = particle.position() - cursor.position();
            let distance = offset.norm();
            if distance < cursor.radius() && distance > 0. {
                let force = cursor.radius() / distance;
                *particle.displacement_mut() += offset / distance * force;
            }
        }

        particle.decay(self.friction);
        particle.advance();
        clamp_after_move(particle, bounds);
    }
}
