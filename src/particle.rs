use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::Rng;

use crate::{motion::Bounds, surface::Surface, Float};

/// A single point drifting through the field.
///
/// Besides its constant base velocity a particle carries a displacement,
/// a decaying velocity-like term that the cursor-reactive motions feed.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    position: Vector2<Float>,
    velocity: Vector2<Float>,
    radius: Float,
    displacement: Vector2<Float>,
}

impl Particle {
    pub fn new(radius: Float, position: Vector2<Float>, velocity: Vector2<Float>) -> Self {
        Self {
            position,
            velocity,
            radius,
            displacement: Vector2::zeros(),
        }
    }

    pub fn position(&self) -> &Vector2<Float> {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut Vector2<Float> {
        &mut self.position
    }

    pub fn velocity(&self) -> &Vector2<Float> {
        &self.velocity
    }

    pub fn velocity_mut(&mut self) -> &mut Vector2<Float> {
        &mut self.velocity
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    pub fn displacement(&self) -> &Vector2<Float> {
        &self.displacement
    }

    pub fn displacement_mut(&mut self) -> &mut Vector2<Float> {
        &mut self.displacement
    }

    /// Shrink the displacement by `friction`.
    pub fn decay(&mut self, friction: Float) {
        self.displacement *= friction;
    }

    /// Move by velocity plus displacement.
    pub fn advance(&mut self) {
        self.position += self.velocity + self.displacement;
    }

    /// Fill and outline a circle of the particle's radius at its position.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.begin_path();
        surface.arc(self.position.x, self.position.y, self.radius, 0., TAU);
        surface.fill();
        surface.stroke();
    }

    /// Stroke a segment from this particle to `target` with the given opacity.
    ///
    /// The global alpha is restored afterwards.
    pub fn draw_line<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        target: &Vector2<Float>,
        opacity: Float,
    ) {
        surface.save();
        surface.set_global_alpha(opacity);
        surface.begin_path();
        surface.move_to(self.position.x, self.position.y);
        surface.line_to(target.x, target.y);
        surface.stroke();
        surface.restore();
    }

    /// Draw a fresh random position inside `bounds`.
    ///
    /// Velocity, radius and displacement are left untouched.
    pub fn reset(&mut self, bounds: &Bounds, rng: &mut impl Rng) {
        self.position = random_position(self.radius, bounds, rng);
    }
}

/// A uniformly random position whose distance to every wall is at least `radius`.
///
/// If the field is too small for the particle, the coordinate collapses to `radius`.
pub(crate) fn random_position(radius: Float, bounds: &Bounds, rng: &mut impl Rng) -> Vector2<Float> {
    let mut coordinate = |extent: Float| {
        let span = (extent - 2. * radius).max(0.);
        radius + rng.gen::<Float>() * span
    };
    let x = coordinate(bounds.width);
    let y = coordinate(bounds.height);
    Vector2::new(x, y)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::surface::{Command, PathOp, Recorder};

    #[test]
    fn reset_keeps_velocity_radius_and_displacement() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut par = Particle::new(4., Vector2::new(10., 10.), Vector2::new(0.3, -0.2));
        *par.displacement_mut() = Vector2::new(1., 2.);

        let bounds = Bounds::new(640., 480.);
        for _ in 0..100 {
            par.reset(&bounds, &mut rng);

            assert!(bounds.contains(&par));
            assert_eq!(*par.velocity(), Vector2::new(0.3, -0.2));
            assert_eq!(*par.displacement(), Vector2::new(1., 2.));
            assert_abs_diff_eq!(par.radius(), 4.);
        }
    }

    #[test]
    fn reset_in_zero_area_collapses_to_radius() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut par = Particle::new(3., Vector2::new(50., 50.), Vector2::zeros());

        par.reset(&Bounds::new(0., 0.), &mut rng);

        assert_abs_diff_eq!(*par.position(), Vector2::new(3., 3.));
    }

    #[test]
    fn decay_then_advance() {
        let mut par = Particle::new(1., Vector2::new(10., 10.), Vector2::new(0.5, -0.5));
        *par.displacement_mut() = Vector2::new(2., 4.);

        par.decay(0.5);
        par.advance();

        assert_abs_diff_eq!(*par.displacement(), Vector2::new(1., 2.));
        assert_abs_diff_eq!(*par.position(), Vector2::new(11.5, 11.5));
    }

    #[test]
    fn draw_fills_and_outlines_circle() {
        let par = Particle::new(5., Vector2::new(20., 30.), Vector2::zeros());
        let mut surface = Recorder::new();

        par.draw(&mut surface);

        let circles: Vec<_> = surface.circles().collect();
        assert_eq!(circles.len(), 1);
        assert_abs_diff_eq!(circles[0].0, Vector2::new(20., 30.));
        assert_abs_diff_eq!(circles[0].1, 5.);
        assert!(matches!(surface.commands()[0], Command::Fill { .. }));
        assert!(matches!(surface.commands()[1], Command::Stroke { .. }));
    }

    #[test]
    fn draw_line_restores_alpha() {
        let par = Particle::new(1., Vector2::new(0., 0.), Vector2::zeros());
        let mut surface = Recorder::new();

        par.draw_line(&mut surface, &Vector2::new(3., 4.), 0.25);

        let lines: Vec<_> = surface.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_abs_diff_eq!(lines[0].alpha, 0.25);
        assert_abs_diff_eq!(lines[0].to, Vector2::new(3., 4.));
        assert_abs_diff_eq!(surface.global_alpha(), 1.);

        match &surface.commands()[0] {
            Command::Stroke { path, .. } => {
                assert_eq!(path[0], PathOp::MoveTo(Vector2::new(0., 0.)));
            }
            other => panic!("expected a stroke, got {other:?}"),
        }
    }
}
