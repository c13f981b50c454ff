use nalgebra::Vector2;

use super::{clamp_after_move, Bounds, Motion};
use crate::{cursor::Cursor, particle::Particle, surface::Surface, Float};

/// Attraction toward the cursor.
///
/// Within the cursor's radius a particle gains displacement toward the cursor
/// with magnitude `cursor radius / distance` and is linked to it by a highlight
/// line. A particle that comes within its own radius of the cursor bounces off.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pull {
    friction: Float,
}

impl Pull {
    pub fn new(friction: Float) -> Self {
        Self { friction }
    }

    pub fn friction(&self) -> Float {
        self.friction
    }
}

impl Default for Pull {
    fn default() -> Self {
        Self::new(0.2)
    }
}

impl Motion for Pull {
    fn integrate<S: Surface + ?Sized>(
        &self,
        particle: &mut Particle,
        bounds: &Bounds,
        cursor: &Cursor,
        surface: &mut S,
    ) {
        let offset = particle.position() - cursor.position();
        let distance = offset.norm();

        if distance < cursor.radius() {
            if distance > 0. {
                let force = cursor.radius() / distance;
                *particle.displacement_mut() -= offset / distance * force;
            }
            let opacity = 1. - distance / cursor.radius();
            particle.draw_line(surface, cursor.position(), opacity);
        }

        if distance < particle.radius() {
            *particle.velocity_mut() *= -1.;
            *particle.displacement_mut() = Vector2::zeros();
        }

        particle.decay(self.friction);
        particle.advance();
        clamp_after_move(particle, bounds);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::surface::Recorder;

    fn cursor_at(x: Float, y: Float) -> Cursor {
        let mut cursor = Cursor::new(100.);
        cursor.move_to(Vector2::new(x, y));
        cursor
    }

    #[test]
    fn outside_radius_is_untouched() {
        let bounds = Bounds::new(1000., 1000.);
        let cursor = cursor_at(500., 500.);
        let mut surface = Recorder::new();
        let mut par = Particle::new(2., Vector2::new(500., 650.), Vector2::new(0.1, 0.));

        Pull::default().integrate(&mut par, &bounds, &cursor, &mut surface);

        assert_eq!(*par.displacement(), Vector2::zeros());
        assert_abs_diff_eq!(*par.position(), Vector2::new(500.1, 650.), epsilon = 1e-12);
        assert_eq!(surface.lines().count(), 0);
    }

    #[test]
    fn inside_radius_moves_toward_cursor() {
        let bounds = Bounds::new(1000., 1000.);
        let cursor = cursor_at(250., 100.);
        let mut surface = Recorder::new();
        let mut par = Particle::new(2., Vector2::new(200., 100.), Vector2::zeros());

        Pull::default().integrate(&mut par, &bounds, &cursor, &mut surface);

        // force 100 / 50 = 2, decayed by 0.2
        assert_abs_diff_eq!(*par.displacement(), Vector2::new(0.4, 0.), epsilon = 1e-12);
        assert_abs_diff_eq!(*par.position(), Vector2::new(200.4, 100.), epsilon = 1e-12);

        let lines: Vec<_> = surface.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_abs_diff_eq!(lines[0].alpha, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(lines[0].to, Vector2::new(250., 100.));
    }

    #[test]
    fn increment_points_toward_cursor_from_any_side() {
        let bounds = Bounds::new(1000., 1000.);
        let cursor = cursor_at(500., 500.);
        let pull = Pull::default();

        for (dx, dy) in [(30., 40.), (-60., 10.), (5., -90.), (-1., -1.)] {
            let start = Vector2::new(500. + dx, 500. + dy);
            let mut par = Particle::new(0.5, start, Vector2::zeros());
            pull.integrate(&mut par, &bounds, &cursor, &mut Recorder::new());

            let toward = cursor.position() - start;
            assert!(par.displacement().norm() > 0.);
            assert!(par.displacement().dot(&toward) > 0.);
        }
    }

    #[test]
    fn displacement_decays_without_force() {
        let bounds = Bounds::new(1000., 1000.);
        let cursor = cursor_at(0., 0.);
        let mut par = Particle::new(2., Vector2::new(500., 500.), Vector2::zeros());
        *par.displacement_mut() = Vector2::new(1., -1.);

        Pull::default().integrate(&mut par, &bounds, &cursor, &mut Recorder::new());

        assert_abs_diff_eq!(*par.displacement(), Vector2::new(0.2, -0.2), epsilon = 1e-12);
        assert_abs_diff_eq!(*par.position(), Vector2::new(500.2, 499.8), epsilon = 1e-12);
    }

    #[test]
    fn bounces_off_cursor_within_own_radius() {
        let bounds = Bounds::new(1000., 1000.);
        let cursor = cursor_at(500., 500.);
        let mut par = Particle::new(5., Vector2::new(503., 500.), Vector2::new(0.2, 0.3));
        *par.displacement_mut() = Vector2::new(4., 4.);

        Pull::default().integrate(&mut par, &bounds, &cursor, &mut Recorder::new());

        assert_abs_diff_eq!(*par.velocity(), Vector2::new(-0.2, -0.3));
        assert_eq!(*par.displacement(), Vector2::zeros());
        assert_abs_diff_eq!(*par.position(), Vector2::new(502.8, 499.7), epsilon = 1e-12);
    }

    #[test]
    fn coincident_with_cursor_stays_finite() {
        let bounds = Bounds::new(1000., 1000.);
        let cursor = cursor_at(500., 500.);
        let mut surface = Recorder::new();
        let mut par = Particle::new(2., Vector2::new(500., 500.), Vector2::new(0.1, 0.1));

        Pull::default().integrate(&mut par, &bounds, &cursor, &mut surface);

        assert!(par.position().iter().all(|c| c.is_finite()));
        assert_eq!(*par.displacement(), Vector2::zeros());
        let lines: Vec<_> = surface.lines().collect();
        assert_abs_diff_eq!(lines[0].alpha, 1.);
    }

    #[test]
    fn clamps_after_moving() {
        let bounds = Bounds::new(100., 100.);
        let cursor = cursor_at(500., 500.);
        let mut par = Particle::new(2., Vector2::new(97.9, 50.), Vector2::new(0.5, 0.));

        Pull::default().integrate(&mut par, &bounds, &cursor, &mut Recorder::new());

        assert_abs_diff_eq!(par.position().x, 98.);
        assert_abs_diff_eq!(par.velocity().x, -0.5);
    }
}
