use super::{reflect_before_move, Bounds, Motion};
use crate::{cursor::Cursor, particle::Particle, surface::Surface};

/// Plain drifting that ignores the cursor.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Drift;

impl Motion for Drift {
    fn integrate<S: Surface + ?Sized>(
        &self,
        particle: &mut Particle,
        bounds: &Bounds,
        _cursor: &Cursor,
        _surface: &mut S,
    ) {
        reflect_before_move(particle, bounds);
        particle.advance();
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector2;

    use super::*;
    use crate::surface::Recorder;

    #[test]
    fn overshoots_by_one_step_then_turns() {
        let bounds = Bounds::new(100., 100.);
        let cursor = Cursor::default();
        let mut surface = Recorder::new();
        let mut par = Particle::new(1., Vector2::new(98.9, 50.), Vector2::new(0.3, 0.));

        Drift.integrate(&mut par, &bounds, &cursor, &mut surface);
        assert_abs_diff_eq!(par.position().x, 99.2, epsilon = 1e-12);
        assert_abs_diff_eq!(par.velocity().x, 0.3);

        Drift.integrate(&mut par, &bounds, &cursor, &mut surface);
        assert_abs_diff_eq!(par.position().x, 98.9, epsilon = 1e-12);
        assert_abs_diff_eq!(par.velocity().x, -0.3);
    }

    #[test]
    fn ignores_cursor() {
        let bounds = Bounds::new(500., 500.);
        let mut cursor = Cursor::default();
        cursor.press(Vector2::new(250., 250.));
        let mut surface = Recorder::new();
        let mut par = Particle::new(2., Vector2::new(240., 250.), Vector2::new(0.1, 0.2));

        Drift.integrate(&mut par, &bounds, &cursor, &mut surface);

        assert_abs_diff_eq!(*par.position(), Vector2::new(240.1, 250.2), epsilon = 1e-12);
        assert_eq!(*par.displacement(), Vector2::zeros());
        assert!(surface.commands().is_empty());
    }
}
