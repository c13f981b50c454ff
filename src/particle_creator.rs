use nalgebra::Vector2;
use rand::{rngs::ThreadRng, Rng};
use rand_distr::{Distribution, Uniform};

use crate::{
    config::{FieldConfig, RadiusDistribution},
    motion::Bounds,
    particle::{random_position, Particle},
    Float,
};

pub trait ParticleCreator {
    fn create_particle(&mut self, bounds: &Bounds) -> Particle;

    fn create_particles(&mut self, n: usize, bounds: &Bounds) -> Vec<Particle> {
        (0..n).map(|_| self.create_particle(bounds)).collect()
    }
}

/// Samples radius and velocity components from distributions and places the
/// particle uniformly inside the bounds.
#[derive(Clone, Debug)]
pub struct DistrParticleCreator<R, RD, VD>
where
    R: Rng,
    RD: Distribution<Float>,
    VD: Distribution<Float>,
{
    rng: R,
    radius_distr: RD,
    velocity_distr: VD,
}

impl<RD, VD> DistrParticleCreator<ThreadRng, RD, VD>
where
    RD: Distribution<Float>,
    VD: Distribution<Float>,
{
    pub fn new(radius_distr: RD, velocity_distr: VD) -> Self {
        Self {
            rng: rand::thread_rng(),
            radius_distr,
            velocity_distr,
        }
    }
}

impl<R, RD, VD> DistrParticleCreator<R, RD, VD>
where
    R: Rng,
    RD: Distribution<Float>,
    VD: Distribution<Float>,
{
    pub fn rng(radius_distr: RD, velocity_distr: VD, rng: R) -> Self {
        Self {
            rng,
            radius_distr,
            velocity_distr,
        }
    }
}

impl<R: Rng> DistrParticleCreator<R, RadiusDistribution, Uniform<Float>> {
    /// The creator matching a field configuration.
    pub fn from_config(config: &FieldConfig, rng: R) -> Self {
        let speed = config.max_speed.abs();
        // Uniform::new panics on an empty range
        let velocity_distr = if speed > 0. {
            Uniform::new(-speed, speed)
        } else {
            Uniform::new_inclusive(0., 0.)
        };
        Self::rng(config.radius, velocity_distr, rng)
    }
}

impl<R, RD, VD> ParticleCreator for DistrParticleCreator<R, RD, VD>
where
    R: Rng,
    RD: Distribution<Float>,
    VD: Distribution<Float>,
{
    fn create_particle(&mut self, bounds: &Bounds) -> Particle {
        let rng = &mut self.rng;

        let radius = self.radius_distr.sample(rng);
        let pos = random_position(radius, bounds, rng);
        let vel = Vector2::new(
            self.velocity_distr.sample(rng),
            self.velocity_distr.sample(rng),
        );

        Particle::new(radius, pos, vel)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn particles_start_inside_bounds() {
        let bounds = Bounds::new(1280., 720.);
        let config = FieldConfig::push();
        let mut pc = DistrParticleCreator::from_config(&config, StdRng::seed_from_u64(0));

        let particles = pc.create_particles(config.num_particles, &bounds);

        assert_eq!(particles.len(), 300);
        for par in &particles {
            assert!(bounds.contains(par));
            assert!((1. ..=10.).contains(&par.radius()));
            assert!(par.velocity().iter().all(|v| (-0.5..0.5).contains(v)));
            assert_eq!(*par.displacement(), Vector2::zeros());
        }
    }

    #[test]
    fn fixed_radius() {
        let bounds = Bounds::new(300., 300.);
        let mut pc = DistrParticleCreator::from_config(&FieldConfig::pull(), StdRng::seed_from_u64(3));

        assert!(pc
            .create_particles(50, &bounds)
            .iter()
            .all(|par| par.radius() == 2.));
    }

    #[test]
    fn zero_speed_gives_still_particles() {
        let bounds = Bounds::new(300., 300.);
        let config = FieldConfig::drift().max_speed(0.);
        let mut pc = DistrParticleCreator::from_config(&config, StdRng::seed_from_u64(4));

        let par = pc.create_particle(&bounds);

        assert_eq!(*par.velocity(), Vector2::zeros());
    }
}
