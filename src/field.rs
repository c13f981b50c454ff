use nalgebra::Vector2;
use rand::{rngs::ThreadRng, Rng};

use crate::{
    config::FieldConfig,
    cursor::Cursor,
    motion::{Bounds, Motion},
    particle::Particle,
    particle_creator::{DistrParticleCreator, ParticleCreator},
    style::Theme,
    surface::Surface,
    Float,
};

/// A fixed set of particles moving inside a resizable box.
///
/// The number of particles never changes after construction.
#[derive(Clone, Debug)]
pub struct ParticleField<M: Motion, R: Rng = ThreadRng> {
    bounds: Bounds,
    particles: Vec<Particle>,
    cursor: Cursor,
    motion: M,
    connect_distance: Float,
    theme: Theme,
    rng: R,
}

impl<M: Motion> ParticleField<M, ThreadRng> {
    pub fn new(width: Float, height: Float, config: FieldConfig, motion: M) -> Self {
        Self::with_rng(width, height, config, motion, rand::thread_rng())
    }
}

impl<M: Motion, R: Rng> ParticleField<M, R> {
    /// Create `config.num_particles` randomized particles inside `width` x `height`.
    pub fn with_rng(width: Float, height: Float, config: FieldConfig, motion: M, mut rng: R) -> Self {
        let bounds = Bounds::new(width, height);
        let particles = DistrParticleCreator::from_config(&config, &mut rng)
            .create_particles(config.num_particles, &bounds);

        Self::from_particles(width, height, particles, config, motion, rng)
    }

    /// Use the given particles as they are. `config.num_particles` is ignored.
    pub fn from_particles(
        width: Float,
        height: Float,
        particles: Vec<Particle>,
        config: FieldConfig,
        motion: M,
        rng: R,
    ) -> Self {
        Self {
            bounds: Bounds::new(width, height),
            particles,
            cursor: Cursor::new(config.cursor_radius).tracking(config.cursor_tracking),
            motion,
            connect_distance: config.connect_distance,
            theme: config.theme,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn width(&self) -> Float {
        self.bounds.width
    }

    pub fn height(&self) -> Float {
        self.bounds.height
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn motion(&self) -> &M {
        &self.motion
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn connect_distance(&self) -> Float {
        self.connect_distance
    }

    /// Run one tick: connect nearby particles, then draw and move every particle.
    ///
    /// Lines are computed from the positions before the move, and every
    /// particle is drawn before it moves, so a frame shows one consistent state.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.connect(surface);

        for particle in &mut self.particles {
            particle.draw(surface);
            self.motion
                .integrate(particle, &self.bounds, &self.cursor, surface);
        }
    }

    /// Clear the whole field and run one tick.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear_rect(0., 0., self.bounds.width, self.bounds.height);
        self.step(surface);
    }

    /// Draw a line between every pair of particles closer than the connect distance.
    ///
    /// Scans all pairs `(i, j)` with `j >= i`, which is quadratic in the number
    /// of particles. Returns the number of lines drawn.
    pub fn connect<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        let mut num_lines = 0;
        for (i, p1) in self.particles.iter().enumerate() {
            for (j, p2) in self.particles.iter().enumerate().skip(i) {
                if i == j {
                    continue;
                }
                let distance = (p1.position() - p2.position()).norm();
                if let Some(opacity) = line_opacity(distance, self.connect_distance) {
                    p1.draw_line(surface, p2.position(), opacity);
                    num_lines += 1;
                }
            }
        }
        num_lines
    }

    /// Change the field size and scatter every particle anew inside it.
    ///
    /// Velocities, radii and displacements are kept.
    pub fn resize(&mut self, width: Float, height: Float) {
        self.bounds = Bounds::new(width, height);
        for particle in &mut self.particles {
            particle.reset(&self.bounds, &mut self.rng);
        }
    }

    pub fn pointer_moved(&mut self, x: Float, y: Float) {
        self.cursor.pointer_moved(Vector2::new(x, y));
    }

    pub fn pointer_down(&mut self, x: Float, y: Float) {
        self.cursor.press(Vector2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.cursor.release();
    }
}

/// Opacity of a line between two points `distance` apart, or `None` if they
/// are too far apart to be connected.
pub fn line_opacity(distance: Float, max_distance: Float) -> Option<Float> {
    (distance < max_distance).then(|| 1. - distance / max_distance)
}
