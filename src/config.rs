use rand::Rng;
use rand_distr::Distribution;

use crate::{cursor::CursorTracking, style::Theme, Float};

/// How particle radii are chosen at creation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RadiusDistribution {
    /// Every particle gets the same radius.
    Fixed(Float),
    /// A uniformly random integer radius in `low..=high`.
    UniformInt { low: u32, high: u32 },
}

impl Distribution<Float> for RadiusDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Float {
        match *self {
            RadiusDistribution::Fixed(r) => r,
            RadiusDistribution::UniformInt { low, high } => Float::from(rng.gen_range(low..=high)),
        }
    }
}

/// Everything that shapes a field apart from its motion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub num_particles: usize,
    pub radius: RadiusDistribution,
    /// Each velocity component is drawn from `[-max_speed, max_speed)`.
    pub max_speed: Float,
    /// Particles closer than this are connected by a line.
    pub connect_distance: Float,
    pub cursor_radius: Float,
    pub cursor_tracking: CursorTracking,
    pub theme: Theme,
}

impl FieldConfig {
    /// 100 particles of random size drifting freely.
    pub fn drift() -> Self {
        Self {
            num_particles: 100,
            radius: RadiusDistribution::UniformInt { low: 1, high: 10 },
            max_speed: 0.5,
            connect_distance: 100.,
            cursor_radius: 100.,
            cursor_tracking: CursorTracking::Always,
            theme: Theme::vertical(),
        }
    }

    /// 100 small particles following the hovering cursor.
    pub fn pull() -> Self {
        Self {
            radius: RadiusDistribution::Fixed(2.),
            ..Self::drift()
        }
    }

    /// 300 particles of random size scattered by the pressed cursor.
    pub fn push() -> Self {
        Self {
            num_particles: 300,
            cursor_radius: 150.,
            cursor_tracking: CursorTracking::WhilePressed,
            theme: Theme::diagonal(),
            ..Self::drift()
        }
    }

    #[must_use]
    pub fn num_particles(mut self, num_particles: usize) -> Self {
        self.num_particles = num_particles;
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: RadiusDistribution) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn max_speed(mut self, max_speed: Float) -> Self {
        self.max_speed = max_speed;
        self
    }

    #[must_use]
    pub fn connect_distance(mut self, connect_distance: Float) -> Self {
        self.connect_distance = connect_distance;
        self
    }

    #[must_use]
    pub fn cursor_radius(mut self, cursor_radius: Float) -> Self {
        self.cursor_radius = cursor_radius;
        self
    }

    #[must_use]
    pub fn cursor_tracking(mut self, cursor_tracking: CursorTracking) -> Self {
        self.cursor_tracking = cursor_tracking;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::drift()
    }
}
