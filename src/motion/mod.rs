mod drift;
mod pull;
mod push;

pub use drift::*;
pub use pull::*;
pub use push::*;

use std::{fmt, str::FromStr};

use crate::{
    config::FieldConfig, cursor::Cursor, particle::Particle, surface::Surface, Float,
};

/// The extent of the field. Particles move in `[radius, extent - radius]` on each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub width: Float,
    pub height: Float,
}

impl Bounds {
    pub fn new(width: Float, height: Float) -> Self {
        Self { width, height }
    }

    /// Whether the particle keeps at least its radius from every wall.
    pub fn contains(&self, particle: &Particle) -> bool {
        let r = particle.radius();
        let p = particle.position();
        (r..=self.width - r).contains(&p.x) && (r..=self.height - r).contains(&p.y)
    }

    fn extents(&self) -> [Float; 2] {
        [self.width, self.height]
    }
}

/// How a particle advances by one tick.
pub trait Motion {
    /// Integrate one step of `particle` inside `bounds`.
    ///
    /// Policies that react to the cursor may draw a highlight line on `surface`.
    fn integrate<S: Surface + ?Sized>(
        &self,
        particle: &mut Particle,
        bounds: &Bounds,
        cursor: &Cursor,
        surface: &mut S,
    );
}

/// Flip the velocity on every axis where the particle is currently outside its walls.
///
/// The check runs before the move, so a particle may overshoot by up to one
/// velocity step before it turns around.
pub(crate) fn reflect_before_move(particle: &mut Particle, bounds: &Bounds) {
    let r = particle.radius();
    for (axis, extent) in bounds.extents().into_iter().enumerate() {
        let p = particle.position()[axis];
        if p < r || p > extent - r {
            particle.velocity_mut()[axis] *= -1.;
        }
    }
}

/// Clamp the particle back onto its walls after the move and flip the velocity there.
pub(crate) fn clamp_after_move(particle: &mut Particle, bounds: &Bounds) {
    let r = particle.radius();
    for (axis, extent) in bounds.extents().into_iter().enumerate() {
        // too small a field pins the particle at its radius
        let upper = (extent - r).max(r);
        let p = particle.position()[axis];
        if p < r {
            particle.position_mut()[axis] = r;
            particle.velocity_mut()[axis] *= -1.;
        } else if p > upper {
            particle.position_mut()[axis] = upper;
            particle.velocity_mut()[axis] *= -1.;
        }
    }
}

/// One of the three built-in motions, selectable at runtime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Variant {
    Drift(Drift),
    Pull(Pull),
    Push(Push),
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Drift(_) => "drift",
            Variant::Pull(_) => "pull",
            Variant::Push(_) => "push",
        }
    }

    /// The field configuration this motion was designed for.
    #[must_use]
    pub fn config(&self) -> FieldConfig {
        match self {
            Variant::Drift(_) => FieldConfig::drift(),
            Variant::Pull(_) => FieldConfig::pull(),
            Variant::Push(_) => FieldConfig::push(),
        }
    }
}

impl Motion for Variant {
    fn integrate<S: Surface + ?Sized>(
        &self,
        particle: &mut Particle,
        bounds: &Bounds,
        cursor: &Cursor,
        surface: &mut S,
    ) {
        match self {
            Variant::Drift(m) => m.integrate(particle, bounds, cursor, surface),
            Variant::Pull(m) => m.integrate(particle, bounds, cursor, surface),
            Variant::Push(m) => m.integrate(particle, bounds, cursor, surface),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drift" => Ok(Variant::Drift(Drift)),
            "pull" => Ok(Variant::Pull(Pull::default())),
            "push" => Ok(Variant::Push(Push::default())),
            _ => Err(ParseVariantError::Unknown(s.to_owned())),
        }
    }
}

/// Errors that can occur when naming a variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseVariantError {
    /// The name matches none of `drift`, `pull`, `push`.
    Unknown(String),
}

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseVariantError::Unknown(name) => write!(
                f,
                "unknown variant {name:?}, expected one of \"drift\", \"pull\", \"push\""
            ),
        }
    }
}

impl std::error::Error for ParseVariantError {}
