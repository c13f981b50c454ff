//! Particles drifting in a bounded box, connected by proximity lines and
//! optionally pulled toward or pushed away from the cursor.
//!
//! A [`ParticleField`] owns a fixed number of [`Particle`]s, the field
//! dimensions and the [`Cursor`]. Every frame the driver calls
//! [`ParticleField::step`] with a [`Surface`] to draw on; pointer and resize
//! events mutate the field between frames.

pub mod config;
pub mod cursor;
pub mod field;
pub mod motion;
pub mod particle;
pub mod particle_creator;
pub mod style;
pub mod surface;
#[cfg(feature = "web")]
pub mod web;

pub use config::{FieldConfig, RadiusDistribution};
pub use cursor::{Cursor, CursorTracking};
pub use field::ParticleField;
pub use motion::{Bounds, Drift, Motion, ParseVariantError, Pull, Push, Variant};
pub use particle::Particle;
pub use surface::{NullSurface, Recorder, Surface};

pub type Float = f64;
