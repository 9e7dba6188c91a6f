//! Ember Particles - 2D sprite particle emitter
//!
//! Provides a time-stepped emitter with:
//! - Per-particle semi-implicit Euler kinematics, rotation and fade-out
//! - Emission at a fixed rate inside the run's emission window
//! - FIFO pool recycling of retired particles
//! - Bounding-box hit testing and draw delegation to a host surface
//!
//! A host builds a [`ParticleSystem`] from an [`EmitterConfig`], calls
//! `update` once per frame and `draw` whenever it repaints. Images are
//! looked up through an [`ImageProvider`]; particles whose image has not
//! loaded yet are skipped.

pub mod config;
pub mod fade;
pub mod image;
pub mod particle;
pub mod pool;
pub mod random;
pub mod range;
pub mod surface;
pub mod system;

pub use config::{Anchor, EmitterConfig};
pub use image::{ImageCache, ImageHandle, ImageProvider, ImageSpec};
pub use particle::{Lifecycle, Particle};
pub use pool::ParticlePool;
pub use random::ParticleRng;
pub use range::Range;
pub use surface::{CommandBuffer, DrawCommand, DrawSurface};
pub use system::ParticleSystem;
