//! Ember Core - Foundational types for the Ember particle engine
//!
//! This crate provides the core types that the other Ember crates depend on:
//! - `ImageId`, `ParticleId` - Resource and instance identifiers
//! - `Vec2`, `Size`, `Rect` - Planar types
//! - Error types and Result alias

mod error;
mod id;
mod types;

pub use error::{EmberError, Result};
pub use id::{ImageId, ParticleId};
pub use types::{Rect, Size, Vec2};
