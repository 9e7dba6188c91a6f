//! Ember Runtime - Frame loop plumbing for particle animations
//!
//! Provides the building blocks a host needs to drive an Ember system:
//! - `FrameClock` — converts frame timestamps into elapsed/delta pairs
//! - `RuntimeSystem` — trait for systems ticked once per frame
//! - `Animation` — start/pause/resume/cancel playback over a fixed duration

mod animation;
mod clock;
mod system;

pub use animation::{Animation, PlaybackState};
pub use clock::FrameClock;
pub use system::RuntimeSystem;
