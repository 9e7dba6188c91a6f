//! Free list of retired particles awaiting reuse

use crate::config::EmitterConfig;
use crate::particle::Particle;
use crate::random::ParticleRng;
use ember_core::Size;
use std::collections::VecDeque;

/// FIFO recycle bin for particles.
///
/// Released particles keep their stale state until they are acquired
/// again; they must already be out of the active set when released.
/// Growth is unbounded: the live count is capped by rate × lifetime.
#[derive(Debug, Default)]
pub struct ParticlePool {
    free: VecDeque<Particle>,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest retired particle and respawn it, or allocate a new
    /// one when the pool is empty. The flag reports whether it was recycled.
    pub fn acquire(
        &mut self,
        config: &EmitterConfig,
        draw_area: Size,
        rng: &mut ParticleRng,
    ) -> (Particle, bool) {
        match self.free.pop_front() {
            Some(mut particle) => {
                particle.spawn(config, draw_area, rng);
                (particle, true)
            }
            None => (Particle::new(config, draw_area, rng), false),
        }
    }

    pub fn release(&mut self, particle: Particle) {
        self.free.push_back(particle);
    }

    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    pub fn clear(&mut self) {
        self.free.clear();
    }
}
