//! Emission scheduling and the active particle set

use crate::config::EmitterConfig;
use crate::image::{ImageProvider, ImageSpec};
use crate::particle::{Lifecycle, Particle};
use crate::pool::ParticlePool;
use crate::random::ParticleRng;
use crate::surface::DrawSurface;
use ember_core::{Result, Size};
use ember_runtime::RuntimeSystem;

/// Emits, advances, draws and retires the particles of one animation run.
///
/// Single-threaded: the host serializes `update` and `draw` once per frame.
#[derive(Debug)]
pub struct ParticleSystem {
    config: EmitterConfig,
    rng: ParticleRng,
    draw_area: Size,
    /// Alive particles in emission order
    particles: Vec<Particle>,
    pool: ParticlePool,
    /// Indices into `particles` that expired during the current update pass
    to_remove: Vec<usize>,
    /// Milliseconds accumulated toward the next emission
    since_emit_ms: u64,
}

impl ParticleSystem {
    /// Build a system for `config`, drawing all randomness from `rng`.
    ///
    /// Fails on any configuration error; nothing after this can fail.
    pub fn new(config: EmitterConfig, rng: ParticleRng) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "particle system: {} image(s), one particle every {} ms, emitting until {} ms",
            config.images.len(),
            config.emission_interval_ms(),
            config.emission_window_ms()
        );
        Ok(Self {
            config,
            rng,
            draw_area: Size::ZERO,
            particles: Vec::new(),
            pool: ParticlePool::new(),
            to_remove: Vec::new(),
            since_emit_ms: 0,
        })
    }

    /// Convenience constructor with a seeded random source
    pub fn with_seed(config: EmitterConfig, seed: u64) -> Result<Self> {
        Self::new(config, ParticleRng::new(seed))
    }

    /// Advance the run to `elapsed_ms`, `delta_ms` after the previous frame.
    ///
    /// Emits at most one particle per call, advances every active particle,
    /// then moves the ones that expired into the pool in one batch.
    pub fn update(&mut self, elapsed_ms: u64, delta_ms: u64) {
        if elapsed_ms < self.config.emission_window_ms() {
            let interval = self.config.emission_interval_ms();
            self.since_emit_ms = self.since_emit_ms.saturating_add(delta_ms);
            if self.since_emit_ms >= interval {
                self.emit();
                // Keep the partial remainder; whole missed intervals are dropped
                self.since_emit_ms = (self.since_emit_ms - interval) % interval;
            }
        }

        for (index, particle) in self.particles.iter_mut().enumerate() {
            if particle.update(delta_ms) == Lifecycle::Expired {
                self.to_remove.push(index);
            }
        }

        self.reap();
    }

    fn emit(&mut self) {
        let (particle, recycled) = self.pool.acquire(&self.config, self.draw_area, &mut self.rng);
        log::trace!(
            "spawned particle {} ({})",
            particle.id(),
            if recycled { "recycled" } else { "new" }
        );
        self.particles.push(particle);
    }

    /// Move expired particles to the pool, keeping the survivors' order.
    fn reap(&mut self) {
        if self.to_remove.is_empty() {
            return;
        }
        log::trace!("retiring {} particle(s)", self.to_remove.len());

        let mut expired = self.to_remove.iter().copied().peekable();
        let mut kept = Vec::with_capacity(self.particles.len() - self.to_remove.len());
        for (index, particle) in self.particles.drain(..).enumerate() {
            if expired.peek() == Some(&index) {
                expired.next();
                self.pool.release(particle);
            } else {
                kept.push(particle);
            }
        }
        self.particles = kept;
        self.to_remove.clear();
    }

    /// Draw every active particle in emission order
    pub fn draw<P, S>(&self, images: &P, surface: &mut S)
    where
        P: ImageProvider + ?Sized,
        S: DrawSurface + ?Sized,
    {
        for particle in &self.particles {
            particle.draw(images, surface);
        }
    }

    /// First active particle whose bounding box contains the point
    pub fn hit_test(&self, x: f32, y: f32) -> Option<&Particle> {
        self.particles.iter().find(|p| p.contains_point(x, y))
    }

    /// The configured image (and its tag) a particle was spawned with
    pub fn image_of(&self, particle: &Particle) -> Option<&ImageSpec> {
        self.config.images.get(particle.image_index())
    }

    /// Drop active, pooled and pending particles. Idempotent.
    pub fn release(&mut self) {
        if !self.particles.is_empty() || !self.pool.is_empty() {
            log::debug!(
                "releasing {} active and {} pooled particle(s)",
                self.particles.len(),
                self.pool.len()
            );
        }
        self.particles.clear();
        self.pool.clear();
        self.to_remove.clear();
        self.since_emit_ms = 0;
    }

    /// Size used to resolve start fractions of future spawns
    pub fn set_draw_area(&mut self, width: u32, height: u32) {
        self.draw_area = Size::new(width, height);
    }

    pub fn draw_area(&self) -> Size {
        self.draw_area
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn active_count(&self) -> usize {
        self.particles.len()
    }

    pub fn pooled_count(&self) -> usize {
        self.pool.len()
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn emission_interval_ms(&self) -> u64 {
        self.config.emission_interval_ms()
    }
}

impl RuntimeSystem for ParticleSystem {
    fn update(&mut self, elapsed_ms: u64, delta_ms: u64) {
        ParticleSystem::update(self, elapsed_ms, delta_ms);
    }

    fn shutdown(&mut self) {
        self.release();
    }

    fn name(&self) -> &str {
        "particles"
    }
}
