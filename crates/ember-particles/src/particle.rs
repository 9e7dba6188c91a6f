//! A single emitted particle: kinematics, lifetime clock, fade and drawing

use crate::config::{Anchor, EmitterConfig};
use crate::fade::{alpha_at, OPAQUE};
use crate::image::ImageProvider;
use crate::random::ParticleRng;
use crate::surface::DrawSurface;
use ember_core::{ImageId, ParticleId, Rect, Size, Vec2};

/// Outcome of advancing a particle by one frame
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Alive,
    /// The particle has finished fading; its owner should retire it
    Expired,
}

/// One emitted sprite.
///
/// Velocity, acceleration and rotation speed are sampled once per spawn and
/// never resampled mid-life. Position, velocity and rotation are
/// integrated with semi-implicit Euler: velocity first, then position from
/// the new velocity.
#[derive(Debug, Clone)]
pub struct Particle {
    id: ParticleId,
    image_index: usize,
    image_id: ImageId,
    width: f32,
    height: f32,
    anchor: Anchor,
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    /// Degrees
    rotation: f32,
    /// Degrees per second
    rotation_speed: f32,
    alpha: u8,
    elapsed_ms: u64,
    lifetime_ms: u64,
    fade_out_ms: u64,
}

impl Particle {
    /// Allocate a particle and spawn it against `draw_area`.
    ///
    /// `config` must have passed `EmitterConfig::validate`.
    pub fn new(config: &EmitterConfig, draw_area: Size, rng: &mut ParticleRng) -> Self {
        let mut particle = Self {
            id: ParticleId::new(),
            image_index: 0,
            image_id: ImageId(0),
            width: 0.0,
            height: 0.0,
            anchor: config.anchor,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            rotation: 0.0,
            rotation_speed: 0.0,
            alpha: OPAQUE,
            elapsed_ms: 0,
            lifetime_ms: 0,
            fade_out_ms: 0,
        };
        particle.spawn(config, draw_area, rng);
        particle
    }

    /// Resample every attribute from `config` and restart the lifetime clock.
    ///
    /// Start fractions are resolved against `draw_area` here and nowhere
    /// else, so a later resize does not move live particles.
    pub fn spawn(&mut self, config: &EmitterConfig, draw_area: Size, rng: &mut ParticleRng) {
        self.image_index = rng.index(config.images.len());
        if let Some(image) = config.images.get(self.image_index) {
            let (width, height) = image.display_size(config.density);
            self.image_id = image.id;
            self.width = width;
            self.height = height;
        }
        self.anchor = config.anchor;

        let speed = config.speed.sample(rng);
        let angle = (config.angle.sample(rng) as f64).to_radians();
        self.velocity = Vec2::new(
            speed * angle.sin() as f32,
            speed * angle.cos() as f32,
        );
        self.acceleration = Vec2::new(config.accel_x.sample(rng), config.accel_y.sample(rng));
        self.position = Vec2::new(
            config.start_x.scaled(draw_area.width as f32).sample(rng),
            config.start_y.scaled(draw_area.height as f32).sample(rng),
        );
        self.rotation = config.rotation.sample(rng) as f32;
        self.rotation_speed = config.rotation_speed.sample(rng);

        self.lifetime_ms = config.particle_duration_ms;
        self.fade_out_ms = config.fade_out_duration_ms;
        self.alpha = OPAQUE;
        self.elapsed_ms = 0;
    }

    /// Advance by `delta_ms` and report whether the particle just expired.
    ///
    /// `Expired` is returned exactly once per life, on the update that
    /// crosses `lifetime + fade_out`; the clock is then rewound to zero.
    pub fn update(&mut self, delta_ms: u64) -> Lifecycle {
        let dt = delta_ms as f32;
        self.velocity.x += self.acceleration.x / 1000.0 * dt;
        self.velocity.y += self.acceleration.y / 1000.0 * dt;
        self.position.x += self.velocity.x / 1000.0 * dt;
        self.position.y += self.velocity.y / 1000.0 * dt;
        self.rotation += self.rotation_speed / 1000.0 * dt;
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);

        self.alpha = alpha_at(self.elapsed_ms, self.lifetime_ms, self.fade_out_ms);

        if self.elapsed_ms >= self.lifetime_ms.saturating_add(self.fade_out_ms) {
            self.elapsed_ms = 0;
            return Lifecycle::Expired;
        }
        Lifecycle::Alive
    }

    /// Draw through `surface`, or do nothing while the image is pending.
    pub fn draw<P, S>(&self, images: &P, surface: &mut S)
    where
        P: ImageProvider + ?Sized,
        S: DrawSurface + ?Sized,
    {
        let Some(handle) = images.resolve(self.image_id) else {
            log::trace!("image {} not ready, skipping particle {}", self.image_id, self.id);
            return;
        };
        if handle.width == 0 || handle.height == 0 {
            return;
        }
        let origin = self.origin();
        let (pivot_x, pivot_y) = (self.width / 2.0, self.height / 2.0);
        // Stretch the bitmap onto the hit box, axis by axis
        let sx = self.width / handle.width as f32;
        let sy = self.height / handle.height as f32;

        surface.save();
        surface.translate(origin.x, origin.y);
        surface.rotate(self.rotation, pivot_x, pivot_y);
        surface.scale(sx, sy, pivot_x, pivot_y);
        surface.draw_image(handle, 0.0, 0.0, self.alpha);
        surface.restore();
    }

    /// Bounding-box hit test, inclusive on every edge
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.bounds().contains(x, y)
    }

    /// Current screen-space bounding box (ignores rotation)
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.width, self.height)
    }

    fn origin(&self) -> Vec2 {
        match self.anchor {
            Anchor::Center => Vec2::new(
                self.position.x - self.width / 2.0,
                self.position.y - self.height / 2.0,
            ),
            Anchor::TopLeft => self.position,
        }
    }

    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn image_id(&self) -> ImageId {
        self.image_id
    }

    /// Index of the particle's image within the emitter's image set
    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
