//! Emitter configuration (built in code or parsed from TOML)

use crate::image::ImageSpec;
use crate::range::Range;
use ember_core::{EmberError, Result};
use std::path::Path;

/// Where a particle's sampled start point sits on its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// The sampled point is the centre of the box
    #[default]
    Center,
    /// The sampled point is the top-left corner of the box
    TopLeft,
}

/// Immutable description of one particle animation run.
///
/// Start positions are fractions of the draw area; speeds are px/s,
/// accelerations px/s², angles and rotations degrees, times milliseconds.
/// An angle of 0° moves along +Y (down), 90° along +X (right).
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    pub images: Vec<ImageSpec>,
    pub start_x: Range<f32>,
    pub start_y: Range<f32>,
    pub speed: Range<f32>,
    pub accel_x: Range<f32>,
    pub accel_y: Range<f32>,
    pub angle: Range<i32>,
    pub rotation: Range<i32>,
    pub rotation_speed: Range<f32>,
    pub particle_duration_ms: u64,
    pub fade_out_duration_ms: u64,
    pub particles_per_second: u32,
    pub duration_ms: u64,
    /// Display density multiplier applied to image sizes
    pub density: f32,
    pub anchor: Anchor,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            start_x: Range::new_unchecked(0.0, 1.0),
            start_y: Range::new_unchecked(0.0, 1.0),
            speed: Range::new_unchecked(500.0, 1000.0),
            accel_x: Range::constant(0.0),
            accel_y: Range::constant(0.0),
            angle: Range::new_unchecked(0, 360),
            rotation: Range::new_unchecked(0, 360),
            rotation_speed: Range::constant(0.0),
            particle_duration_ms: 1500,
            fade_out_duration_ms: 1500,
            particles_per_second: 5,
            duration_ms: 5000,
            density: 1.0,
            anchor: Anchor::Center,
        }
    }
}

impl EmitterConfig {
    /// Full life of one particle: opaque lifetime plus fade-out
    pub fn particle_total_ms(&self) -> u64 {
        self.particle_duration_ms
            .saturating_add(self.fade_out_duration_ms)
    }

    /// Milliseconds between two emissions
    pub fn emission_interval_ms(&self) -> u64 {
        1000 / u64::from(self.particles_per_second.max(1))
    }

    /// Emission stops at this elapsed time so the last particle finishes
    /// fading by `duration_ms`.
    pub fn emission_window_ms(&self) -> u64 {
        self.duration_ms.saturating_sub(self.particle_total_ms())
    }

    /// Checks everything `Range` construction cannot, including
    /// non-finite bounds passed to `Range::constant`.
    pub fn validate(&self) -> Result<()> {
        if self.images.is_empty() {
            return Err(EmberError::EmptyImageSet);
        }
        for image in &self.images {
            if image.size == 0 {
                return Err(EmberError::invalid_value(
                    format!("images[{}].size", image.id),
                    "must be greater than zero",
                ));
            }
            if !(image.aspect_ratio.is_finite() && image.aspect_ratio > 0.0) {
                return Err(EmberError::invalid_value(
                    format!("images[{}].aspect_ratio", image.id),
                    format!("must be a positive number, got {}", image.aspect_ratio),
                ));
            }
        }
        if self.particles_per_second == 0 {
            return Err(EmberError::invalid_value(
                "particles_per_second",
                "must be greater than zero",
            ));
        }
        if self.particles_per_second > 1000 {
            return Err(EmberError::invalid_value(
                "particles_per_second",
                format!(
                    "at most one particle per millisecond, got {}",
                    self.particles_per_second
                ),
            ));
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(EmberError::invalid_value(
                "density",
                format!("must be a positive number, got {}", self.density),
            ));
        }
        if self
            .particle_duration_ms
            .checked_add(self.fade_out_duration_ms)
            .is_none()
        {
            return Err(EmberError::invalid_value(
                "fade_out_duration_ms",
                "particle lifetime plus fade-out overflows",
            ));
        }
        for (field, range) in [
            ("start_x", &self.start_x),
            ("start_y", &self.start_y),
            ("speed", &self.speed),
            ("accel_x", &self.accel_x),
            ("accel_y", &self.accel_y),
            ("rotation_speed", &self.rotation_speed),
        ] {
            if !range.is_finite() {
                return Err(EmberError::invalid_value(
                    field,
                    format!("bounds must be finite, got [{}, {}]", range.min(), range.max()),
                ));
            }
        }
        Ok(())
    }

    /// Parse an EmitterConfig from a TOML table.
    ///
    /// Missing keys keep their defaults; ranges may be written as a scalar
    /// or a `[min, max]` pair. Inverted ranges and malformed images fail.
    pub fn from_toml(table: &toml::value::Table) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = table.get("images") {
            let arr = v.as_array().ok_or_else(|| {
                EmberError::invalid_value("images", "expected an array of image tables")
            })?;
            config.images = arr
                .iter()
                .cloned()
                .map(|img| {
                    img.try_into::<ImageSpec>()
                        .map_err(|e| EmberError::invalid_value("images", e.to_string()))
                })
                .collect::<Result<Vec<_>>>()?;
        }
        if let Some(v) = table.get("start_x") {
            config.start_x = toml_range_f32("start_x", v)?;
        }
        if let Some(v) = table.get("start_y") {
            config.start_y = toml_range_f32("start_y", v)?;
        }
        if let Some(v) = table.get("speed") {
            config.speed = toml_range_f32("speed", v)?;
        }
        if let Some(v) = table.get("accel_x") {
            config.accel_x = toml_range_f32("accel_x", v)?;
        }
        if let Some(v) = table.get("accel_y") {
            config.accel_y = toml_range_f32("accel_y", v)?;
        }
        if let Some(v) = table.get("angle") {
            config.angle = toml_range_i32("angle", v)?;
        }
        if let Some(v) = table.get("rotation") {
            config.rotation = toml_range_i32("rotation", v)?;
        }
        if let Some(v) = table.get("rotation_speed") {
            config.rotation_speed = toml_range_f32("rotation_speed", v)?;
        }
        if let Some(v) = table.get("particle_duration") {
            config.particle_duration_ms = toml_u64("particle_duration", v)?;
        }
        if let Some(v) = table.get("fade_out_duration") {
            config.fade_out_duration_ms = toml_u64("fade_out_duration", v)?;
        }
        if let Some(v) = table.get("particles_per_second") {
            let n = toml_u64("particles_per_second", v)?;
            config.particles_per_second = u32::try_from(n).map_err(|_| {
                EmberError::invalid_value("particles_per_second", format!("{n} is too large"))
            })?;
        }
        if let Some(v) = table.get("duration") {
            config.duration_ms = toml_u64("duration", v)?;
        }
        if let Some(v) = table.get("density") {
            config.density = toml_f32("density", v)?;
        }
        if let Some(v) = table.get("anchor") {
            config.anchor = match v.as_str() {
                Some("center") => Anchor::Center,
                Some("top_left") => Anchor::TopLeft,
                _ => {
                    return Err(EmberError::invalid_value(
                        "anchor",
                        format!("expected \"center\" or \"top_left\", got {v}"),
                    ))
                }
            };
        }

        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let table: toml::value::Table = toml::from_str(s)?;
        Self::from_toml(&table)
    }

    /// Read and parse an emitter file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f32(field: &str, v: &toml::Value) -> Result<f32> {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .filter(|f| f.is_finite())
        .ok_or_else(|| EmberError::invalid_value(field, format!("expected a finite number, got {v}")))
}

fn toml_i32(field: &str, v: &toml::Value) -> Result<i32> {
    let out_of_range = || EmberError::invalid_value(field, format!("expected a 32-bit integer, got {v}"));
    match (v.as_integer(), v.as_float()) {
        (Some(i), _) => i32::try_from(i).map_err(|_| out_of_range()),
        (None, Some(f)) if f.is_finite() && f >= i32::MIN as f64 && f <= i32::MAX as f64 => {
            Ok(f as i32)
        }
        _ => Err(out_of_range()),
    }
}

fn toml_u64(field: &str, v: &toml::Value) -> Result<u64> {
    let invalid = || EmberError::invalid_value(field, format!("expected a non-negative integer, got {v}"));
    match (v.as_integer(), v.as_float()) {
        (Some(i), _) => u64::try_from(i).map_err(|_| invalid()),
        (None, Some(f)) if f.is_finite() && f >= 0.0 => Ok(f as u64),
        _ => Err(invalid()),
    }
}

fn toml_range_f32(field: &str, v: &toml::Value) -> Result<Range<f32>> {
    match v.as_array().map(|arr| arr.as_slice()) {
        Some([min, max]) => Range::named(field, toml_f32(field, min)?, toml_f32(field, max)?),
        Some([value]) => Ok(Range::constant(toml_f32(field, value)?)),
        Some(_) => Err(EmberError::invalid_value(field, "expected a number or a [min, max] pair")),
        None => Ok(Range::constant(toml_f32(field, v)?)),
    }
}

fn toml_range_i32(field: &str, v: &toml::Value) -> Result<Range<i32>> {
    match v.as_array().map(|arr| arr.as_slice()) {
        Some([min, max]) => Range::named(field, toml_i32(field, min)?, toml_i32(field, max)?),
        Some([value]) => Ok(Range::constant(toml_i32(field, value)?)),
        Some(_) => Err(EmberError::invalid_value(field, "expected an integer or a [min, max] pair")),
        None => Ok(Range::constant(toml_i32(field, v)?)),
    }
}
