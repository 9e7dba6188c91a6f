//! Validated `[min, max)` ranges for emitter attributes

use crate::random::ParticleRng;
use ember_core::{EmberError, Result};

/// A numeric type that a [`Range`] can be sampled over
pub trait RangeValue: Copy + PartialOrd + std::fmt::Debug {
    fn is_ordered(min: Self, max: Self) -> bool;
    fn to_f64(self) -> f64;
    fn sample(rng: &mut ParticleRng, min: Self, max: Self) -> Self;
}

impl RangeValue for f32 {
    fn is_ordered(min: Self, max: Self) -> bool {
        min <= max
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn sample(rng: &mut ParticleRng, min: Self, max: Self) -> Self {
        rng.range_f32_unchecked(min, max)
    }
}

impl RangeValue for i32 {
    fn is_ordered(min: Self, max: Self) -> bool {
        min <= max
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn sample(rng: &mut ParticleRng, min: Self, max: Self) -> Self {
        rng.range_i32_unchecked(min, max)
    }
}

/// An inclusive-exclusive range whose bounds are known to be ordered.
///
/// A constant is expressed as `min == max` and always samples to exactly
/// that value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range<T> {
    min: T,
    max: T,
}

impl<T: RangeValue> Range<T> {
    /// Fails with `InvalidRange` when `min > max` (or either bound is NaN)
    pub fn new(min: T, max: T) -> Result<Self> {
        Self::named("range", min, max)
    }

    /// Like `new`, but reports `field` in the error
    pub fn named(field: &str, min: T, max: T) -> Result<Self> {
        if !T::is_ordered(min, max) {
            return Err(EmberError::invalid_range(field, min.to_f64(), max.to_f64()));
        }
        Ok(Self { min, max })
    }

    /// Unchecked: a NaN or infinite constant is caught later by
    /// `EmitterConfig::validate`.
    pub const fn constant(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub(crate) const fn new_unchecked(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn is_constant(&self) -> bool {
        self.min == self.max
    }

    pub fn sample(&self, rng: &mut ParticleRng) -> T {
        T::sample(rng, self.min, self.max)
    }
}

impl Range<f32> {
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Scales both bounds, e.g. to resolve draw-area fractions into pixels.
    /// A non-negative factor keeps the bounds ordered.
    pub fn scaled(&self, factor: f32) -> Self {
        let (a, b) = (self.min * factor, self.max * factor);
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_range_has_no_jitter() {
        let mut rng = ParticleRng::new(3);
        let r = Range::constant(12.5f32);
        assert!(r.is_constant());
        for _ in 0..100 {
            assert_eq!(r.sample(&mut rng), 12.5);
        }
        let r = Range::new(30, 30).unwrap();
        assert_eq!(r.sample(&mut rng), 30);
    }

    #[test]
    fn inverted_range_is_configuration_error() {
        let err = Range::named("speed", 10.0f32, 1.0).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("speed"));
        assert!(Range::new(5, 4).is_err());
        assert!(Range::new(f32::NAN, 1.0).is_err());
    }

    #[test]
    fn non_finite_constant_is_reported() {
        assert!(!Range::constant(f32::NAN).is_finite());
        assert!(!Range::constant(f32::NEG_INFINITY).is_finite());
        assert!(Range::new(-1.0f32, 1.0).unwrap().is_finite());
    }

    #[test]
    fn samples_stay_in_half_open_interval() {
        let mut rng = ParticleRng::new(11);
        let r = Range::new(0, 360).unwrap();
        let f = Range::new(-1.0f32, 1.0).unwrap();
        for _ in 0..1000 {
            let v = r.sample(&mut rng);
            assert!((0..360).contains(&v));
            let v = f.sample(&mut rng);
            assert!((-1.0..1.0).contains(&v));
        }
    }

    #[test]
    fn scaled_resolves_fractions() {
        let r = Range::new(0.25f32, 0.5).unwrap().scaled(400.0);
        assert_eq!(r.min(), 100.0);
        assert_eq!(r.max(), 200.0);
        let zero = Range::new(0.0f32, 1.0).unwrap().scaled(0.0);
        assert!(zero.is_constant());
    }
}
