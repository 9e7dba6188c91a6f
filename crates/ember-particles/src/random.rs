//! Seedable random source for particle sampling

use ember_core::{EmberError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source owned by a particle system.
///
/// Every attribute of every spawn draws an independent sample from here, so
/// two systems built with the same seed and driven by the same frames
/// produce identical particles.
#[derive(Debug)]
pub struct ParticleRng {
    inner: StdRng,
}

impl ParticleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from the operating system, for non-reproducible runs
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Returns a float in [from, until), or `from` exactly when the bounds match.
    pub fn range_f32(&mut self, from: f32, until: f32) -> Result<f32> {
        if from > until || from.is_nan() || until.is_nan() {
            return Err(EmberError::invalid_range("range", from as f64, until as f64));
        }
        Ok(self.range_f32_unchecked(from, until))
    }

    /// Returns an integer in [from, until), or `from` exactly when the bounds match.
    pub fn range_i32(&mut self, from: i32, until: i32) -> Result<i32> {
        if from > until {
            return Err(EmberError::invalid_range("range", from as f64, until as f64));
        }
        Ok(self.range_i32_unchecked(from, until))
    }

    /// Uniform index into a collection of `len` elements
    pub fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            0
        } else {
            self.inner.gen_range(0..len)
        }
    }

    // Callers guarantee `from <= until`.
    pub(crate) fn range_f32_unchecked(&mut self, from: f32, until: f32) -> f32 {
        if from == until {
            from
        } else {
            from + (until - from) * self.next_f32()
        }
    }

    pub(crate) fn range_i32_unchecked(&mut self, from: i32, until: i32) -> i32 {
        if from == until {
            from
        } else {
            self.inner.gen_range(from..until)
        }
    }
}

impl Default for ParticleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_range_bounds() {
        let mut rng = ParticleRng::new(42);
        for _ in 0..1000 {
            let v = rng.range_f32(0.0, 10.0).unwrap();
            assert!((0.0..10.0).contains(&v));
        }
    }

    #[test]
    fn rng_int_range_excludes_upper_bound() {
        let mut rng = ParticleRng::new(7);
        for _ in 0..1000 {
            let v = rng.range_i32(0, 3).unwrap();
            assert!((0..3).contains(&v));
        }
    }

    #[test]
    fn degenerate_range_returns_constant() {
        let mut rng = ParticleRng::new(1);
        for _ in 0..100 {
            assert_eq!(rng.range_f32(0.3, 0.3).unwrap(), 0.3);
            assert_eq!(rng.range_i32(-5, -5).unwrap(), -5);
        }
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut rng = ParticleRng::new(1);
        let err = rng.range_f32(2.0, 1.0).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(rng.range_i32(10, -10).is_err());
        assert!(rng.range_f32(f32::NAN, 1.0).is_err());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ParticleRng::new(99);
        let mut b = ParticleRng::new(99);
        for _ in 0..50 {
            assert_eq!(a.next_f32(), b.next_f32());
            assert_eq!(a.index(17), b.index(17));
        }
    }
}
