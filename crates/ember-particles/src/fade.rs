//! Opacity over a particle's life: opaque, then a linear fade to zero

/// Fully opaque alpha
pub const OPAQUE: u8 = 255;

/// Linear interpolation between two floats
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Alpha after `elapsed_ms` of a particle that stays opaque for
/// `lifetime_ms` and then fades out over `fade_out_ms`.
///
/// The faded value is truncated toward zero, so halfway through the fade
/// gives 127. With no fade-out the particle disappears at `lifetime_ms`.
pub fn alpha_at(elapsed_ms: u64, lifetime_ms: u64, fade_out_ms: u64) -> u8 {
    if elapsed_ms < lifetime_ms {
        return OPAQUE;
    }
    let into_fade = elapsed_ms - lifetime_ms;
    if into_fade >= fade_out_ms {
        return 0;
    }
    let t = into_fade as f32 / fade_out_ms as f32;
    lerp_f32(OPAQUE as f32, 0.0, t).clamp(0.0, OPAQUE as f32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_f32_endpoints() {
        assert!((lerp_f32(0.0, 10.0, 0.0) - 0.0).abs() < 1e-6);
        assert!((lerp_f32(0.0, 10.0, 1.0) - 10.0).abs() < 1e-6);
        assert!((lerp_f32(0.0, 10.0, 0.5) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn opaque_until_lifetime() {
        assert_eq!(alpha_at(0, 500, 200), 255);
        assert_eq!(alpha_at(499, 500, 200), 255);
        assert_eq!(alpha_at(500, 500, 200), 255);
    }

    #[test]
    fn fade_truncates() {
        assert_eq!(alpha_at(600, 500, 200), 127);
        assert_eq!(alpha_at(1250, 1000, 500), 127);
        assert_eq!(alpha_at(699, 500, 200), 1);
    }

    #[test]
    fn zero_at_and_after_end() {
        assert_eq!(alpha_at(700, 500, 200), 0);
        assert_eq!(alpha_at(10_000, 500, 200), 0);
    }

    #[test]
    fn no_fade_out_drops_to_zero() {
        assert_eq!(alpha_at(499, 500, 0), 255);
        assert_eq!(alpha_at(500, 500, 0), 0);
    }
}
