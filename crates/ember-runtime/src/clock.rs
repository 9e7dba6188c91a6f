//! Frame clock turning host frame timestamps into elapsed/delta pairs

/// Tracks animation time from the timestamps a host frame scheduler reports.
///
/// Time only advances between two consecutive ticks, so the first tick and
/// the first tick after a pause contribute nothing.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Total animation time in milliseconds
    pub elapsed_ms: u64,
    /// Time since last frame in milliseconds
    pub delta_ms: u64,
    /// Timestamp of the previous tick
    last_frame_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock to the host timestamp `frame_ms`. Call once per frame.
    ///
    /// Returns the new `(elapsed_ms, delta_ms)`. A timestamp older than the
    /// previous one yields a zero delta.
    pub fn tick(&mut self, frame_ms: u64) -> (u64, u64) {
        self.delta_ms = match self.last_frame_ms {
            Some(last) => frame_ms.saturating_sub(last),
            None => 0,
        };
        self.last_frame_ms = Some(frame_ms);
        self.elapsed_ms += self.delta_ms;
        (self.elapsed_ms, self.delta_ms)
    }

    /// Forget the previous timestamp so time spent paused is not counted
    pub fn pause(&mut self) {
        self.last_frame_ms = None;
        self.delta_ms = 0;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(16_000), (0, 0));
    }

    #[test]
    fn test_accumulates_deltas() {
        let mut clock = FrameClock::new();
        clock.tick(1000);
        assert_eq!(clock.tick(1016), (16, 16));
        assert_eq!(clock.tick(1050), (50, 34));
        assert_eq!(clock.elapsed_ms, 50);
    }

    #[test]
    fn test_pause_skips_gap() {
        let mut clock = FrameClock::new();
        clock.tick(0);
        clock.tick(100);
        clock.pause();
        assert_eq!(clock.tick(5000), (100, 0));
        assert_eq!(clock.tick(5020), (120, 20));
    }

    #[test]
    fn test_backwards_timestamp() {
        let mut clock = FrameClock::new();
        clock.tick(500);
        assert_eq!(clock.tick(400), (0, 0));
        assert_eq!(clock.tick(450), (50, 50));
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        clock.tick(0);
        clock.tick(30);
        clock.reset();
        assert_eq!(clock.elapsed_ms, 0);
        assert_eq!(clock.tick(100), (0, 0));
    }
}
