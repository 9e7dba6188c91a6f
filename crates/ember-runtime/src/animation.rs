//! Playback controller — runs a system for a fixed duration.
//!
//! The host forwards each frame timestamp to [`Animation::on_frame`]; the
//! controller converts it into elapsed/delta time, ticks the system, and
//! tears the system down when the run completes or is cancelled.

use crate::clock::FrameClock;
use crate::system::RuntimeSystem;

/// Where an animation is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Created but not started.
    Idle,
    /// Ticking on every frame.
    Running,
    /// Frames are ignored and paused time is not counted.
    Paused,
    /// Reached its duration.
    Finished,
    /// Stopped early by `cancel`.
    Cancelled,
}

impl PlaybackState {
    /// True once the run is over, either way.
    pub fn is_ended(&self) -> bool {
        matches!(self, PlaybackState::Finished | PlaybackState::Cancelled)
    }
}

/// Drives one [`RuntimeSystem`] from host frame timestamps.
pub struct Animation<S: RuntimeSystem> {
    system: S,
    clock: FrameClock,
    duration_ms: u64,
    state: PlaybackState,
    on_end: Option<Box<dyn FnMut()>>,
}

impl<S: RuntimeSystem> Animation<S> {
    pub fn new(system: S, duration_ms: u64) -> Self {
        Self {
            system,
            clock: FrameClock::new(),
            duration_ms,
            state: PlaybackState::Idle,
            on_end: None,
        }
    }

    /// Callback fired once when a run finishes or is cancelled
    pub fn with_on_end(mut self, on_end: impl FnMut() + 'static) -> Self {
        self.on_end = Some(Box::new(on_end));
        self
    }

    /// Start a fresh run, discarding whatever the previous run left behind.
    pub fn start(&mut self) {
        self.system.shutdown();
        self.clock.reset();
        self.state = PlaybackState::Running;
        log::debug!(
            "[{}] animation started ({} ms)",
            self.system.name(),
            self.duration_ms
        );
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Running {
            self.clock.pause();
            self.state = PlaybackState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.state = PlaybackState::Running;
        }
    }

    pub fn cancel(&mut self) {
        if matches!(self.state, PlaybackState::Running | PlaybackState::Paused) {
            self.end(PlaybackState::Cancelled);
        }
    }

    /// Feed one host frame. Ignored unless running.
    pub fn on_frame(&mut self, frame_ms: u64) -> PlaybackState {
        if self.state != PlaybackState::Running {
            return self.state;
        }
        let (elapsed_ms, delta_ms) = self.clock.tick(frame_ms);
        self.system.update(elapsed_ms, delta_ms);
        if elapsed_ms >= self.duration_ms {
            self.end(PlaybackState::Finished);
        }
        self.state
    }

    fn end(&mut self, state: PlaybackState) {
        self.system.shutdown();
        self.state = state;
        log::debug!(
            "[{}] animation {:?} at {} ms",
            self.system.name(),
            state,
            self.clock.elapsed_ms
        );
        if let Some(on_end) = self.on_end.as_mut() {
            on_end();
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Paused
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.clock.elapsed_ms
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn system_mut(&mut self) -> &mut S {
        &mut self.system
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        updates: Vec<(u64, u64)>,
        shutdowns: u32,
    }

    impl RuntimeSystem for Recorder {
        fn update(&mut self, elapsed_ms: u64, delta_ms: u64) {
            self.updates.push((elapsed_ms, delta_ms));
        }

        fn shutdown(&mut self) {
            self.shutdowns += 1;
        }

        fn name(&self) -> &str {
            "recorder"
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn idle_ignores_frames() {
        let mut anim = Animation::new(Recorder::default(), 100);
        assert_eq!(anim.on_frame(10), PlaybackState::Idle);
        assert!(anim.system().updates.is_empty());
    }

    #[test]
    fn runs_until_duration_then_ends_once() {
        let (ended, on_end) = counter();
        let mut anim = Animation::new(Recorder::default(), 100).with_on_end(on_end);
        anim.start();

        assert_eq!(anim.on_frame(1000), PlaybackState::Running);
        assert_eq!(anim.on_frame(1050), PlaybackState::Running);
        assert_eq!(anim.on_frame(1100), PlaybackState::Finished);
        assert_eq!(anim.on_frame(1150), PlaybackState::Finished);

        assert_eq!(
            anim.system().updates,
            vec![(0, 0), (50, 50), (100, 50)]
        );
        assert_eq!(ended.get(), 1);
        // One shutdown on start, one on finish
        assert_eq!(anim.system().shutdowns, 2);
    }

    #[test]
    fn pause_does_not_count_paused_time() {
        let mut anim = Animation::new(Recorder::default(), 1000);
        anim.start();
        anim.on_frame(0);
        anim.on_frame(40);
        anim.pause();
        assert!(anim.is_paused());
        assert_eq!(anim.on_frame(500), PlaybackState::Paused);
        anim.resume();
        assert!(anim.is_running());
        anim.on_frame(3000);
        anim.on_frame(3020);
        assert_eq!(anim.elapsed_ms(), 60);
        assert_eq!(anim.system().updates.last(), Some(&(60, 20)));
    }

    #[test]
    fn cancel_fires_end_and_shuts_down() {
        let (ended, on_end) = counter();
        let mut anim = Animation::new(Recorder::default(), 1000).with_on_end(on_end);
        anim.start();
        anim.on_frame(0);
        anim.cancel();
        assert_eq!(anim.state(), PlaybackState::Cancelled);
        assert!(anim.state().is_ended());
        anim.cancel();
        assert_eq!(ended.get(), 1);
        assert_eq!(anim.system().shutdowns, 2);
    }

    #[test]
    fn restart_after_finish() {
        let (ended, on_end) = counter();
        let mut anim = Animation::new(Recorder::default(), 10).with_on_end(on_end);
        anim.start();
        anim.on_frame(0);
        anim.on_frame(10);
        assert_eq!(anim.state(), PlaybackState::Finished);

        anim.start();
        assert_eq!(anim.elapsed_ms(), 0);
        assert_eq!(anim.on_frame(500), PlaybackState::Running);
        anim.on_frame(510);
        assert_eq!(ended.get(), 2);
    }
}
