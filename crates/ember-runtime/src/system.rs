//! Runtime system trait

/// A system that can be ticked by a host frame loop
///
/// The host calls `update` once per animation frame, strictly serialized
/// with drawing. Per-frame work never fails; anything that could go wrong
/// is rejected when the system is built.
pub trait RuntimeSystem {
    /// Advance to `elapsed_ms` since the run started, `delta_ms` after the
    /// previous frame
    fn update(&mut self, elapsed_ms: u64, delta_ms: u64);

    /// Drop all per-run state. Must be safe to call repeatedly, and before
    /// the first update.
    fn shutdown(&mut self);

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
