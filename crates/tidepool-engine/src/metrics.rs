//! Per-step performance metrics for the driver.
//!
//! [`StepMetrics`] captures timing and command counts for one sub-step,
//! or the sum over every sub-step of one `advance` call.

/// Timing and command metrics.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole sub-step.
    pub total_us: u64,
    /// Time spent draining and applying queued commands.
    pub command_processing_us: u64,
    /// Time spent ticking every field.
    pub field_tick_us: u64,
    /// Time spent running body physics.
    pub body_physics_us: u64,
    /// Commands that reached their field and were applied.
    pub commands_applied: u32,
    /// Commands refused at the channel or rejected by their field.
    pub commands_rejected: u32,
    /// Bodies that ran physics (ready bodies).
    pub active_bodies: u32,
}

impl StepMetrics {
    /// Add `other` into `self`.
    pub fn accumulate(&mut self, other: &StepMetrics) {
        self.total_us += other.total_us;
        self.command_processing_us += other.command_processing_us;
        self.field_tick_us += other.field_tick_us;
        self.body_physics_us += other.body_physics_us;
        self.commands_applied += other.commands_applied;
        self.commands_rejected += other.commands_rejected;
        self.active_bodies += other.active_bodies;
    }
}
