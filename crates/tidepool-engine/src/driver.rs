//! Lockstep simulation driver.
//!
//! [`SimulationDriver`] is the user-facing API for running a scene. Each
//! sub-step drains pending disturbances, ticks every field, and then runs
//! physics on every body against its freshly ticked field.
//!
//! # Time keeping
//!
//! Simulated time is always `elapsed_steps · dt`, never a running float
//! sum, so it cannot drift relative to the step count. Steps dropped by
//! the catch-up limit still count toward elapsed time.
//!
//! # Ownership model
//!
//! The driver is [`Send`] but every mutating method takes `&mut self`, so
//! a disturbance can never overlap an in-progress tick. Other threads
//! reach it only through a [`DisturbanceSender`].

use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use tidepool_core::{BodyId, Command, FieldId, IngressError, Receipt, StepId, WaveError};
use tidepool_field::hash::{fnv1a_f64s, fnv1a_u64, FNV_OFFSET};

use crate::config::{DriverConfig, StepMode};
use crate::metrics::StepMetrics;
use crate::queue::{DisturbanceQueue, DisturbanceSender};
use crate::scene::Scene;

const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<SimulationDriver>();
    }
};

// ── Results ─────────────────────────────────────────────────────

/// Result of one [`SimulationDriver::step`] call.
#[derive(Clone, Debug, Default)]
pub struct StepResult {
    /// Final receipts for commands drained this sub-step, in arrival order.
    pub receipts: Vec<Receipt>,
    /// Metrics for this sub-step.
    pub metrics: StepMetrics,
}

/// Result of one [`SimulationDriver::advance`] call.
#[derive(Clone, Debug, Default)]
pub struct AdvanceReport {
    /// Sub-steps actually simulated.
    pub steps: u32,
    /// Backlogged sub-steps skipped by the catch-up limit.
    pub dropped_steps: u64,
    /// Receipts from every sub-step, in order.
    pub receipts: Vec<Receipt>,
    /// Metrics summed over every sub-step.
    pub metrics: StepMetrics,
}

// ── SimulationDriver ────────────────────────────────────────────

/// Fixed-`dt` driver for a [`Scene`].
///
/// # Examples
///
/// ```
/// use tidepool_core::{Command, Disturbance};
/// use tidepool_engine::{DriverConfig, Scene, SimulationDriver, StepMode};
/// use tidepool_field::WaveField;
///
/// let mut scene = Scene::new();
/// let pond = scene.add_field("pond", WaveField::builder().build().unwrap()).unwrap();
/// let config = DriverConfig {
///     mode: StepMode::FixedSubsteps(10),
///     ..Default::default()
/// };
/// let mut driver = SimulationDriver::new(scene, config).unwrap();
///
/// let splash = Disturbance::Splash { x: 0.5, y: 0.1, strength: 1.0 };
/// assert!(driver.submit(Command::new(pond, splash)).accepted);
///
/// let report = driver.advance(0.0).unwrap();
/// assert_eq!(report.steps, 10);
/// assert!(report.receipts[0].is_applied());
/// ```
pub struct SimulationDriver {
    scene: Scene,
    config: DriverConfig,
    queue: DisturbanceQueue,
    inbox: Receiver<Command>,
    outbox: Sender<Command>,
    current_step: StepId,
    elapsed_steps: u64,
    last_metrics: StepMetrics,
}

impl SimulationDriver {
    /// Create a driver for `scene`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidConfiguration`] if `config` fails
    /// [`DriverConfig::validate`].
    pub fn new(scene: Scene, config: DriverConfig) -> Result<Self, WaveError> {
        config.validate()?;
        let (outbox, inbox) = crossbeam_channel::bounded(config.max_queue);
        log::debug!(
            "driver: {} fields, {} bodies, dt={}, {:?}",
            scene.field_count(),
            scene.body_count(),
            config.dt,
            config.mode
        );
        Ok(Self {
            queue: DisturbanceQueue::new(config.max_queue),
            scene,
            config,
            inbox,
            outbox,
            current_step: StepId::default(),
            elapsed_steps: 0,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Queue a command for the next sub-step.
    ///
    /// The returned receipt only reports acceptance; the applied receipt
    /// comes back from the sub-step that drains it.
    pub fn submit(&mut self, command: Command) -> Receipt {
        let known = self.scene.contains_field(command.field);
        let receipt = self.queue.submit(command, known);
        if let Some(reason) = &receipt.reason {
            log::warn!("command {} refused: {reason}", receipt.arrival_seq);
        }
        receipt
    }

    /// A handle other threads can use to push commands.
    pub fn sender(&self) -> DisturbanceSender {
        DisturbanceSender::new(self.outbox.clone())
    }

    /// Bring the simulation up to `wall_time` seconds.
    ///
    /// In [`StepMode::CatchUp`] this runs sub-steps while
    /// `wall_time - simulated_time >= dt`, dropping any backlog past the
    /// per-call limit. In [`StepMode::FixedSubsteps`] it runs the fixed
    /// count and `wall_time` is only validated.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidArgument`] if `wall_time` is not finite.
    pub fn advance(&mut self, wall_time: f64) -> Result<AdvanceReport, WaveError> {
        if !wall_time.is_finite() {
            return Err(WaveError::InvalidArgument {
                name: "wall_time",
                value: wall_time,
                expected: "finite",
            });
        }

        let (run, dropped) = match self.config.mode {
            StepMode::FixedSubsteps(k) => (k, 0),
            StepMode::CatchUp {
                max_steps_per_advance,
            } => {
                let due = self.due_steps(wall_time);
                let run = u32::try_from(due.min(u64::from(max_steps_per_advance)))
                    .unwrap_or(max_steps_per_advance);
                (run, due - u64::from(run))
            }
        };

        let mut report = AdvanceReport::default();
        for _ in 0..run {
            let result = self.step()?;
            report.steps += 1;
            report.receipts.extend(result.receipts);
            report.metrics.accumulate(&result.metrics);
        }

        if dropped > 0 {
            self.elapsed_steps = self.elapsed_steps.saturating_add(dropped);
            report.dropped_steps = dropped;
            log::warn!(
                "catch-up limit reached: dropped {dropped} steps ({:.3}s of simulated time)",
                dropped as f64 * self.config.dt
            );
        }
        Ok(report)
    }

    /// Run exactly one sub-step.
    ///
    /// # Errors
    ///
    /// Propagates a field tick failure. With a validated `dt` this does
    /// not happen in practice.
    pub fn step(&mut self) -> Result<StepResult, WaveError> {
        let start = Instant::now();
        let mut metrics = StepMetrics::default();

        let receipts = self.apply_pending(&mut metrics);
        metrics.command_processing_us = start.elapsed().as_micros() as u64;

        let tick_start = Instant::now();
        for field in self.scene.fields_mut() {
            field.tick(self.config.dt)?;
        }
        metrics.field_tick_us = tick_start.elapsed().as_micros() as u64;

        let physics_start = Instant::now();
        metrics.active_bodies = self.scene.run_physics(self.config.dt);
        metrics.body_physics_us = physics_start.elapsed().as_micros() as u64;

        self.current_step = self.current_step.next();
        self.elapsed_steps = self.elapsed_steps.saturating_add(1);
        metrics.total_us = start.elapsed().as_micros() as u64;
        self.last_metrics = metrics.clone();

        Ok(StepResult { receipts, metrics })
    }

    /// Take the queued commands, move channel contents in behind them,
    /// then apply everything to its field in arrival order.
    fn apply_pending(&mut self, metrics: &mut StepMetrics) -> Vec<Receipt> {
        let mut receipts = Vec::new();
        let mut pending = self.queue.drain();

        while let Ok(command) = self.inbox.try_recv() {
            let receipt = self.submit(command);
            if !receipt.accepted {
                metrics.commands_rejected += 1;
                receipts.push(receipt);
            }
        }
        pending.extend(self.queue.drain());

        for queued in pending {
            let Command { field, disturbance } = queued.command;
            let outcome = match self.scene.field_mut(field) {
                Some(f) => f.apply(&disturbance).map_err(IngressError::Rejected),
                None => Err(IngressError::UnknownField { field }),
            };
            let reason = match outcome {
                Ok(()) => {
                    log::trace!(
                        "step {}: {} on field {field} (seq {})",
                        self.current_step,
                        disturbance.kind(),
                        queued.arrival_seq
                    );
                    metrics.commands_applied += 1;
                    None
                }
                Err(e) => {
                    log::warn!(
                        "step {}: {} on field {field} rejected: {e}",
                        self.current_step,
                        disturbance.kind()
                    );
                    metrics.commands_rejected += 1;
                    Some(e)
                }
            };
            receipts.push(Receipt {
                accepted: true,
                applied_step: Some(self.current_step),
                reason,
                arrival_seq: queued.arrival_seq,
            });
        }
        receipts
    }

    /// Number of sub-steps `advance(wall_time)` owes in catch-up mode,
    /// capped so the elapsed step counter cannot overflow.
    fn due_steps(&self, wall_time: f64) -> u64 {
        let dt = self.config.dt;
        let headroom = u64::MAX - self.elapsed_steps;
        let owes = |k: u64| wall_time - (self.elapsed_steps + k) as f64 * dt >= dt;
        if headroom == 0 || !owes(0) {
            return 0;
        }
        let gap = wall_time - self.simulated_time();
        let mut due = ((gap / dt).floor() as u64).min(headroom);
        // settle rounding so the count matches the step-by-step comparison
        while due < headroom && owes(due) {
            due += 1;
        }
        while due > 0 && !owes(due - 1) {
            due -= 1;
        }
        due
    }

    /// Simulated seconds: elapsed sub-steps (run or dropped) times `dt`.
    pub fn simulated_time(&self) -> f64 {
        self.elapsed_steps as f64 * self.config.dt
    }

    /// Number of sub-steps actually simulated.
    pub fn current_step(&self) -> StepId {
        self.current_step
    }

    /// Sub-steps run or dropped since construction.
    pub fn elapsed_steps(&self) -> u64 {
        self.elapsed_steps
    }

    /// Commands waiting for the next sub-step (not counting the channel).
    pub fn pending_commands(&self) -> usize {
        self.queue.len()
    }

    /// The configuration this driver was built with.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Metrics from the most recent sub-step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The scene, mutably. Use between sub-steps, for example to mark a
    /// body ready or load a field profile.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Shorthand for `scene().field(id)`.
    pub fn field(&self, id: FieldId) -> Option<&tidepool_field::WaveField> {
        self.scene.field(id)
    }

    /// Shorthand for `scene().body(id)`.
    pub fn body(&self, id: BodyId) -> Option<&tidepool_body::BuoyantBody> {
        self.scene.body(id)
    }

    /// FNV-1a hash of the step counter, every field and every body's
    /// pose and velocity. Equal hashes mean bit-identical state.
    pub fn state_hash(&self) -> u64 {
        let mut hash = fnv1a_u64(FNV_OFFSET, self.current_step.0);
        for (_, field) in self.scene.fields() {
            hash = fnv1a_u64(hash, field.state_hash());
        }
        for body in self.scene.bodies() {
            let p = body.pose();
            let v = body.velocity();
            hash = fnv1a_f64s(hash, &[p.px, p.py, p.theta, v.vx, v.vy]);
        }
        hash
    }
}

impl std::fmt::Debug for SimulationDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationDriver")
            .field("current_step", &self.current_step)
            .field("elapsed_steps", &self.elapsed_steps)
            .field("fields", &self.scene.field_count())
            .field("bodies", &self.scene.body_count())
            .field("pending", &self.queue.len())
            .finish()
    }
}
