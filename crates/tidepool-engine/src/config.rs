//! Driver configuration and validation.

use tidepool_core::WaveError;

// ── StepMode ──────────────────────────────────────────────────────

/// How [`advance`](crate::SimulationDriver::advance) decides how many
/// sub-steps to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepMode {
    /// Run sub-steps until simulated time catches up with wall time.
    ///
    /// A backlog longer than `max_steps_per_advance` is dropped rather
    /// than simulated, so a stalled caller cannot trigger an unbounded
    /// catch-up burst.
    CatchUp {
        /// Most sub-steps one `advance` call will run. Default: 250.
        max_steps_per_advance: u32,
    },
    /// Run exactly this many sub-steps per `advance`, ignoring wall time.
    FixedSubsteps(u32),
}

impl Default for StepMode {
    fn default() -> Self {
        Self::CatchUp {
            max_steps_per_advance: 250,
        }
    }
}

// ── DriverConfig ──────────────────────────────────────────────────

/// Configuration for a [`SimulationDriver`](crate::SimulationDriver).
#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    /// Sub-step length in seconds. Default: 0.01.
    pub dt: f64,
    /// Step scheduling policy. Default: catch-up, 250 steps per advance.
    pub mode: StepMode,
    /// Capacity of the pending-command queue and the cross-thread
    /// channel. Default: 1024.
    pub max_queue: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            mode: StepMode::default(),
            max_queue: 1024,
        }
    }
}

impl DriverConfig {
    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidConfiguration`] if `dt` is not finite
    /// and positive, a step count is zero, or `max_queue` is zero.
    pub fn validate(&self) -> Result<(), WaveError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(WaveError::config(format!(
                "dt must be finite and > 0, got {}",
                self.dt
            )));
        }
        match self.mode {
            StepMode::CatchUp {
                max_steps_per_advance: 0,
            } => {
                return Err(WaveError::config("max_steps_per_advance must be >= 1"));
            }
            StepMode::FixedSubsteps(0) => {
                return Err(WaveError::config("fixed sub-step count must be >= 1"));
            }
            _ => {}
        }
        if self.max_queue == 0 {
            return Err(WaveError::config("max_queue must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = DriverConfig::default();
        assert_eq!(c.dt, 0.01);
        assert_eq!(
            c.mode,
            StepMode::CatchUp {
                max_steps_per_advance: 250
            }
        );
        assert_eq!(c.max_queue, 1024);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_dt() {
        for dt in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let c = DriverConfig {
                dt,
                ..Default::default()
            };
            assert!(c.validate().is_err(), "dt={dt}");
        }
    }

    #[test]
    fn rejects_zero_counts() {
        let c = DriverConfig {
            mode: StepMode::FixedSubsteps(0),
            ..Default::default()
        };
        assert!(c.validate().is_err());

        let c = DriverConfig {
            mode: StepMode::CatchUp {
                max_steps_per_advance: 0,
            },
            ..Default::default()
        };
        assert!(c.validate().is_err());

        let c = DriverConfig {
            max_queue: 0,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn fixed_substeps_is_valid() {
        let c = DriverConfig {
            mode: StepMode::FixedSubsteps(10),
            ..Default::default()
        };
        assert!(c.validate().is_ok());
    }
}
