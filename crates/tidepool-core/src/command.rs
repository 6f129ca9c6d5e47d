//! Disturbance commands and receipts.
//!
//! Input collaborators never touch a field directly. They describe what
//! should happen as a [`Command`], the driver applies queued commands
//! between sub-steps and answers each one with a [`Receipt`].

use crate::error::IngressError;
use crate::id::{FieldId, StepId};

/// A disturbance to inject into a wave field.
///
/// Coordinates are already normalized by the input collaborator:
/// `x` in `[0, 1]` along the field, `y` a target height.
///
/// # Examples
///
/// ```
/// use tidepool_core::Disturbance;
///
/// let d = Disturbance::Splash { x: 0.5, y: 0.1, strength: 1.0 };
/// assert_eq!(d.kind(), "splash");
/// assert_eq!(d.x(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Disturbance {
    /// Instantaneous Gaussian impulse toward height `y` at `x`.
    Splash {
        /// Position along the field.
        x: f64,
        /// Target height.
        y: f64,
        /// Impulse multiplier.
        strength: f64,
    },
    /// Sum of the field's sinusoidal components, phased at `x`.
    Churn {
        /// Position along the field.
        x: f64,
        /// Height scale.
        y: f64,
        /// Turbulence multiplier.
        strength: f64,
    },
    /// Eased transient swell peaking halfway through `ticks` field ticks.
    Swell {
        /// Position along the field.
        x: f64,
        /// Strength in `[0, 10]` (permille of the surface scale).
        strength: f64,
        /// Upward swell when true, downward otherwise.
        positive: bool,
        /// Duration in field ticks; `0` selects the default.
        ticks: u32,
    },
}

impl Disturbance {
    /// Short lowercase name, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Splash { .. } => "splash",
            Self::Churn { .. } => "churn",
            Self::Swell { .. } => "swell",
        }
    }

    /// The position along the field.
    pub fn x(&self) -> f64 {
        match *self {
            Self::Splash { x, .. } | Self::Churn { x, .. } | Self::Swell { x, .. } => x,
        }
    }
}

/// A disturbance addressed to one field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Command {
    /// The field to disturb.
    pub field: FieldId,
    /// What to inject.
    pub disturbance: Disturbance,
}

impl Command {
    /// Address a disturbance to `field`.
    pub fn new(field: FieldId, disturbance: Disturbance) -> Self {
        Self { field, disturbance }
    }
}

/// Outcome of one submitted command.
///
/// Submission yields a receipt immediately when the command is refused
/// (`accepted == false`). Accepted commands receive their final receipt
/// from the sub-step that applied them.
#[derive(Clone, Debug, PartialEq)]
pub struct Receipt {
    /// Whether the command was accepted into the queue.
    pub accepted: bool,
    /// The sub-step before which the command was applied, if it was.
    pub applied_step: Option<StepId>,
    /// Why the command was refused or failed, if it was.
    pub reason: Option<IngressError>,
    /// Monotonic arrival number assigned on submission.
    pub arrival_seq: u64,
}

impl Receipt {
    /// A receipt for a command refused at submission.
    pub fn rejected(arrival_seq: u64, reason: IngressError) -> Self {
        Self {
            accepted: false,
            applied_step: None,
            reason: Some(reason),
            arrival_seq,
        }
    }

    /// Whether the disturbance reached its field successfully.
    pub fn is_applied(&self) -> bool {
        self.applied_step.is_some() && self.reason.is_none()
    }
}
