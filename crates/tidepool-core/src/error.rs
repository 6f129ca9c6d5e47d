//! Error types for the Tidepool simulation.
//!
//! Organized by subsystem: [`WaveError`] covers construction and
//! disturbance arguments, [`IngressError`] covers command submission.

use std::error::Error;
use std::fmt;

use crate::id::FieldId;

/// Errors from building a field/body/driver or from disturbing a field.
#[derive(Clone, Debug, PartialEq)]
pub enum WaveError {
    /// Construction-time configuration is unusable (too few samples,
    /// zero-sum component amplitudes, out-of-range constants).
    InvalidConfiguration {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// A call argument is outside its accepted range.
    ///
    /// Disturbance coordinates are rejected rather than clamped so that
    /// collaborator bugs surface at the call site.
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// The value that was passed.
        value: f64,
        /// Description of the accepted range.
        expected: &'static str,
    },
}

impl WaveError {
    /// Shorthand for [`WaveError::InvalidConfiguration`].
    pub fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for WaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
            Self::InvalidArgument {
                name,
                value,
                expected,
            } => write!(f, "invalid argument {name}={value}: expected {expected}"),
        }
    }
}

impl Error for WaveError {}

/// Errors from the disturbance command pipeline.
///
/// Reported in [`Receipt::reason`](crate::command::Receipt) to explain why
/// a command was not applied.
#[derive(Clone, Debug, PartialEq)]
pub enum IngressError {
    /// The pending-command queue is at capacity.
    QueueFull,
    /// The command targets a field that is not part of the scene.
    UnknownField {
        /// The field named by the command.
        field: FieldId,
    },
    /// The receiving driver has been dropped.
    Disconnected,
    /// The field rejected the disturbance arguments when it was applied.
    Rejected(WaveError),
}

impl fmt::Display for IngressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueFull => write!(f, "command queue full"),
            Self::UnknownField { field } => write!(f, "unknown field {field}"),
            Self::Disconnected => write!(f, "driver disconnected"),
            Self::Rejected(e) => write!(f, "disturbance rejected: {e}"),
        }
    }
}

impl Error for IngressError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_argument() {
        let e = WaveError::InvalidArgument {
            name: "x",
            value: 1.5,
            expected: "[0, 1]",
        };
        assert_eq!(e.to_string(), "invalid argument x=1.5: expected [0, 1]");
    }

    #[test]
    fn config_shorthand() {
        let e = WaveError::config("samples must be >= 5");
        assert!(matches!(e, WaveError::InvalidConfiguration { .. }));
        assert!(e.to_string().contains("samples"));
    }

    #[test]
    fn rejected_exposes_source() {
        let e = IngressError::Rejected(WaveError::config("bad"));
        assert!(e.source().is_some());
        assert!(IngressError::QueueFull.source().is_none());
        assert_eq!(
            IngressError::UnknownField { field: FieldId(4) }.to_string(),
            "unknown field 4"
        );
    }
}
