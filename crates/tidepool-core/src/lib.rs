//! Core types for the Tidepool wave simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers, boundary policy, error types and disturbance commands
//! shared by the field, body and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod command;
pub mod error;
pub mod id;

pub use boundary::BoundaryMode;
pub use command::{Command, Disturbance, Receipt};
pub use error::{IngressError, WaveError};
pub use id::{BodyId, FieldId, StepId};
