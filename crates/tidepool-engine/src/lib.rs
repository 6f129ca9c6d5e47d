//! Simulation driver for Tidepool.
//!
//! A [`SimulationDriver`] owns a [`Scene`] of wave fields and buoyant
//! bodies and advances them in lockstep with a fixed `dt`: every field
//! ticks before any body samples it within the same sub-step, and queued
//! disturbances are applied only between sub-steps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod metrics;
pub mod queue;
pub mod scene;

pub use config::{DriverConfig, StepMode};
pub use driver::{AdvanceReport, SimulationDriver, StepResult};
pub use metrics::StepMetrics;
pub use queue::{DisturbanceQueue, DisturbanceSender};
pub use scene::Scene;
