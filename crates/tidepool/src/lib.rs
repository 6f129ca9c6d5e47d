//! Tidepool: one-dimensional wave surfaces, disturbances and floating bodies.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tidepool sub-crates. For most users, adding `tidepool` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tidepool::prelude::*;
//!
//! let mut scene = Scene::new();
//! let pond = scene.add_field("pond", WaveField::builder().build().unwrap()).unwrap();
//! let mapping = SurfaceMapping::new(400.0, 200.0).unwrap();
//! let duck = scene
//!     .add_body(
//!         BuoyantBody::builder(pond, mapping)
//!             .position(200.0, 150.0)
//!             .ready(true)
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! let mut driver = SimulationDriver::new(scene, DriverConfig::default()).unwrap();
//! driver.submit(Command::new(pond, Disturbance::Splash { x: 0.5, y: 0.1, strength: 1.0 }));
//!
//! // one second of wall time at dt = 0.01
//! let report = driver.advance(1.0).unwrap();
//! assert_eq!(report.steps, 100);
//! assert!(driver.body(duck).unwrap().pose().py > 150.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tidepool-core` | IDs, boundary modes, commands, receipts, errors |
//! | [`field`] | `tidepool-field` | Wave field integrator, disturbances, swell, mappings |
//! | [`body`] | `tidepool-body` | Buoyant bodies, containers, readiness |
//! | [`engine`] | `tidepool-engine` | Scene, lockstep driver, command queue |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`tidepool-core`).
pub use tidepool_core as types;

/// Wave field integrator and disturbance model (`tidepool-field`).
///
/// [`field::WaveField`] is the main type; [`field::disturbance`] exposes
/// the stateless splash and churn shapes.
pub use tidepool_field as field;

/// Buoyant bodies (`tidepool-body`).
pub use tidepool_body as body;

/// Scene and driver (`tidepool-engine`).
///
/// [`engine::SimulationDriver`] advances every field and body in lockstep.
pub use tidepool_engine as engine;

/// Common imports for typical Tidepool usage.
///
/// ```rust
/// use tidepool::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tidepool_core::{
        BodyId, BoundaryMode, Command, Disturbance, FieldId, Receipt, StepId,
    };

    // Errors
    pub use tidepool_core::{IngressError, WaveError};

    // Fields
    pub use tidepool_field::{Components, SurfaceMapping, WaveComponent, WaveField};

    // Bodies
    pub use tidepool_body::{BodyConstants, BuoyantBody, Container, Readiness, ReadinessHandle};

    // Engine
    pub use tidepool_engine::{
        AdvanceReport, DisturbanceSender, DriverConfig, Scene, SimulationDriver, StepMetrics,
        StepMode,
    };
}
