//! Buoyant bodies for Tidepool.
//!
//! A [`BuoyantBody`] samples one wave field's local height and slope,
//! integrates its own position, velocity and orientation, and bounces
//! around inside a circular [`Container`]. Bodies read fields but never
//! mutate them.
//!
//! Bodies start out [`Readiness::Loading`] and stay inert until an
//! external collaborator (typically an asset loader) marks them ready.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod body;
pub mod constants;
pub mod container;
pub mod readiness;

pub use body::{BuoyantBody, BuoyantBodyBuilder, Pose, Velocity};
pub use constants::BodyConstants;
pub use container::Container;
pub use readiness::{Readiness, ReadinessHandle};
