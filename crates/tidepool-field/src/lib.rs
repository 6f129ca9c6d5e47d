//! One-dimensional wave field for Tidepool.
//!
//! [`WaveField`] owns the sampled displacement and velocity of a surface
//! and advances them with an explicit finite-difference wave equation.
//! Disturbances come in three shapes:
//!
//! - **splash**: an instantaneous Gaussian impulse ([`WaveField::splash`])
//! - **churn**: a burst of the field's sinusoidal components ([`WaveField::churn`])
//! - **swell**: an eased transient driven by the field's own [`Swell`]
//!
//! The shape math lives in [`disturbance`] as free functions so it can be
//! tested on its own. [`SurfaceMapping`] converts between sample indices
//! and the linear coordinates used by bodies and renderers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod component;
pub mod disturbance;
pub mod field;
pub mod hash;
pub mod mapping;
pub mod swell;

pub use component::{Components, WaveComponent};
pub use field::{WaveField, WaveFieldBuilder};
pub use mapping::SurfaceMapping;
pub use swell::Swell;
