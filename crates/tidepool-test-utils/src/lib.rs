//! Test utilities for Tidepool development.
//!
//! Seeded initial profiles, pre-configured fields and bodies, and small
//! numeric helpers shared by integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;
