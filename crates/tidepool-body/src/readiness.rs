//! Loading/ready gate for bodies.
//!
//! Bodies depend on an external resource (their visual asset) before they
//! may move or be drawn. The loader owns a [`ReadinessHandle`] and flips
//! it exactly once; the body observes the flag at the start of each
//! physics step and transitions `Loading → Ready`. The transition is one
//! way.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lifecycle state of a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Readiness {
    /// Physics and rendering are suppressed.
    #[default]
    Loading,
    /// Full physics active.
    Ready,
}

/// Shared readiness flag, settable from any thread.
///
/// # Examples
///
/// ```
/// use tidepool_body::ReadinessHandle;
///
/// let handle = ReadinessHandle::new();
/// let loader = handle.clone();
/// std::thread::spawn(move || loader.mark_ready()).join().unwrap();
/// assert!(handle.is_ready());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReadinessHandle {
    ready: Arc<AtomicBool>,
}

impl ReadinessHandle {
    /// A handle in the not-ready state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal that the resource has finished loading. Idempotent.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Whether [`mark_ready`](Self::mark_ready) has been called.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}
