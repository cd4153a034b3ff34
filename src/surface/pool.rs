//! Accounting for live rendering surfaces.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Counters {
    live: AtomicUsize,
    acquired: AtomicUsize,
}

/// Hands out [`SurfaceLease`]s and counts how many are outstanding.
///
/// Clones share the same counters, so a test can keep a handle and watch
/// the live count while the console owns the registries.
#[derive(Debug, Clone, Default)]
pub struct SurfacePool {
    counters: Arc<Counters>,
}

impl SurfacePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a surface for `target`. It is returned when the lease drops.
    pub fn acquire(&self, target: &str) -> SurfaceLease {
        self.counters.live.fetch_add(1, Ordering::SeqCst);
        self.counters.acquired.fetch_add(1, Ordering::SeqCst);
        SurfaceLease {
            target: target.to_string(),
            counters: Arc::clone(&self.counters),
        }
    }

    /// Surfaces currently held.
    pub fn live(&self) -> usize {
        self.counters.live.load(Ordering::SeqCst)
    }

    /// Surfaces ever handed out.
    pub fn acquired(&self) -> usize {
        self.counters.acquired.load(Ordering::SeqCst)
    }
}

/// One acquired surface. Not cloneable; dropping it releases the surface.
#[derive(Debug)]
pub struct SurfaceLease {
    target: String,
    counters: Arc<Counters>,
}

impl SurfaceLease {
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Drop for SurfaceLease {
    fn drop(&mut self) {
        self.counters.live.fetch_sub(1, Ordering::SeqCst);
    }
}
