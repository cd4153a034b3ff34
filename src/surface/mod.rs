//! Chart rendering surfaces.
//!
//! A chart draws into a *target*: a named slot that the view layout mounts
//! while it is on screen. Every live chart holds a [`SurfaceLease`] taken from
//! a [`SurfacePool`]; dropping the chart returns the lease. The
//! [`SurfaceRegistry`] keeps at most one chart per key and releases the old
//! one before building a replacement.

mod pool;
mod registry;
mod targets;

pub use pool::{SurfaceLease, SurfacePool};
pub use registry::{ChartInstance, ChartSpec, SurfaceRegistry};
pub use targets::SurfaceTargets;
