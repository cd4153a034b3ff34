//! Keyed registry of live chart instances.

use std::collections::BTreeMap;

use super::{SurfaceLease, SurfacePool, SurfaceTargets};
use crate::error::RenderError;
use crate::models::{ChartKind, ChartSeries};

/// What a chart shows. Produced by the factory passed to
/// [`SurfaceRegistry::install`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub series: ChartSeries,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: impl Into<String>, series: ChartSeries) -> Self {
        Self {
            kind,
            title: title.into(),
            series,
        }
    }
}

/// A built chart bound to its surface.
#[derive(Debug)]
pub struct ChartInstance {
    key: String,
    spec: ChartSpec,
    lease: SurfaceLease,
}

impl ChartInstance {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn target(&self) -> &str {
        self.lease.target()
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    pub fn kind(&self) -> ChartKind {
        self.spec.kind
    }

    pub fn series(&self) -> &ChartSeries {
        &self.spec.series
    }
}

/// At most one [`ChartInstance`] per key.
///
/// Replacing or destroying an instance drops it, which returns its surface to
/// the pool before anything new is built.
#[derive(Debug)]
pub struct SurfaceRegistry {
    pool: SurfacePool,
    entries: BTreeMap<String, ChartInstance>,
}

impl SurfaceRegistry {
    pub fn new(pool: SurfacePool) -> Self {
        Self {
            pool,
            entries: BTreeMap::new(),
        }
    }

    /// Build a chart under `key` drawing into `target`.
    ///
    /// When `target` is not mounted nothing happens and
    /// [`RenderError::TargetMissing`] is returned for the caller to log.
    /// Otherwise the current instance under `key`, if any, is released
    /// first and only then is `factory` invoked.
    pub fn install<F>(
        &mut self,
        key: &str,
        target: &str,
        targets: &SurfaceTargets,
        factory: F,
    ) -> Result<&ChartInstance, RenderError>
    where
        F: FnOnce() -> ChartSpec,
    {
        if !targets.is_mounted(target) {
            return Err(RenderError::TargetMissing {
                key: key.to_string(),
                target: target.to_string(),
            });
        }

        self.destroy(key);

        let spec = factory();
        let instance = ChartInstance {
            key: key.to_string(),
            spec,
            lease: self.pool.acquire(target),
        };
        tracing::trace!(key, target, live = self.pool.live(), "chart installed");
        Ok(self.entries.entry(key.to_string()).or_insert(instance))
    }

    /// Release the instance under `key`. Returns whether one existed.
    pub fn destroy(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Release every instance. Returns how many were released.
    pub fn destroy_all(&mut self) -> usize {
        let released = self.entries.len();
        self.entries.clear();
        if released > 0 {
            tracing::debug!(released, "destroyed all charts");
        }
        released
    }

    pub fn get(&self, key: &str) -> Option<&ChartInstance> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pool(&self) -> &SurfacePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(title: &str, values: Vec<f64>) -> ChartSpec {
        let labels = values.iter().map(|v| v.to_string()).collect();
        ChartSpec::new(ChartKind::Bar, title, ChartSeries::new(labels, values))
    }

    fn mounted(ids: &[&str]) -> SurfaceTargets {
        let mut targets = SurfaceTargets::new();
        targets.mount_all(ids.iter().copied());
        targets
    }

    #[test]
    fn test_install_replaces_and_releases() {
        let pool = SurfacePool::new();
        let mut registry = SurfaceRegistry::new(pool.clone());
        let targets = mounted(&["ch_a"]);

        registry.install("a", "ch_a", &targets, || spec("first", vec![1.0])).unwrap();
        registry.install("a", "ch_a", &targets, || spec("second", vec![2.0])).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(pool.live(), 1);
        assert_eq!(registry.get("a").unwrap().spec().title, "second");
    }

    #[test]
    fn test_old_instance_released_before_factory_runs() {
        let pool = SurfacePool::new();
        let mut registry = SurfaceRegistry::new(pool.clone());
        let targets = mounted(&["ch_a"]);

        registry.install("a", "ch_a", &targets, || spec("first", vec![])).unwrap();
        let observed = pool.clone();
        registry
            .install("a", "ch_a", &targets, || {
                assert_eq!(observed.live(), 0);
                spec("second", vec![])
            })
            .unwrap();
        assert_eq!(pool.live(), 1);
    }

    #[test]
    fn test_missing_target_is_a_no_op() {
        let pool = SurfacePool::new();
        let mut registry = SurfaceRegistry::new(pool.clone());
        let mut called = false;

        let err = registry
            .install("a", "ch_a", &SurfaceTargets::new(), || {
                called = true;
                spec("never", vec![])
            })
            .unwrap_err();

        assert!(matches!(err, RenderError::TargetMissing { .. }));
        assert!(!called);
        assert!(registry.is_empty());
        assert_eq!(pool.live(), 0);
    }

    #[test]
    fn test_destroy_all_releases_everything() {
        let pool = SurfacePool::new();
        let mut registry = SurfaceRegistry::new(pool.clone());
        let targets = mounted(&["ch_a", "ch_b"]);

        registry.install("a", "ch_a", &targets, || spec("a", vec![])).unwrap();
        registry.install("b", "ch_b", &targets, || spec("b", vec![])).unwrap();
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["a", "b"]);

        assert_eq!(registry.destroy_all(), 2);
        assert_eq!(pool.live(), 0);
        assert!(!registry.destroy("a"));
    }

    #[test]
    fn test_dropping_registry_releases() {
        let pool = SurfacePool::new();
        {
            let mut registry = SurfaceRegistry::new(pool.clone());
            let targets = mounted(&["ch_a"]);
            registry.install("a", "ch_a", &targets, || spec("a", vec![])).unwrap();
            assert_eq!(pool.live(), 1);
        }
        assert_eq!(pool.live(), 0);
    }
}
