//! The set of chart targets the current layout has mounted.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct SurfaceTargets {
    mounted: HashSet<String>,
}

impl SurfaceTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, target: &str) {
        self.mounted.insert(target.to_string());
    }

    pub fn mount_all<'a>(&mut self, targets: impl IntoIterator<Item = &'a str>) {
        for target in targets {
            self.mount(target);
        }
    }

    pub fn unmount(&mut self, target: &str) -> bool {
        self.mounted.remove(target)
    }

    pub fn unmount_all(&mut self) {
        self.mounted.clear();
    }

    pub fn is_mounted(&self, target: &str) -> bool {
        self.mounted.contains(target)
    }

    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }
}
