use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use construct_core::{
    application::ports::VersionedSource,
    domain::{ResolvedSource, TemplateReference},
    error::ConstructResult,
};

/// A source that always resolves to a pre-seeded directory.
///
/// Used where no remote is involved: tests, and trees already on disk.
#[derive(Debug)]
pub struct StaticSource {
    root: PathBuf,
    resolutions: AtomicUsize,
}

impl StaticSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            resolutions: AtomicUsize::new(0),
        }
    }

    /// How many times `resolve` has been called.
    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::Relaxed)
    }
}

impl VersionedSource for StaticSource {
    fn resolve(&self, reference: &TemplateReference) -> ConstructResult<ResolvedSource> {
        self.resolutions.fetch_add(1, Ordering::Relaxed);
        Ok(ResolvedSource::new(reference.clone(), self.root.clone()))
    }
}
