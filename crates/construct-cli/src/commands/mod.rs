//! Command handlers and the adapter wiring they share.

pub mod completions;
pub mod config;
pub mod generate;
pub mod new;

use construct_adapters::{GitSource, HandlebarsEngine, HelperSet, LocalFilesystem};
use construct_core::{
    application::{ScaffoldService, ports::VersionedSource},
    domain::{ResolvedSource, TemplateReference},
    error::ConstructResult,
};

use crate::{config::Settings, output::OutputManager};

/// Wire the production adapters into a [`ScaffoldService`].
pub(crate) fn build_service(settings: &Settings, output: &OutputManager) -> ScaffoldService {
    let git = GitSource::new(settings.cache_dir.clone()).with_branch(settings.branch.clone());
    let engine = HandlebarsEngine::new(&HelperSet::default()).strict(settings.strict);

    ScaffoldService::new(
        Box::new(SpinningSource::new(git, output.clone())),
        Box::new(LocalFilesystem::new()),
        Box::new(engine),
        Box::new(output.clone()),
    )
}

/// Shows a spinner while the wrapped source resolves.
struct SpinningSource<S> {
    inner: S,
    output: OutputManager,
}

impl<S: VersionedSource> SpinningSource<S> {
    fn new(inner: S, output: OutputManager) -> Self {
        Self { inner, output }
    }
}

impl<S: VersionedSource> VersionedSource for SpinningSource<S> {
    fn resolve(&self, reference: &TemplateReference) -> ConstructResult<ResolvedSource> {
        let spinner = self.output.spinner(format!("Fetching template {reference}..."));
        let result = self.inner.resolve(reference);
        if let Some(bar) = spinner {
            bar.finish_and_clear();
        }
        result
    }
}
