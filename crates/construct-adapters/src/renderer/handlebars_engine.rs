//! Handlebars template engine.

use std::path::PathBuf;

use construct_core::{
    application::{ApplicationError, ports::TemplateEngine},
    domain::RenderView,
    error::ConstructResult,
};
use handlebars::Handlebars;
use tracing::trace;

use super::helpers::HelperSet;

/// [`TemplateEngine`] backed by `handlebars`.
///
/// Output is never HTML-escaped: templates produce source code, not markup.
pub struct HandlebarsEngine {
    registry: Handlebars<'static>,
}

impl HandlebarsEngine {
    /// Create an engine with the given helpers.
    pub fn new(helpers: &HelperSet) -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        helpers.register(&mut registry);

        Self { registry }
    }

    /// Fail on references to keys the view does not have.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.registry.set_strict_mode(strict);
        self
    }
}

impl Default for HandlebarsEngine {
    fn default() -> Self {
        Self::new(&HelperSet::default())
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn render(&self, name: &str, source: &str, view: &RenderView) -> ConstructResult<String> {
        trace!(template = name, "Rendering");
        self.registry.render_template(source, view).map_err(|e| {
            ApplicationError::RenderFailed {
                path: PathBuf::from(name),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
