use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProgressReporter, TemplateEngine},
    },
    domain::{INSTRUCTIONS_DELIMITER, RenderView},
    error::{ConstructError, ConstructResult},
};

/// Renders the reserved instructions template to the console.
pub struct InstructionsPrinter<'a> {
    filesystem: &'a dyn Filesystem,
    engine: &'a dyn TemplateEngine,
    reporter: &'a dyn ProgressReporter,
}

impl<'a> InstructionsPrinter<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        engine: &'a dyn TemplateEngine,
        reporter: &'a dyn ProgressReporter,
    ) -> Self {
        Self {
            filesystem,
            engine,
            reporter,
        }
    }

    /// Print `path` between delimiter lines if it exists.
    ///
    /// Returns whether anything was printed.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn print(&self, path: &Path, view: &RenderView) -> ConstructResult<bool> {
        if !self.filesystem.is_file(path) {
            debug!("No instructions file");
            return Ok(false);
        }

        let failed = |reason: String| ApplicationError::InstructionsRenderFailed {
            path: path.to_path_buf(),
            reason,
        };

        let source = self
            .filesystem
            .read_to_string(path)
            .map_err(|e| failed(e.to_string()))?;

        let body = self
            .engine
            .render(&path.display().to_string(), &source, view)
            .map_err(|e| match e {
                ConstructError::Application(ApplicationError::RenderFailed { reason, .. }) => {
                    failed(reason)
                }
                other => failed(other.to_string()),
            })?;

        self.reporter.block(INSTRUCTIONS_DELIMITER, &body);
        Ok(true)
    }
}
