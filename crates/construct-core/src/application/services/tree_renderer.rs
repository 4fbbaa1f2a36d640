//! Tree Renderer - materializes a template tree into a destination tree.
//!
//! The walk and the writes are separate steps: the filesystem port yields
//! entries lazily, the domain classifies them and plans their destination,
//! and this module performs exactly one write per entry.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProgressReporter, TemplateEngine},
    },
    domain::{EntryKind, RenameRules, RenderView, TreeEntry, is_instructions, plan_destination},
    error::ConstructResult,
};

/// Everything one render pass needs.
#[derive(Debug, Clone)]
pub struct RenderJob {
    /// Root of the subtree to walk (`structure/` or a generator directory).
    pub source_root: PathBuf,
    /// Existing directory the subtree is materialized into.
    pub dest_root: PathBuf,
    pub view: RenderView,
    pub rename_rules: RenameRules,
}

impl RenderJob {
    pub fn new(source_root: impl Into<PathBuf>, dest_root: impl Into<PathBuf>, view: RenderView) -> Self {
        Self {
            source_root: source_root.into(),
            dest_root: dest_root.into(),
            view,
            rename_rules: RenameRules::default(),
        }
    }

    #[must_use]
    pub fn with_rename_rules(mut self, rules: RenameRules) -> Self {
        self.rename_rules = rules;
        self
    }
}

/// Walks a source tree and writes each entry to the destination.
pub struct TreeRenderer<'a> {
    filesystem: &'a dyn Filesystem,
    engine: &'a dyn TemplateEngine,
    reporter: &'a dyn ProgressReporter,
}

impl<'a> TreeRenderer<'a> {
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

    /// Materialize `job.source_root` under `job.dest_root`.
    ///
    /// Returns the destination paths in walk order. The first failure stops
    /// the walk; whatever was written before it stays.
    #[instrument(
        skip_all,
        fields(
            source = %job.source_root.display(),
            dest = %job.dest_root.display()
        )
    )]
    pub fn render(&self, job: &RenderJob) -> ConstructResult<Vec<PathBuf>> {
        let mut created = Vec::new();

        for walked in self.filesystem.walk(&job.source_root) {
            let walked = walked?;
            let entry = TreeEntry::classify(&job.source_root, &walked.path, walked.is_dir)?;

            if is_instructions(&entry.relative) {
                debug!(path = %entry.source.display(), "Skipping instructions file");
                continue;
            }

            let relative = plan_destination(&entry, &job.rename_rules)?;
            let dest = job.dest_root.join(relative.as_path());

            self.materialize(&entry, &dest, &job.view)?;

            self.reporter.created(&dest);
            created.push(dest);
        }

        debug!(entries = created.len(), "Render pass complete");
        Ok(created)
    }

    fn materialize(&self, entry: &TreeEntry, dest: &Path, view: &RenderView) -> ConstructResult<()> {
        match entry.kind {
            EntryKind::Directory => {
                trace!(dest = %dest.display(), "Creating directory");
                self.filesystem.create_dir_all(dest)
            }
            EntryKind::Plain => {
                trace!(dest = %dest.display(), "Copying file");
                self.filesystem.copy_file(&entry.source, dest)
            }
            EntryKind::Template => {
                trace!(dest = %dest.display(), "Rendering template");
                let rendered = self.render_file(&entry.source, view)?;
                self.ensure_parent(dest)?;
                self.filesystem.write_file(dest, rendered.as_bytes())
            }
        }
    }

    fn render_file(&self, source: &Path, view: &RenderView) -> ConstructResult<String> {
        let bytes = self.filesystem.read_file(source)?;
        let text = String::from_utf8(bytes).map_err(|e| ApplicationError::RenderFailed {
            path: source.to_path_buf(),
            reason: format!("template is not valid UTF-8: {e}"),
        })?;

        self.engine
            .render(&source.display().to_string(), &text, view)
    }

    // A rename rule may point into a directory the template tree never had.
    fn ensure_parent(&self, dest: &Path) -> ConstructResult<()> {
        match dest.parent() {
            Some(parent) if !self.filesystem.is_dir(parent) => {
                debug!(parent = %parent.display(), "Creating missing parent directory");
                self.filesystem.create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }
}
