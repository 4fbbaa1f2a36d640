//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `construct-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

use crate::application::ApplicationError;
use crate::domain::{RenderView, ResolvedSource, TemplateReference};
use crate::error::ConstructResult;

/// One node yielded by [`Filesystem::walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl WalkEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `construct_adapters::filesystem::LocalFilesystem` (production)
/// - `construct_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Lazily walk everything below `root`, excluding `root` itself.
    ///
    /// Entries come in lexical order by file name, each directory before
    /// its children.
    fn walk<'a>(
        &'a self,
        root: &Path,
    ) -> Box<dyn Iterator<Item = ConstructResult<WalkEntry>> + 'a>;

    /// Read a file's raw bytes.
    fn read_file(&self, path: &Path) -> ConstructResult<Vec<u8>>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> ConstructResult<String> {
        let bytes = self.read_file(path)?;
        String::from_utf8(bytes).map_err(|e| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to decode as UTF-8: {e}"),
            }
            .into()
        })
    }

    /// Write raw bytes, replacing any existing file.
    fn write_file(&self, path: &Path, content: &[u8]) -> ConstructResult<()>;

    /// Copy a file byte-for-byte.
    fn copy_file(&self, from: &Path, to: &Path) -> ConstructResult<()> {
        let bytes = self.read_file(from)?;
        self.write_file(to, &bytes)
    }

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ConstructResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for text substitution.
///
/// Implemented by `construct_adapters::renderer::HandlebarsEngine`.
pub trait TemplateEngine: Send + Sync {
    /// Render `source` against `view`.
    ///
    /// `name` identifies the template in error messages only.
    fn render(&self, name: &str, source: &str, view: &RenderView) -> ConstructResult<String>;
}

/// Port for template acquisition.
///
/// Implemented by:
/// - `construct_adapters::source::GitSource` (clone or fetch + reset)
/// - `construct_adapters::source::StaticSource` (pre-seeded directory)
#[cfg_attr(test, automock)]
pub trait VersionedSource: Send + Sync {
    /// Resolve `reference` to an up-to-date local directory.
    fn resolve(&self, reference: &TemplateReference) -> ConstructResult<ResolvedSource>;
}

/// Port for word inflection.
#[cfg_attr(test, automock)]
pub trait Inflector: Send + Sync {
    fn singularize(&self, word: &str) -> String;
    fn pluralize(&self, word: &str) -> String;
}

/// Port for per-entry progress output.
///
/// Implemented by the CLI's `OutputManager` and by
/// `construct_adapters::reporter::RecordingReporter` for tests.
pub trait ProgressReporter: Send + Sync {
    /// Section header, e.g. `Creating files...`.
    fn header(&self, text: &str);

    /// One materialized destination path.
    fn created(&self, path: &Path);

    /// A status line.
    fn message(&self, text: &str);

    /// A block of text wrapped in delimiter lines. Always shown.
    fn block(&self, delimiter: &str, body: &str);
}
