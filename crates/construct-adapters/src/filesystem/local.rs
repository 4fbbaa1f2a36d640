//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::Path;

use construct_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, WalkEntry},
    },
    error::{ConstructError, ConstructResult},
};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn walk<'a>(
        &'a self,
        root: &Path,
    ) -> Box<dyn Iterator<Item = ConstructResult<WalkEntry>> + 'a> {
        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        Box::new(walker.into_iter().map(|entry| -> ConstructResult<WalkEntry> {
            let entry = entry.map_err(map_walk_error)?;
            Ok(WalkEntry {
                is_dir: entry.file_type().is_dir(),
                path: entry.into_path(),
            })
        }))
    }

    fn read_file(&self, path: &Path) -> ConstructResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ConstructResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ConstructResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(to, e, &format!("copy from {}", from.display())))
    }

    fn create_dir_all(&self, path: &Path) -> ConstructResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ConstructError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

fn map_walk_error(e: walkdir::Error) -> ConstructError {
    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
    let reason = match (e.loop_ancestor(), e.io_error()) {
        (Some(ancestor), _) => format!("Symlink loops back to {}", ancestor.display()),
        (None, Some(io)) if io.kind() == io::ErrorKind::NotFound && path.is_symlink() => {
            "Symlink points to a missing target".to_string()
        }
        _ => format!("Failed to walk: {}", e),
    };
    ApplicationError::FilesystemError { path, reason }.into()
}
