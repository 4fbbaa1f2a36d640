//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use construct_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, WalkEntry},
    },
    error::{ConstructError, ConstructResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can hand one clone to a service
/// and inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

// `PathBuf` ordering is component-wise, so iterating a `BTreeMap` gives
// the same parent-first lexical order as a sorted directory walk.
#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_ancestors(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_ancestors(parent);
            }
            inner
                .files
                .insert(path.to_path_buf(), content.as_ref().to_vec());
        }
        self
    }

    /// Seed a directory and its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_ancestors(path.as_ref());
        }
        self
    }

    /// A file's content (testing helper).
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// A file's content as text (testing helper).
    pub fn contents_string(&self, path: impl AsRef<Path>) -> Option<String> {
        self.contents(path)
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> ConstructResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn write(&self) -> ConstructResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(path: &Path, what: &str) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("{} does not exist", what),
    }
}

impl Filesystem for MemoryFilesystem {
    fn walk<'a>(
        &'a self,
        root: &Path,
    ) -> Box<dyn Iterator<Item = ConstructResult<WalkEntry>> + 'a> {
        let inner = match self.read() {
            Ok(inner) => inner,
            Err(e) => return Box::new(std::iter::once(Err(e))),
        };

        if !inner.directories.contains(root) {
            let err = ApplicationError::FilesystemError {
                path: root.to_path_buf(),
                reason: "Failed to walk: not a directory".into(),
            };
            return Box::new(std::iter::once(Err(ConstructError::from(err))));
        }

        let mut entries: BTreeMap<&PathBuf, bool> = BTreeMap::new();
        entries.extend(
            inner
                .directories
                .iter()
                .filter(|d| d.starts_with(root) && d.as_path() != root)
                .map(|d| (d, true)),
        );
        entries.extend(
            inner
                .files
                .keys()
                .filter(|f| f.starts_with(root))
                .map(|f| (f, false)),
        );

        let snapshot: Vec<WalkEntry> = entries
            .into_iter()
            .map(|(path, is_dir)| WalkEntry {
                path: path.clone(),
                is_dir,
            })
            .collect();

        Box::new(snapshot.into_iter().map(Ok::<_, ConstructError>))
    }

    fn read_file(&self, path: &Path) -> ConstructResult<Vec<u8>> {
        let inner = self.read()?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path, "File").into())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ConstructResult<()> {
        let mut inner = self.write()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(not_found(parent, "Parent directory").into());
            }
        }
        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to write file: is a directory".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> ConstructResult<()> {
        let mut inner = self.write()?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to create directory: a file is in the way".into(),
            }
            .into());
        }

        inner.add_ancestors(path);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_matches_sorted_parent_first_order() {
        let fs = MemoryFilesystem::new()
            .with_file("/t/b/inner/z.txt", "z")
            .with_file("/t/a.txt", "a")
            .with_file("/t/b.txt", "b");

        let walked: Vec<_> = fs
            .walk(Path::new("/t"))
            .map(|e| e.unwrap().path)
            .collect();

        assert_eq!(
            walked,
            vec![
                PathBuf::from("/t/a.txt"),
                PathBuf::from("/t/b"),
                PathBuf::from("/t/b/inner"),
                PathBuf::from("/t/b/inner/z.txt"),
                PathBuf::from("/t/b.txt"),
            ]
        );
    }

    #[test]
    fn walk_excludes_root_and_siblings() {
        let fs = MemoryFilesystem::new()
            .with_file("/t/structure/main.go", "")
            .with_file("/t/api/resource.go.tmpl", "");

        let walked: Vec<_> = fs
            .walk(Path::new("/t/structure"))
            .map(|e| e.unwrap().path)
            .collect();
        assert_eq!(walked, vec![PathBuf::from("/t/structure/main.go")]);
    }

    #[test]
    fn walk_missing_root_errors() {
        let fs = MemoryFilesystem::new();
        assert!(matches!(fs.walk(Path::new("/nope")).next(), Some(Err(_))));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), b"x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/b.txt"), b"x").unwrap();
        assert_eq!(fs.contents("/a/b.txt"), Some(b"x".to_vec()));
    }

    #[test]
    fn create_dir_all_is_idempotent_but_rejects_files() {
        let fs = MemoryFilesystem::new().with_dir("/out");
        assert!(fs.create_dir_all(Path::new("/out")).is_ok());

        fs.write_file(Path::new("/out/f"), b"1").unwrap();
        assert!(fs.create_dir_all(Path::new("/out/f")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new().with_dir("/d");
        let other = fs.clone();
        other.write_file(Path::new("/d/f"), b"1").unwrap();
        assert!(fs.is_file(Path::new("/d/f")));
    }
}
