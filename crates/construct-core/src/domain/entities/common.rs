use crate::domain::error::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if path is absolute (use `try_new` for fallible).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {:?}",
            path
        );
        Self(path)
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    /// Relativise `path` against `root`.
    ///
    /// Fails if `path` does not live under `root`.
    pub fn strip_root(path: &Path, root: &Path) -> Result<Self, DomainError> {
        path.strip_prefix(root)
            .map(|rel| Self(rel.to_path_buf()))
            .map_err(|_| DomainError::PathOutsideRoot {
                path: path.display().to_string(),
                root: root.display().to_string(),
            })
    }

    /// Forward-slash rendering used for rule matching, independent of the
    /// host separator.
    pub fn to_slash_string(&self) -> String {
        self.0
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                Component::ParentDir => Some("..".to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Build from a forward-slash string (the inverse of [`Self::to_slash_string`]).
    pub fn from_slash_str(s: &str) -> Result<Self, DomainError> {
        Self::try_new(s.split('/').filter(|seg| !seg.is_empty()).collect::<PathBuf>())
    }

    /// `true` if this path is the root-level file `name`.
    pub fn is_top_level(&self, name: &str) -> bool {
        let mut components = self.0.components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(first)), None) if first == name
        )
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_absolute() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
        assert!(RelativePath::try_new("api/resource.go").is_ok());
    }

    #[test]
    fn strip_root_relativises() {
        let rel = RelativePath::strip_root(
            Path::new("/tpl/structure/api/main.go"),
            Path::new("/tpl/structure"),
        )
        .unwrap();
        assert_eq!(rel.as_path(), Path::new("api/main.go"));
    }

    #[test]
    fn strip_root_outside_fails() {
        let err = RelativePath::strip_root(Path::new("/other/file"), Path::new("/tpl")).unwrap_err();
        assert!(matches!(err, DomainError::PathOutsideRoot { .. }));
    }

    #[test]
    fn slash_round_trip() {
        let rel = RelativePath::new(PathBuf::from("db").join("resource_record.go"));
        assert_eq!(rel.to_slash_string(), "db/resource_record.go");
        assert_eq!(
            RelativePath::from_slash_str("db/resource_record.go").unwrap(),
            rel
        );
    }

    #[test]
    fn top_level_only_matches_root_entries() {
        assert!(RelativePath::new("instructions.tmpl").is_top_level("instructions.tmpl"));
        assert!(!RelativePath::new("docs/instructions.tmpl").is_top_level("instructions.tmpl"));
    }
}
