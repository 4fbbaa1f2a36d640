use std::fmt;
use std::path::{Path, PathBuf};

/// What the user asked for: a local path or a remote repository URL.
///
/// Opaque until a [`VersionedSource`](crate::application::ports::VersionedSource)
/// resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateReference(String);

impl TemplateReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateReference {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TemplateReference {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A reference after resolution: `root` is an existing local directory tree
/// holding the template content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    pub reference: TemplateReference,
    pub root: PathBuf,
}

impl ResolvedSource {
    pub fn new(reference: TemplateReference, root: impl Into<PathBuf>) -> Self {
        Self {
            reference,
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a top-level subtree (`structure`, or a generator type).
    pub fn subtree(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
