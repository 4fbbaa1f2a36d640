use std::path::{Path, PathBuf};

use crate::domain::{
    entities::common::RelativePath, error::DomainError, layout::TEMPLATE_MARKER,
};

/// What a walked node is, as far as materialization cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Recreated as a directory at the destination.
    Directory,
    /// Name ends with the template marker; content is rendered.
    Template,
    /// Copied byte-for-byte.
    Plain,
}

/// One node of a template tree encountered during a walk.
///
/// Produced by the traversal and consumed by the materialization step;
/// it never outlives one walk step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Absolute (or fs-native) path of the node in the source tree.
    pub source: PathBuf,
    /// Path relative to the walk root.
    pub relative: RelativePath,
    pub kind: EntryKind,
}

impl TreeEntry {
    /// Classify a walked path under `root`.
    ///
    /// The marker check is done on the file name of the source path, so a
    /// directory named `x.tmpl` is still a directory.
    pub fn classify(root: &Path, source: &Path, is_dir: bool) -> Result<Self, DomainError> {
        let relative = RelativePath::strip_root(source, root)?;

        let kind = if is_dir {
            EntryKind::Directory
        } else if has_template_marker(source) {
            EntryKind::Template
        } else {
            EntryKind::Plain
        };

        Ok(Self {
            source: source.to_path_buf(),
            relative,
            kind,
        })
    }
}

fn has_template_marker(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(TEMPLATE_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_marker_and_kind() {
        let root = Path::new("/tpl/structure");

        let dir = TreeEntry::classify(root, &root.join("api"), true).unwrap();
        assert_eq!(dir.kind, EntryKind::Directory);

        let tmpl = TreeEntry::classify(root, &root.join("main.go.tmpl"), false).unwrap();
        assert_eq!(tmpl.kind, EntryKind::Template);
        assert_eq!(tmpl.relative, RelativePath::new("main.go.tmpl"));

        let plain = TreeEntry::classify(root, &root.join("logo.png"), false).unwrap();
        assert_eq!(plain.kind, EntryKind::Plain);
    }

    #[test]
    fn directory_with_marker_suffix_is_still_a_directory() {
        let root = Path::new("/tpl");
        let entry = TreeEntry::classify(root, &root.join("odd.tmpl"), true).unwrap();
        assert_eq!(entry.kind, EntryKind::Directory);
    }

    #[test]
    fn entry_outside_root_is_rejected() {
        assert!(TreeEntry::classify(Path::new("/tpl"), Path::new("/etc/hosts"), false).is_err());
    }
}
