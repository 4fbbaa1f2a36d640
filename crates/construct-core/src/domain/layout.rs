//! Template repository layout conventions and destination planning.
//!
//! Everything here is pure: no filesystem access.

use crate::domain::{
    entities::{
        common::RelativePath,
        rename::{RenameRule, RenameRules},
        tree_entry::{EntryKind, TreeEntry},
    },
    error::DomainError,
    value_objects::EntityNames,
};

/// Suffix marking a file whose content is rendered.
pub const TEMPLATE_MARKER: &str = ".tmpl";

/// Reserved file at the root of a subtree; printed, never materialized.
pub const INSTRUCTIONS_FILE: &str = "instructions.tmpl";

/// Subtree used by `new`.
pub const STRUCTURE_DIR: &str = "structure";

/// Line printed above and below the instructions block.
pub const INSTRUCTIONS_DELIMITER: &str =
    "------------------------------------------------------------------------------";

/// Whether `relative` is the reserved instructions file at the walk root.
pub fn is_instructions(relative: &RelativePath) -> bool {
    relative.is_top_level(INSTRUCTIONS_FILE)
}

/// Compute where `entry` lands, relative to the destination root.
///
/// Directories and plain files keep their path. Template files lose the
/// marker suffix and then go through `rules` in order.
pub fn plan_destination(
    entry: &TreeEntry,
    rules: &RenameRules,
) -> Result<RelativePath, DomainError> {
    match entry.kind {
        EntryKind::Directory | EntryKind::Plain => Ok(entry.relative.clone()),
        EntryKind::Template => {
            let slashed = entry.relative.to_slash_string();
            let stripped = slashed.strip_suffix(TEMPLATE_MARKER).unwrap_or(&slashed);
            RelativePath::from_slash_str(&rules.apply(stripped))
        }
    }
}

/// The rename rules `generate` uses when none are configured.
///
/// They retarget the generic `resource` file names of the stock template
/// repository to the entity being generated.
pub fn default_generate_rules(names: &EntityNames) -> Result<RenameRules, DomainError> {
    [
        ("api/resource.go", "api/{singular}.go"),
        ("api/resources_resource.go", "api/{plural}_resource.go"),
        ("db/resource_record.go", "db/{singular}_record.go"),
    ]
    .into_iter()
    .map(|(from, to)| RenameRule::literal_suffix(from, &names.expand(to)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn entry(rel: &str, kind: EntryKind) -> TreeEntry {
        TreeEntry {
            source: Path::new("/tpl").join(rel),
            relative: RelativePath::from_slash_str(rel).unwrap(),
            kind,
        }
    }

    #[test]
    fn template_marker_is_stripped() {
        let dest = plan_destination(
            &entry("cmd/main.go.tmpl", EntryKind::Template),
            &RenameRules::default(),
        )
        .unwrap();
        assert_eq!(dest.to_slash_string(), "cmd/main.go");
    }

    #[test]
    fn plain_files_are_never_renamed() {
        let rules = RenameRules::new().with(RenameRule::new("logo", "banner").unwrap());
        let dest = plan_destination(&entry("assets/logo.png", EntryKind::Plain), &rules).unwrap();
        assert_eq!(dest.to_slash_string(), "assets/logo.png");
    }

    #[test]
    fn directories_are_never_renamed() {
        let rules = RenameRules::new().with(RenameRule::new("api", "web").unwrap());
        let dest = plan_destination(&entry("api", EntryKind::Directory), &rules).unwrap();
        assert_eq!(dest.to_slash_string(), "api");
    }

    #[test]
    fn default_rules_rename_resource_files() {
        let rules = default_generate_rules(&EntityNames::new("user", "users")).unwrap();
        let plan = |rel: &str| {
            plan_destination(&entry(rel, EntryKind::Template), &rules)
                .unwrap()
                .to_slash_string()
        };

        assert_eq!(plan("api/resource.go.tmpl"), "api/user.go");
        assert_eq!(plan("api/resources_resource.go.tmpl"), "api/users_resource.go");
        assert_eq!(plan("db/resource_record.go.tmpl"), "db/user_record.go");
        assert_eq!(plan("api/routes.go.tmpl"), "api/routes.go");
    }

    #[test]
    fn instructions_only_reserved_at_root() {
        assert!(is_instructions(&RelativePath::new("instructions.tmpl")));
        assert!(!is_instructions(&RelativePath::new("docs/instructions.tmpl")));
    }

    #[test]
    fn delimiter_is_78_dashes() {
        assert_eq!(INSTRUCTIONS_DELIMITER.len(), 78);
        assert!(INSTRUCTIONS_DELIMITER.chars().all(|c| c == '-'));
    }
}
