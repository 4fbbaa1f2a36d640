//! Core domain layer for Construct.
//!
//! Pure logic with no I/O: how a walked node is classified, where it lands
//! at the destination and which names are acceptable. Filesystem, version
//! control and template syntax are reached through the ports in
//! [`crate::application::ports`].
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: no filesystem, network or process access
//! - **Immutable values**: `RenderView`, `RenameRules` and `TreeEntry` are
//!   built once and only read afterwards
//! - **Ordered rules**: rename rules are a `Vec`, never a map

pub mod entities;
pub mod error;
pub mod layout;
pub mod value_objects;

mod validation;

pub use entities::{
    common::RelativePath,
    rename::{RenameRule, RenameRules},
    source::{ResolvedSource, TemplateReference},
    tree_entry::{EntryKind, TreeEntry},
    view::RenderView,
};

pub use error::{DomainError, ErrorCategory};

pub use layout::{
    INSTRUCTIONS_DELIMITER, INSTRUCTIONS_FILE, STRUCTURE_DIR, TEMPLATE_MARKER,
    default_generate_rules, is_instructions, plan_destination,
};

pub use value_objects::{EntityNames, RenameRuleSpec};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Name Validation
    // ========================================================================

    #[test]
    fn accepts_ordinary_names() {
        for name in ["blog", "user_service", "my-app", "api2"] {
            assert!(DomainValidator::validate_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_empty_hidden_and_nested_names() {
        for name in ["", "   ", ".hidden", "..", "a/b", "a\\b"] {
            assert!(
                matches!(
                    DomainValidator::validate_name(name),
                    Err(DomainError::InvalidName { .. })
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_name_is_validation_category() {
        let err = DomainValidator::validate_name("").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    // ========================================================================
    // Walk + Plan
    // ========================================================================

    #[test]
    fn classify_then_plan_with_composed_rules() {
        let root = std::path::Path::new("/tpl/api-gen");
        let entry = TreeEntry::classify(root, &root.join("api/resource.go.tmpl"), false).unwrap();

        let rules = RenameRules::new()
            .with(RenameRule::new("resource", "widget").unwrap())
            .with(RenameRule::new("widget", "widgets").unwrap());

        let dest = plan_destination(&entry, &rules).unwrap();
        assert_eq!(dest.to_slash_string(), "api/widgets.go");
    }
}
