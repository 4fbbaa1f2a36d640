pub mod common;
pub mod rename;
pub mod source;
pub mod tree_entry;
pub mod view;

pub use crate::domain::DomainError;
pub use rename::{RenameRule, RenameRules};
pub use source::{ResolvedSource, TemplateReference};
pub use tree_entry::{EntryKind, TreeEntry};
pub use view::RenderView;
