//! Domain value objects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{entities::rename::RenameRule, error::DomainError};

/// Singular and plural forms of an entity name, as used by `generate`.
///
/// Both forms are lowercase; the engine's `capitalize` helper takes care of
/// type names in templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityNames {
    singular: String,
    plural: String,
}

impl EntityNames {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Substitute `{singular}` and `{plural}` tokens in `text`.
    pub fn expand(&self, text: &str) -> String {
        self.expand_with(text, |name| name.to_owned())
    }

    fn expand_with(&self, text: &str, escape: impl Fn(&str) -> String) -> String {
        text.replace("{singular}", &escape(&self.singular))
            .replace("{plural}", &escape(&self.plural))
    }
}

impl fmt::Display for EntityNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.singular, self.plural)
    }
}

/// An uncompiled rename rule as written in configuration.
///
/// Both sides may carry `{singular}`/`{plural}` tokens; they are filled in
/// from [`EntityNames`] before the pattern is compiled. The names always
/// match and substitute literally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRuleSpec {
    pub pattern: String,
    pub replacement: String,
}

impl RenameRuleSpec {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    pub fn compile(&self, names: &EntityNames) -> Result<RenameRule, DomainError> {
        let pattern = names.expand_with(&self.pattern, regex::escape);
        let replacement = names.expand_with(&self.replacement, |name| name.replace('$', "$$"));
        RenameRule::new(&pattern, replacement)
    }
}
