//! Rename rules applied to destination paths of rendered files.
//!
//! A rule is a regular expression and a replacement. Rules are kept in a
//! `Vec` so their order is fixed: every rule sees the output of the one
//! before it.

use std::fmt;

use regex::Regex;

use crate::domain::error::DomainError;

/// One pattern/replacement pair.
///
/// The replacement follows `regex` expansion syntax, so `$1` refers to a
/// capture group of the pattern.
#[derive(Clone)]
pub struct RenameRule {
    pattern: Regex,
    replacement: String,
}

impl RenameRule {
    /// Compile a rule from a regular expression.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, DomainError> {
        let compiled = Regex::new(pattern).map_err(|e| DomainError::InvalidRenameRule {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            pattern: compiled,
            replacement: replacement.into(),
        })
    }

    /// Rule matching `from` literally anywhere in the path.
    pub fn literal(from: &str, to: &str) -> Result<Self, DomainError> {
        Self::new(&regex::escape(from), escape_replacement(to))
    }

    /// Rule matching `from` literally at the end of the path.
    pub fn literal_suffix(from: &str, to: &str) -> Result<Self, DomainError> {
        Self::new(&format!("{}$", regex::escape(from)), escape_replacement(to))
    }

    /// Replace every match of the pattern in `path`.
    pub fn apply(&self, path: &str) -> String {
        self.pattern
            .replace_all(path, self.replacement.as_str())
            .into_owned()
    }
}

/// `$$` is a literal `$` in replacement syntax.
fn escape_replacement(to: &str) -> String {
    to.replace('$', "$$")
}

impl fmt::Debug for RenameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenameRule")
            .field("pattern", &self.pattern.as_str())
            .field("replacement", &self.replacement)
            .finish()
    }
}

/// Ordered rule list. Composition is left-to-right over the cumulative result.
#[derive(Debug, Clone, Default)]
pub struct RenameRules(Vec<RenameRule>);

impl RenameRules {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, rule: RenameRule) {
        self.0.push(rule);
    }

    pub fn with(mut self, rule: RenameRule) -> Self {
        self.push(rule);
        self
    }

    pub fn apply(&self, path: &str) -> String {
        self.0
            .iter()
            .fold(path.to_string(), |current, rule| rule.apply(&current))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<RenameRule> for RenameRules {
    fn from_iter<I: IntoIterator<Item = RenameRule>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
