use std::collections::BTreeMap;

use serde::Serialize;

/// Substitution context for one render pass.
///
/// A **Value Object**: immutable after construction. Every file in a pass
/// sees the same view; `with` returns a new view instead of mutating.
///
/// Serializes as a flat map so template engines see keys at the top level
/// (`{{Name}}`, `{{PluralName}}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderView {
    values: BTreeMap<String, String>,
}

impl RenderView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this view with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_does_not_touch_the_original() {
        let base = RenderView::new().with("Name", "blog");
        let extended = base.clone().with("ImportPrefix", "github.com/acme");

        assert_eq!(base.len(), 1);
        assert_eq!(extended.get("ImportPrefix"), Some("github.com/acme"));
        assert_eq!(extended.get("Name"), Some("blog"));
    }

    #[test]
    fn serializes_flat() {
        let view = RenderView::new().with("Name", "blog");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json, serde_json::json!({ "Name": "blog" }));
    }
}
