//! Template helpers.
//!
//! Helpers are plain `fn(&str) -> String` transforms collected in an
//! immutable [`HelperSet`]. The set is handed to the engine at construction,
//! so a test can register its own helpers without touching globals.

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, JsonRender, Output, RenderContext,
    RenderErrorReason,
};

/// A named string transform usable from templates as `{{name Value}}`.
#[derive(Debug, Clone, Copy)]
pub struct StringHelper {
    name: &'static str,
    transform: fn(&str) -> String,
}

impl HelperDef for StringHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let param = h
            .param(0)
            .ok_or(RenderErrorReason::ParamNotFoundForIndex(self.name, 0))?;
        out.write(&(self.transform)(&param.value().render()))?;
        Ok(())
    }
}

/// Immutable, ordered set of string helpers.
#[derive(Debug, Clone)]
pub struct HelperSet {
    helpers: Vec<StringHelper>,
}

impl HelperSet {
    /// A set with no helpers at all.
    pub fn empty() -> Self {
        Self {
            helpers: Vec::new(),
        }
    }

    /// Return a copy of this set with `name` added (or replaced).
    #[must_use]
    pub fn with(mut self, name: &'static str, transform: fn(&str) -> String) -> Self {
        self.helpers.retain(|h| h.name != name);
        self.helpers.push(StringHelper { name, transform });
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.helpers.iter().map(|h| h.name)
    }

    pub(crate) fn register(&self, registry: &mut Handlebars<'_>) {
        for helper in &self.helpers {
            registry.register_helper(helper.name, Box::new(*helper));
        }
    }
}

/// The stock set: `capitalize`.
impl Default for HelperSet {
    fn default() -> Self {
        Self::empty().with("capitalize", capitalize)
    }
}

/// Upper-case the first letter of every word.
///
/// A word starts after any character that is not a letter, digit or `_`,
/// so `blog post` becomes `Blog Post` and `user_name` stays one word.
pub fn capitalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }

    out
}
