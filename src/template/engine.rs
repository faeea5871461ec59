// ABOUTME: Permissive placeholder substitution engine
// ABOUTME: Replaces ${NAME} placeholders, leaving unknown names untouched

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::context::TemplateContext;

// Matches "$$", "${NAME}" or "$NAME". Anything else after a '$' is left
// alone, so substitution is total over arbitrary template text.
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?:\$|\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
        .expect("placeholder pattern is valid")
});

/// Substitutes named placeholders from a [`TemplateContext`]. Permissive:
/// placeholders with no matching key are re-emitted verbatim rather than
/// failing or expanding to an empty string, so a typo'd placeholder
/// survives into the output unexpanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderEngine;

impl PlaceholderEngine {
    pub fn new() -> Self {
        Self
    }

    /// Replace every known placeholder in `template` with its context value
    pub fn substitute(&self, template: &str, ctx: &TemplateContext) -> String {
        PLACEHOLDER_RE
            .replace_all(template, |caps: &Captures| {
                let name = caps.get(1).or_else(|| caps.get(2));
                match name {
                    Some(name) => match ctx.get(name.as_str()) {
                        Some(value) => value.to_string(),
                        None => caps[0].to_string(),
                    },
                    // "$$" escapes to a literal dollar sign
                    None => "$".to_string(),
                }
            })
            .into_owned()
    }
}

/// Remove every literal ".0" substring from a rendered path or file name.
///
/// This renders whole-number parameters like "100.0" as "100" in output
/// names. It is a deliberately lossy cleanup applied to the whole rendered
/// string: a ".0" in the surrounding template text is removed too, not
/// just ones produced by substituted values.
pub fn scrub_decimal_zeros(rendered: &str) -> String {
    rendered.replace(".0", "")
}
