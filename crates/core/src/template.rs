//! Step templates: a step text split into plain text and ordered
//! placeholders.
//!
//! The parameterized form (every placeholder replaced by `{}`) is the
//! signature two steps are matched on; placeholder names only matter when
//! correlating the slots of two different templates.

use crate::error::TemplateError;
use crate::lexer::{self, Fragment};
use std::fmt;

/// Text substituted for every placeholder in the parameterized form.
pub const PARAM_SLOT: &str = "{}";

/// How a template parameterizes its step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateCategory {
    /// No placeholders at all.
    Plain,
    /// `<name>` and `"literal"` placeholders.
    Named,
    /// Unnamed `{static}`-style markers.
    Positional,
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateCategory::Plain => write!(f, "plain"),
            TemplateCategory::Named => write!(f, "named"),
            TemplateCategory::Positional => write!(f, "positional"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTemplate {
    text: String,
    fragments: Vec<Fragment>,
}

impl StepTemplate {
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let text = text.trim();
        Ok(StepTemplate {
            text: text.to_owned(),
            fragments: lexer::lex(text)?,
        })
    }

    /// The step text as written (surrounding whitespace trimmed).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Placeholder fragments in appearance order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(|f| f.is_placeholder())
    }

    /// Placeholder names in appearance order, duplicates kept.
    pub fn placeholder_names(&self) -> Vec<String> {
        self.placeholders()
            .filter_map(|f| f.name().map(str::to_owned))
            .collect()
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholders().count()
    }

    /// The signature used for matching: placeholders become `{}`.
    ///
    /// Braces and backslashes in plain text are escaped, so text can never
    /// spell a slot.
    pub fn parameterized(&self) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(text) => {
                    for c in text.chars() {
                        if matches!(c, '{' | '}' | '\\') {
                            out.push('\\');
                        }
                        out.push(c);
                    }
                }
                _ => out.push_str(PARAM_SLOT),
            }
        }
        out.trim().to_owned()
    }

    pub fn category(&self) -> TemplateCategory {
        let mut category = TemplateCategory::Plain;
        for fragment in self.placeholders() {
            match fragment {
                Fragment::Marker(_) => return TemplateCategory::Positional,
                _ => category = TemplateCategory::Named,
            }
        }
        category
    }

    /// The placeholder token of slot `index` exactly as the template spells it.
    pub fn render_slot(&self, index: usize) -> Option<String> {
        self.placeholders().nth(index).map(Fragment::render)
    }
}

impl fmt::Display for StepTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered placeholder names of a step text.
pub fn placeholder_names(text: &str) -> Result<Vec<String>, TemplateError> {
    Ok(StepTemplate::parse(text)?.placeholder_names())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_in_order_with_duplicates() {
        let names = placeholder_names("copy <a> to <b> then <a> again").unwrap();
        assert_eq!(names, vec!["a", "b", "a"]);
    }

    #[test]
    fn literal_is_its_own_name() {
        let names = placeholder_names("Say <greeting> to <name> \"DD\"").unwrap();
        assert_eq!(names, vec!["greeting", "name", "DD"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let t = StepTemplate::parse("first <x> and <y>").unwrap();
        assert_eq!(t.placeholder_names(), t.placeholder_names());
        let again = StepTemplate::parse(t.text()).unwrap();
        assert_eq!(again, t);
    }

    #[test]
    fn parameterized_ignores_names_and_styles() {
        let named = StepTemplate::parse("first step <a> and \"b\"").unwrap();
        let positional = StepTemplate::parse(" first step {static} and {dynamic} ").unwrap();
        assert_eq!(named.parameterized(), "first step {} and {}");
        assert_eq!(named.parameterized(), positional.parameterized());
    }

    #[test]
    fn plain_braces_never_spell_a_slot() {
        let plain = StepTemplate::parse(r"first \{\}").unwrap();
        let slotted = StepTemplate::parse("first <a>").unwrap();
        assert_eq!(plain.parameterized(), r"first \{\}");
        assert_ne!(plain.parameterized(), slotted.parameterized());

        let backslash = StepTemplate::parse(r"path a\\b").unwrap();
        assert_eq!(backslash.parameterized(), r"path a\\b");
    }

    #[test]
    fn text_is_trimmed() {
        let t = StepTemplate::parse("  first step ").unwrap();
        assert_eq!(t.text(), "first step");
        assert_eq!(t.to_string(), "first step");
    }

    #[test]
    fn categories() {
        let category = |s: &str| StepTemplate::parse(s).unwrap().category();
        assert_eq!(category("first step"), TemplateCategory::Plain);
        assert_eq!(category("first <a>"), TemplateCategory::Named);
        assert_eq!(category("first \"a\""), TemplateCategory::Named);
        assert_eq!(category("first {static}"), TemplateCategory::Positional);
        assert_eq!(category("first <a> {static}"), TemplateCategory::Positional);
    }

    #[test]
    fn render_slot_keeps_spelling() {
        let t = StepTemplate::parse("changed step <b> and \"id\"").unwrap();
        assert_eq!(t.render_slot(0).as_deref(), Some("<b>"));
        assert_eq!(t.render_slot(1).as_deref(), Some("\"id\""));
        assert_eq!(t.render_slot(2), None);
    }

    #[test]
    fn malformed_template_is_rejected() {
        assert!(StepTemplate::parse("first <a").is_err());
    }
}
