//! Specification tree types.
//!
//! These are produced by the spec/concept parsers and handed to the
//! refactoring passes, which rewrite step payloads in place.

use crate::error::ModelError;
use crate::lexer::{Fragment, Marker};
use crate::template::StepTemplate;
use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Arguments
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgKind {
    Static,
    Dynamic,
    Table,
    SpecialString,
    SpecialTable,
}

/// Inline table payload. Opaque to refactoring; it is moved, never read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepArg {
    /// Placeholder name the value was bound under
    pub name: String,
    pub value: String,
    pub kind: ArgKind,
    pub table: Option<Table>,
}

impl StepArg {
    pub fn new_static(value: impl Into<String>) -> Self {
        let value = value.into();
        StepArg {
            name: value.clone(),
            value,
            kind: ArgKind::Static,
            table: None,
        }
    }

    pub fn dynamic(name: impl Into<String>) -> Self {
        let name = name.into();
        StepArg {
            name: name.clone(),
            value: name,
            kind: ArgKind::Dynamic,
            table: None,
        }
    }

    pub fn special(kind: ArgKind, value: impl Into<String>) -> Self {
        let value = value.into();
        StepArg {
            name: value.clone(),
            value,
            kind,
            table: None,
        }
    }

    pub fn table(name: impl Into<String>, table: Table) -> Self {
        let name = name.into();
        StepArg {
            name: name.clone(),
            value: name,
            kind: ArgKind::Table,
            table: Some(table),
        }
    }

    /// Same value and payload, bound under another placeholder name.
    pub fn renamed(&self, name: &str) -> Self {
        StepArg {
            name: name.to_owned(),
            ..self.clone()
        }
    }

    fn from_fragment(fragment: &Fragment) -> Option<Self> {
        match fragment {
            Fragment::Dynamic(name) => Some(StepArg::dynamic(name.as_str())),
            Fragment::Static(literal) => Some(StepArg::new_static(literal.as_str())),
            Fragment::Text(_) | Fragment::Marker(_) => None,
        }
    }
}

// ──────────────────────────────────────────────
// Steps
// ──────────────────────────────────────────────

/// A concrete step: an invocation inside a scenario or concept body, or a
/// concept definition (`is_concept`) owning further items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Parameterized form, one `{}` per placeholder
    pub value: String,
    pub line_text: String,
    pub args: Vec<StepArg>,
    pub is_concept: bool,
    pub items: Vec<Item>,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Step(Step),
    Comment(String),
}

impl Step {
    /// Build a step from text whose values are written inline as
    /// `<name>` or `"literal"`.
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        Step::with_values(text, &[])
    }

    /// Build a step from text using `{static}`-style markers, taking one
    /// value per marker in order. Inline `<name>`/`"literal"` placeholders
    /// bind themselves.
    pub fn with_values(text: &str, values: &[&str]) -> Result<Self, ModelError> {
        let template = StepTemplate::parse(text)?;
        let markers = template
            .placeholders()
            .filter(|f| matches!(f, Fragment::Marker(_)))
            .count();
        if markers != values.len() {
            return Err(ModelError::ArityMismatch {
                text: template.text().to_owned(),
                expected: markers,
                found: values.len(),
            });
        }

        let mut values = values.iter();
        let mut args = Vec::with_capacity(template.placeholder_count());
        for fragment in template.placeholders() {
            let arg = match (fragment, StepArg::from_fragment(fragment)) {
                (_, Some(arg)) => arg,
                (Fragment::Marker(marker), None) => {
                    // arity checked above
                    let value = values.next().copied().unwrap_or_default();
                    match marker {
                        Marker::Static => StepArg::new_static(value),
                        Marker::Dynamic => StepArg::dynamic(value),
                        Marker::Special => StepArg::special(ArgKind::SpecialString, value),
                    }
                }
                (_, None) => continue,
            };
            args.push(arg);
        }

        Ok(Step {
            value: template.parameterized(),
            line_text: template.text().to_owned(),
            args,
            is_concept: false,
            items: Vec::new(),
            line: 0,
        })
    }

    /// Build a concept definition whose body is `items`.
    pub fn concept(text: &str, items: Vec<Item>) -> Result<Self, ModelError> {
        let mut step = Step::parse(text)?;
        step.is_concept = true;
        step.items = items;
        Ok(step)
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    pub fn arg_values(&self) -> Vec<String> {
        self.args.iter().map(|a| a.value.clone()).collect()
    }

    /// Steps directly nested in this step's items (comments skipped).
    pub fn nested_steps(&self) -> impl Iterator<Item = &Step> {
        self.items.iter().filter_map(|item| match item {
            Item::Step(step) => Some(step),
            Item::Comment(_) => None,
        })
    }
}

impl From<Step> for Item {
    fn from(step: Step) -> Self {
        Item::Step(step)
    }
}

// ──────────────────────────────────────────────
// Scenarios and specifications
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub heading: String,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn new(heading: impl Into<String>, steps: Vec<Step>) -> Self {
        Scenario {
            heading: heading.into(),
            steps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification {
    pub heading: String,
    pub file: String,
    /// Context steps, run before every scenario
    pub contexts: Vec<Step>,
    pub scenarios: Vec<Scenario>,
}

impl Specification {
    pub fn new(heading: impl Into<String>, file: impl Into<String>) -> Self {
        Specification {
            heading: heading.into(),
            file: file.into(),
            contexts: Vec::new(),
            scenarios: Vec::new(),
        }
    }

    pub fn with_contexts(mut self, contexts: Vec<Step>) -> Self {
        self.contexts = contexts;
        self
    }

    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    /// Context steps followed by every scenario step, in declaration order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.contexts
            .iter()
            .chain(self.scenarios.iter().flat_map(|s| s.steps.iter()))
    }

    pub fn steps_mut(&mut self) -> impl Iterator<Item = &mut Step> {
        self.contexts
            .iter_mut()
            .chain(self.scenarios.iter_mut().flat_map(|s| s.steps.iter_mut()))
    }
}
