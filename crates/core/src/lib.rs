//! rephrase-core: specification tree model for step refactoring.
//!
//! Holds the in-memory shape the spec and concept parsers produce, plus
//! the step-template lexer used to read placeholders out of step text.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`StepTemplate`] -- a step text split into text and placeholders
//! - [`placeholder_names()`] -- ordered placeholder names of a step text
//! - Tree types: [`Specification`], [`Scenario`], [`Step`], [`StepArg`],
//!   [`Item`]
//! - [`SpecArena`] / [`SpecId`] -- specifications addressed by handle
//! - [`ConceptDictionary`] -- concept definitions keyed by signature

pub mod arena;
pub mod ast;
pub mod concepts;
pub mod error;
pub mod lexer;
pub mod template;

// ── Convenience re-exports ───────────────────────────────────────────

pub use arena::{SpecArena, SpecId};
pub use ast::{ArgKind, Item, Scenario, Specification, Step, StepArg, Table};
pub use concepts::{Concept, ConceptDictionary};
pub use error::{ModelError, TemplateError};
pub use lexer::{Fragment, Marker};
pub use template::{placeholder_names, StepTemplate, TemplateCategory, PARAM_SLOT};
