//! rephrase-refactor: rename a step across specifications and concepts.
//!
//! A [`RephraseAgent`] is built from the old and new step texts. It
//! resolves which old argument feeds each slot of the new step
//! ([`ArgOrder`]), then rewrites every occurrence of the old step in a
//! [`SpecArena`](rephrase_core::SpecArena) and in the bodies of a
//! [`ConceptDictionary`](rephrase_core::ConceptDictionary). The returned
//! [`RephraseOutcome`] says which specifications and concept files changed,
//! so callers can persist only those.

pub mod agent;
pub mod error;
pub mod generate;
pub mod order;
mod rephrase;
pub mod report;

pub use agent::{create_agent, RenameRequest, RephraseAgent};
pub use error::{RefactorError, StepSide};
pub use generate::{generate_step_name, reorder_args, StepRewrite};
pub use order::{resolve_arg_order, ArgOrder};
pub use report::RephraseOutcome;
