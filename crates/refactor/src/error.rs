use rephrase_core::{TemplateCategory, TemplateError};
use std::fmt;

/// Which template of a rename an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSide {
    Old,
    New,
}

impl fmt::Display for StepSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepSide::Old => write!(f, "old"),
            StepSide::New => write!(f, "new"),
        }
    }
}

/// Errors returned when building a rename agent.
#[derive(Debug, thiserror::Error)]
pub enum RefactorError {
    /// The step text could not be lexed.
    #[error("invalid {side} step: {source}")]
    InvalidTemplate {
        side: StepSide,
        #[source]
        source: TemplateError,
    },

    /// The step text is empty after trimming.
    #[error("{side} step is empty")]
    EmptyTemplate { side: StepSide },

    /// The two templates parameterize their steps in ways that cannot be
    /// correlated by placeholder name.
    #[error("cannot rename {old_category} step '{old_step}' to {new_category} step '{new_step}'")]
    IncompatibleTemplates {
        old_step: String,
        old_category: TemplateCategory,
        new_step: String,
        new_category: TemplateCategory,
    },

    /// A rename request could not be decoded.
    #[error("invalid rename request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}
