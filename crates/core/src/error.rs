/// Errors raised while lexing a step template.
///
/// `column` is the 0-based character offset where the offending
/// placeholder starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// A `<` dynamic placeholder was never closed.
    #[error("unterminated '<' placeholder at column {column} in step '{text}'")]
    UnterminatedDynamic { text: String, column: usize },

    /// A `"` static placeholder was never closed.
    #[error("unterminated '\"' literal at column {column} in step '{text}'")]
    UnterminatedStatic { text: String, column: usize },

    /// A `{` marker was never closed.
    #[error("unterminated '{{' marker at column {column} in step '{text}'")]
    UnterminatedMarker { text: String, column: usize },

    /// `<>` with nothing (or only whitespace) between the delimiters.
    #[error("empty placeholder name at column {column} in step '{text}'")]
    EmptyPlaceholder { text: String, column: usize },

    /// `{...}` holding something other than `static`, `dynamic` or `special`.
    #[error("unknown marker '{{{marker}}}' at column {column} in step '{text}'")]
    UnknownMarker {
        text: String,
        marker: String,
        column: usize,
    },
}

/// Errors raised while assembling the specification model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The number of carried values does not match the step's placeholders.
    #[error("step '{text}' has {expected} placeholder(s) but {found} value(s) were supplied")]
    ArityMismatch {
        text: String,
        expected: usize,
        found: usize,
    },

    /// Two concept definitions share one invocation signature.
    #[error("duplicate concept '{signature}' in {file}: first defined in {first_file}")]
    DuplicateConcept {
        signature: String,
        file: String,
        first_file: String,
    },
}
