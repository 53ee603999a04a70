//! Rename agent: validates an old/new step pair and applies the rename.

use crate::error::{RefactorError, StepSide};
use crate::generate;
use crate::order::{resolve_arg_order, ArgOrder};
use crate::rephrase::RephraseEngine;
use crate::report::RephraseOutcome;
use rephrase_core::{ConceptDictionary, SpecArena, StepTemplate, TemplateCategory};
use serde::{Deserialize, Serialize};

/// A rename as handed over by an editor integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRequest {
    pub old_step: String,
    pub new_step: String,
}

impl RenameRequest {
    pub fn from_json(src: &str) -> Result<Self, RefactorError> {
        Ok(serde_json::from_str(src)?)
    }
}

pub struct RephraseAgent {
    engine: RephraseEngine,
}

impl RephraseAgent {
    /// Build an agent renaming `old_step` to `new_step`.
    ///
    /// Fails if either text is empty or malformed, or if one template uses
    /// named placeholders and the other unnamed positional markers.
    pub fn new(old_step: &str, new_step: &str) -> Result<Self, RefactorError> {
        let old = parse_side(old_step, StepSide::Old)?;
        let new = parse_side(new_step, StepSide::New)?;
        check_compatible(&old, &new)?;

        let order = resolve_arg_order(&old.placeholder_names(), &new.placeholder_names());
        tracing::debug!(
            old = %old,
            new = %new,
            old_arity = old.placeholder_count(),
            new_arity = new.placeholder_count(),
            order = ?order.slots(),
            "rephrase agent ready"
        );
        Ok(RephraseAgent {
            engine: RephraseEngine::new(old, new, order),
        })
    }

    pub fn from_request(request: &RenameRequest) -> Result<Self, RefactorError> {
        RephraseAgent::new(&request.old_step, &request.new_step)
    }

    pub fn old_template(&self) -> &StepTemplate {
        self.engine.old_template()
    }

    pub fn new_template(&self) -> &StepTemplate {
        self.engine.new_template()
    }

    /// Which old argument feeds each slot of the new template.
    pub fn arg_order(&self) -> &ArgOrder {
        self.engine.order()
    }

    /// The new step text for one occurrence's argument values.
    pub fn generate_step_name(&self, values: &[String], order: &ArgOrder) -> String {
        generate::generate_step_name(self.engine.new_template(), values, order)
    }

    /// Rename every occurrence of the old step in `specs` and in the bodies
    /// of `concepts`.
    pub fn rephrase(
        &self,
        specs: &mut SpecArena,
        concepts: &mut ConceptDictionary,
    ) -> RephraseOutcome {
        self.engine.rephrase(specs, concepts)
    }
}

/// Shorthand for [`RephraseAgent::new`].
pub fn create_agent(old_step: &str, new_step: &str) -> Result<RephraseAgent, RefactorError> {
    RephraseAgent::new(old_step, new_step)
}

fn parse_side(text: &str, side: StepSide) -> Result<StepTemplate, RefactorError> {
    if text.trim().is_empty() {
        return Err(RefactorError::EmptyTemplate { side });
    }
    StepTemplate::parse(text).map_err(|source| RefactorError::InvalidTemplate { side, source })
}

fn check_compatible(old: &StepTemplate, new: &StepTemplate) -> Result<(), RefactorError> {
    let (old_category, new_category) = (old.category(), new.category());
    let compatible = old_category == new_category
        || old_category == TemplateCategory::Plain
        || new_category == TemplateCategory::Plain;
    if compatible {
        return Ok(());
    }
    Err(RefactorError::IncompatibleTemplates {
        old_step: old.text().to_owned(),
        old_category,
        new_step: new.text().to_owned(),
        new_category,
    })
}
