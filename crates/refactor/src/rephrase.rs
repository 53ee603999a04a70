//! Rewrites every occurrence of one step across specifications and
//! concept bodies, recording which documents were touched.

use crate::generate;
use crate::order::ArgOrder;
use crate::report::RephraseOutcome;
use rephrase_core::{ConceptDictionary, Item, SpecArena, Step, StepTemplate};

pub(crate) struct RephraseEngine {
    old: StepTemplate,
    new: StepTemplate,
    old_signature: String,
    new_signature: String,
    order: ArgOrder,
}

impl RephraseEngine {
    pub(crate) fn new(old: StepTemplate, new: StepTemplate, order: ArgOrder) -> Self {
        RephraseEngine {
            old_signature: old.parameterized(),
            new_signature: new.parameterized(),
            old,
            new,
            order,
        }
    }

    pub(crate) fn old_template(&self) -> &StepTemplate {
        &self.old
    }

    pub(crate) fn new_template(&self) -> &StepTemplate {
        &self.new
    }

    pub(crate) fn order(&self) -> &ArgOrder {
        &self.order
    }

    pub(crate) fn rephrase(
        &self,
        specs: &mut SpecArena,
        concepts: &mut ConceptDictionary,
    ) -> RephraseOutcome {
        let mut outcome = RephraseOutcome::default();

        for (id, spec) in specs.iter_mut() {
            let mut rewritten = 0usize;
            for step in spec.steps_mut() {
                if self.rename_step(step, &mut outcome) {
                    rewritten += 1;
                }
            }
            outcome.record_spec(id, rewritten);
        }

        for file in concepts.files() {
            outcome.record_concept_file(file, 0);
        }
        for (signature, concept) in concepts.iter_mut() {
            let rewritten = self.rename_items(&mut concept.step.items, &mut outcome);
            if rewritten > 0 {
                tracing::trace!(
                    concept = signature,
                    file = %concept.file,
                    rewritten,
                    "rephrased concept body"
                );
            }
            outcome.record_concept_file(&concept.file, rewritten);
        }

        tracing::debug!(
            old = %self.old,
            new = %self.new,
            specs = outcome.modified_specs().count(),
            concept_files = outcome.modified_concept_files().count(),
            steps = outcome.steps_rewritten(),
            concept_rewritten = outcome.concept_rewritten(),
            "rephrase complete"
        );
        outcome
    }

    /// Depth-first over nested items; returns the number of steps rewritten.
    fn rename_items(&self, items: &mut [Item], outcome: &mut RephraseOutcome) -> usize {
        let mut rewritten = 0usize;
        for item in items.iter_mut() {
            if let Item::Step(step) = item {
                if self.rename_step(step, outcome) {
                    rewritten += 1;
                }
                rewritten += self.rename_items(&mut step.items, outcome);
            }
        }
        rewritten
    }

    /// A step matches when its signature equals the old one and it carries
    /// one argument per old placeholder.
    fn rename_step(&self, step: &mut Step, outcome: &mut RephraseOutcome) -> bool {
        if step.value.trim() != self.old_signature
            || step.args.len() != self.old.placeholder_count()
        {
            return false;
        }
        if step.is_concept {
            outcome.record_concept_rewrite();
        }
        let rewrite = generate::rewrite(&self.new, &step.args, &self.order);
        tracing::trace!(
            line = step.line,
            from = %step.line_text,
            to = %rewrite.text,
            "rewrote step"
        );
        step.value = self.new_signature.clone();
        step.line_text = rewrite.text;
        step.args = rewrite.args;
        true
    }
}
