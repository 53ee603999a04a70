//! RephraseOutcome -- which specifications and concept files a rename
//! touched.
//!
//! Every specification and every concept file that was checked has an
//! entry, so "checked, unaffected" (`false`) is distinguishable from
//! "not checked" (absent).

use rephrase_core::SpecId;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RephraseOutcome {
    specs: BTreeMap<SpecId, bool>,
    concept_files: BTreeMap<String, bool>,
    steps_rewritten: usize,
    concept_rewritten: bool,
}

impl RephraseOutcome {
    /// Record `rewritten` steps in a specification. Once a specification
    /// is marked modified it stays modified.
    pub(crate) fn record_spec(&mut self, id: SpecId, rewritten: usize) {
        let entry = self.specs.entry(id).or_insert(false);
        *entry |= rewritten > 0;
        self.steps_rewritten += rewritten;
    }

    pub(crate) fn record_concept_file(&mut self, file: &str, rewritten: usize) {
        let entry = self.concept_files.entry(file.to_owned()).or_insert(false);
        *entry |= rewritten > 0;
        self.steps_rewritten += rewritten;
    }

    /// Note that a rewritten step was itself a concept invocation.
    pub(crate) fn record_concept_rewrite(&mut self) {
        self.concept_rewritten = true;
    }

    pub fn specs(&self) -> &BTreeMap<SpecId, bool> {
        &self.specs
    }

    pub fn concept_files(&self) -> &BTreeMap<String, bool> {
        &self.concept_files
    }

    pub fn steps_rewritten(&self) -> usize {
        self.steps_rewritten
    }

    /// Whether any rewritten step was a concept invocation rather than a
    /// plain step.
    pub fn concept_rewritten(&self) -> bool {
        self.concept_rewritten
    }

    pub fn spec(&self, id: SpecId) -> Option<bool> {
        self.specs.get(&id).copied()
    }

    pub fn concept_file(&self, file: &str) -> Option<bool> {
        self.concept_files.get(file).copied()
    }

    pub fn modified_specs(&self) -> impl Iterator<Item = SpecId> + '_ {
        self.specs
            .iter()
            .filter(|(_, modified)| **modified)
            .map(|(id, _)| *id)
    }

    pub fn modified_concept_files(&self) -> impl Iterator<Item = &str> + '_ {
        self.concept_files
            .iter()
            .filter(|(_, modified)| **modified)
            .map(|(file, _)| file.as_str())
    }

    /// Returns true if any document was rewritten.
    pub fn is_modified(&self) -> bool {
        self.steps_rewritten > 0
    }

    /// Serialize the outcome to a JSON value.
    pub fn to_json(&self) -> Value {
        let specs: Vec<Value> = self
            .specs
            .iter()
            .map(|(id, modified)| {
                serde_json::json!({
                    "id": id.index(),
                    "modified": modified,
                })
            })
            .collect();

        let concept_files: Vec<Value> = self
            .concept_files
            .iter()
            .map(|(file, modified)| {
                serde_json::json!({
                    "file": file,
                    "modified": modified,
                })
            })
            .collect();

        serde_json::json!({
            "concept_files": concept_files,
            "concept_rewritten": self.concept_rewritten,
            "specs": specs,
            "steps_rewritten": self.steps_rewritten,
        })
    }
}
