//! Concept dictionary: concept definitions keyed by invocation signature,
//! each remembering the file it was loaded from.

use crate::ast::Step;
use crate::error::ModelError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    pub step: Step,
    pub file: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConceptDictionary {
    concepts: BTreeMap<String, Concept>,
    /// Distinct source files, first-registration order
    files: Vec<String>,
}

impl ConceptDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the concept definitions parsed from `file`.
    ///
    /// Nothing is registered if any signature is already taken, either by
    /// an earlier file or by another step in the same batch.
    pub fn add(&mut self, steps: Vec<Step>, file: &str) -> Result<(), ModelError> {
        let mut batch: BTreeMap<String, Concept> = BTreeMap::new();
        for mut step in steps {
            let signature = step.value.trim().to_owned();
            let first_file = self
                .concepts
                .get(&signature)
                .or_else(|| batch.get(&signature))
                .map(|c| c.file.clone());
            if let Some(first_file) = first_file {
                return Err(ModelError::DuplicateConcept {
                    signature,
                    file: file.to_owned(),
                    first_file,
                });
            }
            step.is_concept = true;
            batch.insert(
                signature,
                Concept {
                    step,
                    file: file.to_owned(),
                },
            );
        }

        self.concepts.extend(batch);
        if !self.files.iter().any(|f| f == file) {
            self.files.push(file.to_owned());
        }
        Ok(())
    }

    pub fn get(&self, signature: &str) -> Option<&Concept> {
        self.concepts.get(signature.trim())
    }

    pub fn get_mut(&mut self, signature: &str) -> Option<&mut Concept> {
        self.concepts.get_mut(signature.trim())
    }

    pub fn contains(&self, signature: &str) -> bool {
        self.concepts.contains_key(signature.trim())
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Concept)> {
        self.concepts.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Concept)> {
        self.concepts.iter_mut().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept(text: &str) -> Step {
        Step::concept(text, Vec::new()).unwrap()
    }

    #[test]
    fn add_keys_by_signature() {
        let mut dict = ConceptDictionary::new();
        dict.add(vec![concept("login as <user>")], "auth.cpt").unwrap();
        assert!(dict.contains("login as {}"));
        assert_eq!(dict.get("login as {}").unwrap().file, "auth.cpt");
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn add_marks_steps_as_concepts() {
        let mut dict = ConceptDictionary::new();
        dict.add(vec![Step::parse("plain").unwrap()], "a.cpt").unwrap();
        assert!(dict.get("plain").unwrap().step.is_concept);
    }

    #[test]
    fn files_are_distinct_and_ordered() {
        let mut dict = ConceptDictionary::new();
        dict.add(vec![concept("b")], "z.cpt").unwrap();
        dict.add(vec![concept("a")], "y.cpt").unwrap();
        dict.add(vec![concept("c")], "z.cpt").unwrap();
        dict.add(Vec::new(), "empty.cpt").unwrap();
        assert_eq!(dict.files(), ["z.cpt", "y.cpt", "empty.cpt"]);
    }

    #[test]
    fn duplicate_signature_across_files() {
        let mut dict = ConceptDictionary::new();
        dict.add(vec![concept("open <page>")], "a.cpt").unwrap();
        let err = dict.add(vec![concept("open \"home\"")], "b.cpt").unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateConcept {
                signature: "open {}".to_string(),
                file: "b.cpt".to_string(),
                first_file: "a.cpt".to_string(),
            }
        );
        assert_eq!(dict.files(), ["a.cpt"]);
    }

    #[test]
    fn duplicate_in_one_batch_registers_nothing() {
        let mut dict = ConceptDictionary::new();
        let err = dict
            .add(vec![concept("x"), concept("y"), concept("x")], "a.cpt")
            .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateConcept { .. }));
        assert!(dict.is_empty());
        assert!(dict.files().is_empty());
    }
}
