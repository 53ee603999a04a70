//! Arena of specifications addressed by stable integer handles.
//!
//! Refactoring reports per-specification results keyed by [`SpecId`], so a
//! specification keeps its handle for as long as the arena lives.

use crate::ast::Specification;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecId(usize);

impl SpecId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spec#{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpecArena {
    specs: Vec<Specification>,
}

impl SpecArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, spec: Specification) -> SpecId {
        self.specs.push(spec);
        SpecId(self.specs.len() - 1)
    }

    pub fn get(&self, id: SpecId) -> Option<&Specification> {
        self.specs.get(id.0)
    }

    pub fn get_mut(&mut self, id: SpecId) -> Option<&mut Specification> {
        self.specs.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = SpecId> {
        (0..self.specs.len()).map(SpecId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpecId, &Specification)> {
        self.specs.iter().enumerate().map(|(i, s)| (SpecId(i), s))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SpecId, &mut Specification)> {
        self.specs
            .iter_mut()
            .enumerate()
            .map(|(i, s)| (SpecId(i), s))
    }
}

impl Index<SpecId> for SpecArena {
    type Output = Specification;

    fn index(&self, id: SpecId) -> &Specification {
        &self.specs[id.0]
    }
}

impl IndexMut<SpecId> for SpecArena {
    fn index_mut(&mut self, id: SpecId) -> &mut Specification {
        &mut self.specs[id.0]
    }
}

impl FromIterator<Specification> for SpecArena {
    fn from_iter<I: IntoIterator<Item = Specification>>(iter: I) -> Self {
        SpecArena {
            specs: iter.into_iter().collect(),
        }
    }
}
