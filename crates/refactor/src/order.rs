//! Argument order resolution between an old and a new step template.

use serde::Serialize;

/// For each slot of the new template, the index of the old argument that
/// supplies its value, or `None` for a parameter the old step never had.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgOrder {
    slots: Vec<Option<usize>>,
}

impl ArgOrder {
    pub fn from_slots(slots: Vec<Option<usize>>) -> Self {
        ArgOrder { slots }
    }

    /// Old argument index feeding new slot `slot`.
    pub fn source(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }

    /// New slots with no old source.
    pub fn introduced(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(j, _)| j)
            .collect()
    }

    /// Old argument indices (below `old_len`) that no new slot consumes.
    pub fn dropped(&self, old_len: usize) -> Vec<usize> {
        (0..old_len)
            .filter(|i| !self.slots.contains(&Some(*i)))
            .collect()
    }

    /// True when every slot keeps its own position.
    pub fn is_identity(&self) -> bool {
        self.slots
            .iter()
            .enumerate()
            .all(|(j, s)| *s == Some(j))
    }
}

/// Match new placeholder names against old ones.
///
/// Each new slot, scanned left to right, takes the first old placeholder
/// with the same name that no earlier slot has taken. Unmatched slots are
/// `None`; unmatched old placeholders are dropped.
pub fn resolve_arg_order(old_names: &[String], new_names: &[String]) -> ArgOrder {
    let mut taken = vec![false; old_names.len()];
    let slots = new_names
        .iter()
        .map(|name| {
            let source = old_names
                .iter()
                .enumerate()
                .position(|(i, old)| !taken[i] && old == name);
            if let Some(i) = source {
                taken[i] = true;
            }
            source
        })
        .collect();
    ArgOrder { slots }
}
