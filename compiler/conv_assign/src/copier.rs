//! Struct pairs copied by one build.
//!
//! The root pair and every nested pair the builder recurses into is
//! recorded once; repeats bump the use count. The set is informational and
//! never influences matching.

use conv_types::Idx;
use rustc_hash::FxHashMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Copier {
    pub lhs: Idx,
    pub rhs: Idx,
    pub uses: u32,
}

#[derive(Clone, Debug, Default)]
pub struct CopierSet {
    entries: Vec<Copier>,
    index: FxHashMap<(Idx, Idx), usize>,
}

impl CopierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a use of the `(lhs, rhs)` pair and return its use count.
    pub fn register(&mut self, lhs: Idx, rhs: Idx) -> u32 {
        if let Some(&slot) = self.index.get(&(lhs, rhs)) {
            let entry = &mut self.entries[slot];
            entry.uses += 1;
            return entry.uses;
        }
        self.index.insert((lhs, rhs), self.entries.len());
        self.entries.push(Copier { lhs, rhs, uses: 1 });
        1
    }

    pub fn get(&self, lhs: Idx, rhs: Idx) -> Option<&Copier> {
        self.index.get(&(lhs, rhs)).map(|&slot| &self.entries[slot])
    }

    /// Copiers in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Copier> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
