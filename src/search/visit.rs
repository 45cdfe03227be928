//! Branch-local visit set: a small bitset over `NodeId`.

use smallvec::{SmallVec, smallvec};

use crate::model::NodeId;

const WORD_BITS: usize = u64::BITS as usize;

/// Nodes on the in-progress route of one search branch.
///
/// Each frame owns its own copy, so a sibling branch never observes marks
/// made by another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitSet {
    words: SmallVec<[u64; 2]>,
}

impl VisitSet {
    /// Empty set sized for a graph of `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self { words: smallvec![0; nodes.div_ceil(WORD_BITS)] }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        let (word, bit) = split(id);
        self.words.get(word).is_some_and(|w| w & bit != 0)
    }

    /// Mark `id`. Returns `false` if it was already marked.
    pub fn insert(&mut self, id: NodeId) -> bool {
        let (word, bit) = split(id);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        let fresh = self.words[word] & bit == 0;
        self.words[word] |= bit;
        fresh
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }
}

fn split(id: NodeId) -> (usize, u64) {
    let i = id.index();
    (i / WORD_BITS, 1u64 << (i % WORD_BITS))
}
