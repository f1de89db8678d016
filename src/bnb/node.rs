//! Search-tree nodes.

use serde::Serialize;
use std::cmp::Ordering;

/// A partial solution on the branch-and-bound frontier.
///
/// Nodes are free-standing records: a child copies what it needs from its
/// parent, so the frontier is a plain heap with no links between entries.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Number of sorted items already decided.
    pub level: usize,
    pub weight: f64,
    pub value: f64,
    /// Sorted positions of the items included so far, ascending.
    pub taken: Vec<usize>,
    /// Fractional-relaxation value of the best completion of this node.
    pub upper_bound: f64,
    /// Creation order, used to break ties deterministically.
    pub seq: u64,
}

impl Node {
    pub(crate) fn root(upper_bound: f64) -> Self {
        Self {
            level: 0,
            weight: 0.0,
            value: 0.0,
            taken: Vec::new(),
            upper_bound,
            seq: 0,
        }
    }
}

// Max-heap order: highest bound first, then the deeper node, then the
// older node.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.upper_bound
            .total_cmp(&other.upper_bound)
            .then_with(|| self.level.cmp(&other.level))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}
