//! Solve results.

use crate::instance::Item;
use serde::{Deserialize, Serialize};

/// How a [`Solution`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolveStatus {
    /// Fixed by a trivial-case check; no search ran.
    Trivial,
    /// Proven optimal by an exact strategy.
    Optimal,
    /// Feasible, produced by integral greedy.
    Heuristic,
    /// Fractional relaxation value; one item may be split.
    Relaxation,
    /// Stopped by the cancellation flag; the incumbent is returned.
    Cancelled,
    /// Stopped by the deadline; the incumbent is returned.
    TimedOut,
    /// Branch-and-bound exhausted its node budget; the incumbent is returned.
    NodeLimit,
}

impl SolveStatus {
    /// Whether the search ran to completion.
    pub fn is_complete(self) -> bool {
        !matches!(
            self,
            SolveStatus::Cancelled | SolveStatus::TimedOut | SolveStatus::NodeLimit
        )
    }
}

/// The one item fractional greedy divides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitItem {
    pub index: usize,
    /// Share of the item taken, in `[0, 1)`.
    pub fraction: f64,
}

/// Counters collected while solving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Branch-and-bound nodes popped and expanded.
    pub nodes_expanded: usize,
    /// Branch-and-bound children discarded by the bound test.
    pub nodes_pruned: usize,
    /// Branch-and-bound children pushed onto the frontier.
    pub nodes_enqueued: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
    /// Fractional-relaxation evaluations.
    pub bound_evaluations: usize,
    /// Memoized DP cache hits.
    pub cache_hits: usize,
    /// Memoized DP cache misses (subproblems evaluated).
    pub cache_misses: usize,
    /// Tabulation DP cells filled.
    pub table_cells: usize,
}

/// Output record for one selected item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub value: f64,
    pub weight: f64,
    pub index: usize,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            value: item.value(),
            weight: item.weight(),
            index: item.index(),
            name: item.name().map(str::to_owned),
        }
    }
}

/// The outcome of one solve: the selected items and their totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    items: Vec<Item>,
    total_value: f64,
    total_weight: f64,
    status: SolveStatus,
    split: Option<SplitItem>,
    stats: SearchStats,
}

impl Solution {
    /// Creates a solution whose totals are the plain sums over `items`.
    pub fn from_items(items: Vec<Item>, status: SolveStatus) -> Self {
        let total_value = items.iter().map(Item::value).sum();
        let total_weight = items.iter().map(Item::weight).sum();
        Self::new(items, total_value, total_weight, status)
    }

    /// Creates a solution with explicit totals.
    pub fn new(items: Vec<Item>, total_value: f64, total_weight: f64, status: SolveStatus) -> Self {
        Self {
            items,
            total_value,
            total_weight,
            status,
            split: None,
            stats: SearchStats::default(),
        }
    }

    /// The empty selection.
    pub fn empty(status: SolveStatus) -> Self {
        Self::new(Vec::new(), 0.0, 0.0, status)
    }

    pub(crate) fn with_split(mut self, split: Option<SplitItem>) -> Self {
        self.split = split;
        self
    }

    /// Caps the reported weight at `capacity`.
    ///
    /// A selection accepted within the capacity tolerance may sum to a hair
    /// over the capacity; its weight is reported as the capacity itself.
    pub(crate) fn within_capacity(mut self, capacity: f64) -> Self {
        if self.total_weight > capacity {
            self.total_weight = capacity;
        }
        self
    }

    pub(crate) fn with_stats(mut self, stats: SearchStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Selected items, in the order the strategy chose them.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Indices of the selected items, in the order the strategy chose them.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.items.iter().map(Item::index).collect()
    }

    /// Selected items as output records.
    pub fn to_records(&self) -> Vec<ItemRecord> {
        self.items.iter().map(ItemRecord::from).collect()
    }

    pub fn status(&self) -> SolveStatus {
        self.status
    }

    pub fn split(&self) -> Option<SplitItem> {
        self.split
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
