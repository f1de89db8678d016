//! Best-first branch-and-bound loop.

use super::config::BnbConfig;
use super::node::Node;
use crate::error::SolveError;
use crate::greedy::fractional_bound;
use crate::instance::ProblemInstance;
use crate::solver::{SearchStats, Solution, SolveStatus, SolverKind, StopSignal, Strategy};
use log::{debug, trace, warn};
use std::collections::BinaryHeap;

/// Frontier plus the bookkeeping shared by every expansion.
struct Search<'a> {
    instance: &'a ProblemInstance,
    frontier: BinaryHeap<Node>,
    incumbent: Option<Node>,
    best_value: f64,
    next_seq: u64,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(instance: &'a ProblemInstance) -> Self {
        let mut search = Self {
            instance,
            frontier: BinaryHeap::new(),
            incumbent: None,
            best_value: f64::NEG_INFINITY,
            next_seq: 1,
            stats: SearchStats::default(),
        };
        let root = Node::root(search.bound(0, 0.0, 0.0));
        search.frontier.push(root);
        search
    }

    fn bound(&mut self, level: usize, weight: f64, value: f64) -> f64 {
        self.stats.bound_evaluations += 1;
        fractional_bound(self.instance, level, weight, value)
    }

    /// Records `node` as the incumbent if it improves on it.
    fn offer(&mut self, node: &Node) {
        if node.value > self.best_value {
            self.best_value = node.value;
            self.incumbent = Some(node.clone());
        }
    }

    /// Creates a child at `parent.level + 1` and enqueues it unless its
    /// bound cannot beat the incumbent.
    fn branch(&mut self, parent: &Node, include: bool) {
        let level = parent.level + 1;
        let (weight, value, taken) = if include {
            let item = &self.instance.items()[parent.level];
            let mut taken = Vec::with_capacity(parent.taken.len() + 1);
            taken.extend_from_slice(&parent.taken);
            taken.push(parent.level);
            (parent.weight + item.weight(), parent.value + item.value(), taken)
        } else {
            (parent.weight, parent.value, parent.taken.clone())
        };

        let upper_bound = self.bound(level, weight, value);
        if upper_bound > self.best_value {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.frontier.push(Node {
                level,
                weight,
                value,
                taken,
                upper_bound,
                seq,
            });
            self.stats.nodes_enqueued += 1;
            self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
        } else {
            self.stats.nodes_pruned += 1;
        }
    }

    fn expand(&mut self, node: &Node) {
        self.stats.nodes_expanded += 1;
        trace!(
            "bnb: expand level {} weight {} value {} bound {}",
            node.level,
            node.weight,
            node.value,
            node.upper_bound
        );
        let item = &self.instance.items()[node.level];
        if self.instance.fits(node.weight + item.weight()) {
            self.branch(node, true);
        }
        self.branch(node, false);
    }

    fn into_solution(self, status: SolveStatus) -> Solution {
        let items = self.instance.items();
        let solution = match self.incumbent {
            Some(best) => {
                let chosen = best.taken.iter().map(|&pos| items[pos].clone()).collect();
                Solution::new(chosen, best.value, best.weight, status)
                    .within_capacity(self.instance.capacity())
            }
            None => Solution::empty(status),
        };
        solution.with_stats(self.stats)
    }
}

/// Exact solver: best-first search over include/exclude decisions in
/// density order, pruned by the fractional-greedy bound.
#[derive(Debug, Clone, Default)]
pub struct BnbSolver {
    config: BnbConfig,
}

impl BnbSolver {
    pub fn new(config: BnbConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BnbConfig {
        &self.config
    }
}

impl Strategy for BnbSolver {
    fn kind(&self) -> SolverKind {
        SolverKind::BranchAndBound
    }

    fn check(&self, instance: &ProblemInstance) -> Result<(), SolveError> {
        self.config.validate()?;
        if !instance.is_density_sorted() {
            return Err(SolveError::NotDensitySorted {
                solver: self.kind().name(),
            });
        }
        Ok(())
    }

    fn solve_core(
        &mut self,
        instance: &ProblemInstance,
        stop: &StopSignal,
    ) -> Result<Solution, SolveError> {
        let n = instance.len();
        let mut search = Search::new(instance);
        let mut status = SolveStatus::Optimal;

        loop {
            if let Some(stopped) = stop.poll() {
                status = stopped;
                break;
            }
            if self
                .config
                .max_nodes
                .is_some_and(|limit| search.stats.nodes_expanded >= limit)
            {
                status = SolveStatus::NodeLimit;
                break;
            }
            let Some(node) = search.frontier.pop() else {
                break;
            };

            // the incumbent may have improved since this node was enqueued
            if node.upper_bound <= search.best_value {
                search.stats.nodes_pruned += 1;
                continue;
            }
            search.offer(&node);
            if node.level < n {
                search.expand(&node);
            }
        }

        if status.is_complete() {
            debug!(
                "bnb: optimum {} after {} expansions, {} pruned",
                search.best_value, search.stats.nodes_expanded, search.stats.nodes_pruned
            );
        } else {
            warn!(
                "bnb: stopped ({status:?}) with incumbent {} and {} open nodes",
                search.best_value,
                search.frontier.len()
            );
        }
        Ok(search.into_solution(status))
    }
}
