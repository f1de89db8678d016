//! Best-first Branch-and-Bound (B&B).
//!
//! Explores a binary tree of include/exclude decisions over the items in
//! density order. Every node carries an upper bound computed by fractional
//! greedy from the node's level and accumulated weight/value
//! ([`crate::greedy::fractional_bound`]). The frontier is a binary heap
//! ordered by that bound, so the most promising node is always expanded
//! next.
//!
//! A child is enqueued only if its bound is strictly greater than the
//! incumbent's value; a node popped after the incumbent has caught up with
//! its bound is discarded unexpanded. Because the relaxation bound is
//! admissible, the search returns the same optimum as the DP solvers.
//!
//! The loop polls the solver's [`StopSignal`](crate::solver::StopSignal)
//! between expansions and honours [`BnbConfig::max_nodes`]; either way the
//! incumbent found so far is returned with a non-optimal status.
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete
//!   Programming Problems"
//! - Kolesar (1967), "A Branch and Bound Algorithm for the Knapsack Problem"

mod config;
mod node;
mod runner;

pub use config::BnbConfig;
pub use node::Node;
pub use runner::BnbSolver;
