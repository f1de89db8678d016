//! Greedy knapsack heuristic.
//!
//! Scans items in non-increasing value density and takes each one that
//! still fits. In integral mode this is a fast heuristic with no optimality
//! guarantee. In fractional mode the first item that does not fit is split
//! to fill the capacity exactly and the scan stops; the result is the
//! optimum of the linear relaxation and hence an upper bound on the 0/1
//! optimum, which is what [`crate::bnb`] uses to prune.
//!
//! The instance must already be density-sorted. The solver refuses an
//! unsorted instance instead of sorting it behind the caller's back.
//!
//! # References
//!
//! - Dantzig (1957), "Discrete-Variable Extremum Problems"

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::{fractional_bound, GreedySolver};
