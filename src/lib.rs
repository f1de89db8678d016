//! 0/1 knapsack solvers.
//!
//! Four strategies over one instance model:
//!
//! - **Greedy**: density-ordered scan, either integral (a fast heuristic)
//!   or fractional (the linear-relaxation optimum, an upper bound).
//! - **Tabulation DP**: exact, bottom-up over a weight-indexed table.
//! - **Memoized DP**: exact, top-down over reachable states with an
//!   unbounded or LRU memo table, evaluated on an explicit stack.
//! - **Branch-and-Bound**: exact, best-first tree search pruned by the
//!   fractional-greedy bound.
//!
//! Every strategy runs through [`solver::Solver`], which first settles the
//! trivial cases (nothing fits, everything fits) and only then invokes the
//! strategy's search.
//!
//! # Example
//!
//! ```
//! use knapsack_engine::dp::TabulationSolver;
//! use knapsack_engine::instance::InstanceBuilder;
//! use knapsack_engine::solver::Solver;
//!
//! let instance = InstanceBuilder::new(6.0)
//!     .item(0, 8.0, 4.0)
//!     .item(1, 10.0, 5.0)
//!     .build();
//! let solution = Solver::new(&instance, TabulationSolver::default()).run()?;
//! assert_eq!(solution.total_value(), 10.0);
//! assert_eq!(solution.total_weight(), 5.0);
//! # Ok::<(), knapsack_engine::SolveError>(())
//! ```
//!
//! # Architecture
//!
//! The engine is synchronous and single-threaded per solve; no state is
//! shared between solver instances. Drivers that need throughput solve
//! independent requests concurrently ([`driver::solve_batch`] with the
//! `parallel` feature). Long searches poll a
//! [`StopSignal`](solver::StopSignal) so callers can impose deadlines.

pub mod bnb;
pub mod dp;
pub mod driver;
pub mod error;
pub mod greedy;
pub mod instance;
pub mod solver;

#[cfg(test)]
mod fixtures;

pub use error::{DriverError, SolveError};
