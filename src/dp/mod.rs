//! Exact dynamic-programming solvers.
//!
//! Both solvers evaluate the same recurrence over `(m, remaining)`, the
//! best value obtainable from the first `m` items within the remaining
//! capacity:
//!
//! ```text
//! value(0, r) = 0
//! value(m, r) = value(m-1, r)                                     if w[m-1] > r
//!             = max(value(m-1, r), v[m-1] + value(m-1, r - w[m-1]))  otherwise
//! ```
//!
//! - [`TabulationSolver`] fills the whole `(n + 1) x (capacity + 1)` table
//!   bottom-up and therefore needs whole-number capacity and weights.
//! - [`MemoSolver`] evaluates top-down on an explicit work stack, visiting
//!   only reachable states, with an unbounded or LRU memo table. It takes
//!   real-valued weights; `w[m-1] > r` is decided with the instance's
//!   [`tolerance`](crate::instance::ProblemInstance::tolerance) so rounding
//!   in `r` cannot reject an item that fits exactly.
//!
//! Both reconstruct the selection by walking `m` downward and taking item
//! `m - 1` whenever `value(m, r) != value(m - 1, r)`. Item order does not
//! matter to either.
//!
//! # References
//!
//! - Bellman (1957), "Dynamic Programming"
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", ch. 2

mod cache;
mod config;
mod memo;
mod tabulation;

pub use config::{CachePolicy, MemoConfig, TabulationConfig};
pub use memo::MemoSolver;
pub use tabulation::TabulationSolver;
