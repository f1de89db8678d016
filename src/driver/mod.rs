//! JSON boundary between the engine and its driver.
//!
//! A driver submits a [`SolveRequest`] naming one of the four strategies
//! and an instance payload. The strategy decides whether the instance is
//! density-sorted on the way in (greedy and branch-and-bound need it), and
//! the selection comes back as a [`SolveResponse`]. An optional
//! [`SolveOptions`] object tunes the strategy: fractional greedy, an LRU
//! memo size, a branch-and-bound node budget, a time limit. Persistence, queueing,
//! and timing metadata stay on the driver's side.
//!
//! # Examples
//!
//! ```
//! use knapsack_engine::driver;
//!
//! let request = r#"{
//!     "solver_type": "DYN_PROG",
//!     "knapsack_data": {
//!         "num_items": 2,
//!         "capacity": 6,
//!         "items": [
//!             {"index": 0, "value": 8, "weight": 4},
//!             {"index": 1, "value": 10, "weight": 5}
//!         ]
//!     }
//! }"#;
//! let response = driver::solve_json(request).unwrap();
//! assert!(response.contains("\"value\":10.0"));
//! ```

mod types;

pub use types::{KnapsackData, SolveOptions, SolveRequest, SolveResponse};

use crate::bnb::BnbSolver;
use crate::dp::{MemoSolver, TabulationSolver};
use crate::error::{DriverError, SolveError};
use crate::greedy::GreedySolver;
use crate::instance::ProblemInstance;
use crate::solver::{Solution, Solver, SolverKind, Strategy};
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs the strategy named by `kind` with its default configuration.
///
/// Greedy runs in integral mode.
pub fn solve_instance(instance: &ProblemInstance, kind: SolverKind) -> Result<Solution, SolveError> {
    solve_instance_with(instance, kind, &SolveOptions::default())
}

/// Runs the strategy named by `kind`, configured from `options`.
pub fn solve_instance_with(
    instance: &ProblemInstance,
    kind: SolverKind,
    options: &SolveOptions,
) -> Result<Solution, SolveError> {
    match kind {
        SolverKind::Greedy => run(instance, GreedySolver::new(options.greedy_config()), options),
        SolverKind::DynProg => run(instance, TabulationSolver::default(), options),
        SolverKind::DynProgRecurrent => run(instance, MemoSolver::new(options.memo_config()), options),
        SolverKind::BranchAndBound => run(instance, BnbSolver::new(options.bnb_config()), options),
    }
}

fn run<S: Strategy>(
    instance: &ProblemInstance,
    strategy: S,
    options: &SolveOptions,
) -> Result<Solution, SolveError> {
    let solver = Solver::new(instance, strategy);
    match options.time_limit() {
        Some(limit) => solver.with_time_limit(limit).run(),
        None => solver.run(),
    }
}

/// Solves one request.
pub fn solve(request: &SolveRequest) -> Result<SolveResponse, DriverError> {
    let data = &request.knapsack_data;
    data.validate()?;
    let kind = request.solver_type;
    debug!("driver: {:?} on {} items", kind, data.num_items);

    let instance = data.to_instance(kind.requires_sorted());
    let solution = solve_instance_with(&instance, kind, &request.options)?;
    Ok(SolveResponse::from(&solution))
}

/// Parses a JSON request, solves it, and serializes the response.
pub fn solve_json(request: &str) -> Result<String, DriverError> {
    let request: SolveRequest = serde_json::from_str(request)?;
    let response = solve(&request)?;
    Ok(serde_json::to_string(&response)?)
}

/// Solves independent requests, in parallel with the `parallel` feature.
///
/// Results are returned in request order.
pub fn solve_batch(requests: &[SolveRequest]) -> Vec<Result<SolveResponse, DriverError>> {
    #[cfg(feature = "parallel")]
    {
        requests.par_iter().map(solve).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        requests.iter().map(solve).collect()
    }
}
