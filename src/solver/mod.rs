//! The contract every strategy implements.
//!
//! A [`Solver`] borrows one [`ProblemInstance`], pairs it with one
//! [`Strategy`], and is consumed by [`Solver::run`]. Running it goes
//! through two states:
//!
//! 1. **Trivial check**: if every item is heavier than the capacity the
//!    answer is the empty set; if all items fit together the answer is every
//!    item. Either way the strategy's search is never invoked.
//! 2. **Search**: otherwise [`Strategy::solve_core`] runs.
//!
//! Preconditions ([`Strategy::check`]) are evaluated before either state, so
//! a misconfigured strategy fails before doing any work.

mod signal;
mod solution;

pub use signal::StopSignal;
pub use solution::{ItemRecord, SearchStats, Solution, SolveStatus, SplitItem};

use crate::error::SolveError;
use crate::instance::ProblemInstance;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// Identifies a strategy at the driver boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolverKind {
    Greedy,
    DynProg,
    DynProgRecurrent,
    #[default]
    BranchAndBound,
}

impl SolverKind {
    pub const ALL: [SolverKind; 4] = [
        SolverKind::Greedy,
        SolverKind::DynProg,
        SolverKind::DynProgRecurrent,
        SolverKind::BranchAndBound,
    ];

    /// Whether the strategy needs items in density order.
    pub fn requires_sorted(self) -> bool {
        match self {
            SolverKind::Greedy | SolverKind::BranchAndBound => true,
            SolverKind::DynProg | SolverKind::DynProgRecurrent => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Greedy => "greedy",
            SolverKind::DynProg => "tabulation dp",
            SolverKind::DynProgRecurrent => "memoized dp",
            SolverKind::BranchAndBound => "branch-and-bound",
        }
    }
}

/// A knapsack search strategy.
pub trait Strategy {
    fn kind(&self) -> SolverKind;

    /// Verifies the strategy's preconditions on `instance`.
    ///
    /// The default enforces density order for strategies that require it.
    fn check(&self, instance: &ProblemInstance) -> Result<(), SolveError> {
        let kind = self.kind();
        if kind.requires_sorted() && !instance.is_density_sorted() {
            return Err(SolveError::NotDensitySorted {
                solver: kind.name(),
            });
        }
        Ok(())
    }

    /// Runs the strategy-specific search on a non-trivial instance.
    fn solve_core(
        &mut self,
        instance: &ProblemInstance,
        stop: &StopSignal,
    ) -> Result<Solution, SolveError>;
}

/// Returns the fixed answer when the instance is a trivial case.
pub fn trivial_solution(instance: &ProblemInstance) -> Option<Solution> {
    if instance.all_too_heavy() {
        Some(Solution::empty(SolveStatus::Trivial))
    } else if instance.all_fit() {
        Some(
            Solution::from_items(instance.items().to_vec(), SolveStatus::Trivial)
                .within_capacity(instance.capacity()),
        )
    } else {
        None
    }
}

/// Single-use pairing of an instance and a strategy.
///
/// # Examples
///
/// ```
/// use knapsack_engine::bnb::{BnbConfig, BnbSolver};
/// use knapsack_engine::instance::InstanceBuilder;
/// use knapsack_engine::solver::Solver;
///
/// let instance = InstanceBuilder::new(6.0)
///     .item(0, 8.0, 4.0)
///     .item(1, 10.0, 5.0)
///     .density_sorted(true)
///     .build();
/// let solution = Solver::new(&instance, BnbSolver::new(BnbConfig::default()))
///     .run()
///     .unwrap();
/// assert_eq!(solution.total_value(), 10.0);
/// assert_eq!(solution.selected_indices(), vec![1]);
/// ```
pub struct Solver<'a, S: Strategy> {
    instance: &'a ProblemInstance,
    strategy: S,
    stop: StopSignal,
}

impl<'a, S: Strategy> Solver<'a, S> {
    pub fn new(instance: &'a ProblemInstance, strategy: S) -> Self {
        Self {
            instance,
            strategy,
            stop: StopSignal::never(),
        }
    }

    /// Bounds the search's wall-clock time, measured from this call.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.stop = self.stop.with_time_limit(limit);
        self
    }

    /// Attaches an external cancellation flag.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop = self.stop.with_cancel(flag);
        self
    }

    pub fn instance(&self) -> &ProblemInstance {
        self.instance
    }

    /// Solves the instance.
    pub fn run(self) -> Result<Solution, SolveError> {
        let Self {
            instance,
            mut strategy,
            stop,
        } = self;
        let kind = strategy.kind();
        strategy.check(instance)?;

        if let Some(solution) = trivial_solution(instance) {
            debug!(
                "{}: trivial instance, {} of {} items selected",
                kind.name(),
                solution.items().len(),
                instance.len()
            );
            return Ok(solution);
        }

        debug!(
            "{}: searching {} items, capacity {}",
            kind.name(),
            instance.len(),
            instance.capacity()
        );
        let solution = strategy.solve_core(instance, &stop)?;
        debug!(
            "{}: value {}, weight {}, status {:?}",
            kind.name(),
            solution.total_value(),
            solution.total_weight(),
            solution.status()
        );
        Ok(solution)
    }

    /// Solves the instance, stopping early when `cancel` is set.
    pub fn run_with_cancel(self, cancel: Option<Arc<AtomicBool>>) -> Result<Solution, SolveError> {
        match cancel {
            Some(flag) => self.with_cancel(flag).run(),
            None => self.run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::InstanceBuilder;
    use test_log::test;

    /// Counts how often the search is entered.
    struct Probe {
        kind: SolverKind,
        calls: usize,
    }

    impl Strategy for &mut Probe {
        fn kind(&self) -> SolverKind {
            self.kind
        }

        fn solve_core(
            &mut self,
            _instance: &ProblemInstance,
            _stop: &StopSignal,
        ) -> Result<Solution, SolveError> {
            self.calls += 1;
            Ok(Solution::empty(SolveStatus::Optimal))
        }
    }

    #[test]
    fn test_kind_sortedness_mapping() {
        assert!(SolverKind::Greedy.requires_sorted());
        assert!(SolverKind::BranchAndBound.requires_sorted());
        assert!(!SolverKind::DynProg.requires_sorted());
        assert!(!SolverKind::DynProgRecurrent.requires_sorted());
    }

    #[test]
    fn test_kind_wire_names() {
        let kind: SolverKind = serde_json::from_str("\"DYN_PROG_RECURRENT\"").unwrap();
        assert_eq!(kind, SolverKind::DynProgRecurrent);
        assert_eq!(
            serde_json::to_string(&SolverKind::BranchAndBound).unwrap(),
            "\"BRANCH_AND_BOUND\""
        );
        assert_eq!(SolverKind::default(), SolverKind::BranchAndBound);
    }

    #[test]
    fn test_trivial_too_heavy_skips_search() {
        let instance = InstanceBuilder::new(3.0).item(0, 8.0, 4.0).build();
        let mut probe = Probe {
            kind: SolverKind::DynProg,
            calls: 0,
        };
        let solution = Solver::new(&instance, &mut probe).run().unwrap();
        assert_eq!(solution.status(), SolveStatus::Trivial);
        assert!(solution.items().is_empty());
        assert_eq!(probe.calls, 0);
    }

    #[test]
    fn test_trivial_all_fit_skips_search() {
        let instance = InstanceBuilder::new(20.0)
            .item(0, 8.0, 4.0)
            .item(1, 10.0, 5.0)
            .build();
        let mut probe = Probe {
            kind: SolverKind::DynProg,
            calls: 0,
        };
        let solution = Solver::new(&instance, &mut probe).run().unwrap();
        assert_eq!(solution.total_value(), 18.0);
        assert_eq!(solution.selected_indices(), vec![0, 1]);
        assert_eq!(probe.calls, 0);
    }

    #[test]
    fn test_search_runs_otherwise() {
        let instance = InstanceBuilder::new(6.0)
            .item(0, 8.0, 4.0)
            .item(1, 10.0, 5.0)
            .build();
        let mut probe = Probe {
            kind: SolverKind::DynProg,
            calls: 0,
        };
        Solver::new(&instance, &mut probe).run().unwrap();
        assert_eq!(probe.calls, 1);
    }

    #[test]
    fn test_unsorted_precondition_fails_before_trivial_check() {
        // all items fit, but the precondition is checked first
        let instance = InstanceBuilder::new(20.0).item(0, 8.0, 4.0).build();
        let mut probe = Probe {
            kind: SolverKind::Greedy,
            calls: 0,
        };
        let err = Solver::new(&instance, &mut probe).run().unwrap_err();
        assert_eq!(err, SolveError::NotDensitySorted { solver: "greedy" });
    }
}
