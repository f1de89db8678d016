//! Bottom-up dynamic programming over a weight-indexed table.

use super::config::TabulationConfig;
use crate::error::SolveError;
use crate::instance::ProblemInstance;
use crate::solver::{SearchStats, Solution, SolveStatus, SolverKind, StopSignal, Strategy};
use log::{debug, warn};

/// Converts a weight-like quantity to a table index.
fn as_index(field: &'static str, value: f64) -> Result<usize, SolveError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= usize::MAX as f64 {
        Ok(value as usize)
    } else {
        Err(SolveError::NonIntegral { field, value })
    }
}

/// Exact solver filling an `(n + 1) x (capacity + 1)` value table.
///
/// `T[m][c]` is the best value using the first `m` items within capacity
/// `c`. Time and memory are both `O(n * capacity)`, so capacity and item
/// weights must be whole numbers.
#[derive(Debug, Clone, Default)]
pub struct TabulationSolver {
    config: TabulationConfig,
}

impl TabulationSolver {
    pub fn new(config: TabulationConfig) -> Self {
        Self { config }
    }

    fn capacity_index(&self, instance: &ProblemInstance) -> Result<usize, SolveError> {
        as_index("capacity", instance.capacity())
    }
}

impl Strategy for TabulationSolver {
    fn kind(&self) -> SolverKind {
        SolverKind::DynProg
    }

    fn check(&self, instance: &ProblemInstance) -> Result<(), SolveError> {
        self.config.validate()?;
        let capacity = self.capacity_index(instance)?;
        for item in instance.items() {
            as_index("weight", item.weight())?;
        }
        let cells = (instance.len() as u128 + 1) * (capacity as u128 + 1);
        if cells > self.config.max_cells {
            return Err(SolveError::TableTooLarge {
                cells,
                limit: self.config.max_cells,
            });
        }
        Ok(())
    }

    fn solve_core(
        &mut self,
        instance: &ProblemInstance,
        stop: &StopSignal,
    ) -> Result<Solution, SolveError> {
        let items = instance.items();
        let n = items.len();
        let capacity = self.capacity_index(instance)?;
        let width = capacity + 1;
        let weights = items
            .iter()
            .map(|item| as_index("weight", item.weight()))
            .collect::<Result<Vec<_>, _>>()?;

        // row-major, row m holds T[m][*]; row 0 stays zero
        let mut table = vec![0.0f64; (n + 1) * width];
        let at = |m: usize, c: usize| m * width + c;

        for m in 1..=n {
            if let Some(status) = stop.poll() {
                warn!("tabulation dp: stopped at row {m} of {n} ({status:?})");
                return Ok(Solution::empty(status));
            }
            let (prev, row) = table[at(m - 1, 0)..at(m + 1, 0)].split_at_mut(width);
            let w = weights[m - 1];
            let v = items[m - 1].value();
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = if w > c {
                    prev[c]
                } else {
                    prev[c].max(v + prev[c - w])
                };
            }
        }

        let mut remaining = capacity;
        let mut chosen = Vec::new();
        for m in (1..=n).rev() {
            if table[at(m, remaining)] != table[at(m - 1, remaining)] {
                chosen.push(items[m - 1].clone());
                remaining -= weights[m - 1];
            }
        }

        debug!(
            "tabulation dp: optimum {} from a {}x{} table",
            table[at(n, capacity)],
            n + 1,
            width
        );
        let stats = SearchStats {
            table_cells: (n + 1) * width,
            ..SearchStats::default()
        };
        Ok(Solution::from_items(chosen, SolveStatus::Optimal).with_stats(stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::instance::InstanceBuilder;
    use crate::solver::Solver;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use test_log::test;

    fn run(instance: &ProblemInstance) -> Solution {
        Solver::new(instance, TabulationSolver::default()).run().unwrap()
    }

    #[test]
    fn test_tabulation_hiking() {
        let solution = run(&fixtures::hiking(false));
        assert_eq!(solution.total_weight(), 396.0);
        assert_eq!(solution.total_value(), 1030.0);
        assert_eq!(solution.status(), SolveStatus::Optimal);
        assert_eq!(solution.stats().table_cells, 23 * 401);
    }

    #[test]
    fn test_tabulation_pair_takes_heavier_item() {
        let solution = run(&fixtures::pair(false));
        assert_eq!(solution.total_value(), 10.0);
        assert_eq!(solution.total_weight(), 5.0);
        assert_eq!(solution.selected_indices(), vec![1]);
    }

    #[test]
    fn test_tabulation_ignores_order() {
        let unsorted = run(&fixtures::hiking(false));
        let sorted = run(&fixtures::hiking(true));
        assert_eq!(unsorted.total_value(), sorted.total_value());
    }

    #[test]
    fn test_fractional_capacity_rejected() {
        let instance = InstanceBuilder::new(6.5)
            .item(0, 8.0, 4.0)
            .item(1, 10.0, 5.0)
            .build();
        let err = Solver::new(&instance, TabulationSolver::default())
            .run()
            .unwrap_err();
        assert_eq!(
            err,
            SolveError::NonIntegral {
                field: "capacity",
                value: 6.5
            }
        );
    }

    #[test]
    fn test_fractional_weight_rejected() {
        let instance = InstanceBuilder::new(6.0)
            .item(0, 8.0, 4.25)
            .item(1, 10.0, 5.0)
            .build();
        let err = Solver::new(&instance, TabulationSolver::default())
            .run()
            .unwrap_err();
        assert!(matches!(err, SolveError::NonIntegral { field: "weight", .. }));
    }

    #[test]
    fn test_table_budget() {
        let solver = TabulationSolver::new(TabulationConfig::default().with_max_cells(10));
        let err = Solver::new(&fixtures::pair(false), solver)
            .run()
            .unwrap_err();
        assert_eq!(
            err,
            SolveError::TableTooLarge {
                cells: 21,
                limit: 10
            }
        );
    }

    #[test]
    fn test_zero_weight_item_taken() {
        let instance = InstanceBuilder::new(4.0)
            .item(0, 3.0, 0.0)
            .item(1, 5.0, 4.0)
            .item(2, 4.0, 3.0)
            .build();
        let solution = run(&instance);
        assert_eq!(solution.total_value(), 8.0);
        let mut indices = solution.selected_indices();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_cancelled_before_first_row() {
        let flag = Arc::new(AtomicBool::new(true));
        let solution = Solver::new(&fixtures::hiking(false), TabulationSolver::default())
            .with_cancel(flag)
            .run()
            .unwrap();
        assert_eq!(solution.status(), SolveStatus::Cancelled);
        assert!(solution.items().is_empty());
    }
}
