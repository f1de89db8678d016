//! Greedy scan over density-ordered items.

use super::config::GreedyConfig;
use crate::error::SolveError;
use crate::instance::{Item, ProblemInstance};
use crate::solver::{Solution, SolveStatus, SolverKind, SplitItem, StopSignal, Strategy};

/// Totals reached by one greedy scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Scan {
    pub weight: f64,
    pub value: f64,
    /// Position and taken share of the split item (fractional mode only).
    pub split: Option<(usize, f64)>,
    /// Position where a fractional scan stopped.
    pub stopped_at: Option<usize>,
}

/// Walks the sorted items from `level`, taking every item that still fits.
///
/// In fractional mode the first item that does not fit is taken in the
/// share that fills the capacity exactly, and the scan stops there. A
/// starting weight already past the capacity leaves the state unchanged.
/// `take` receives the position of each wholly taken item.
pub(crate) fn scan<F>(
    instance: &ProblemInstance,
    level: usize,
    weight: f64,
    value: f64,
    fractional: bool,
    mut take: F,
) -> Scan
where
    F: FnMut(usize),
{
    let capacity = instance.capacity();
    let mut weight = weight;
    let mut value = value;
    let mut split = None;
    let mut stopped_at = None;

    for (pos, item) in instance.items().iter().enumerate().skip(level) {
        if instance.fits(weight + item.weight()) {
            take(pos);
            weight += item.weight();
            value += item.value();
        } else if fractional {
            let room = capacity - weight;
            if room > 0.0 {
                // item.weight() > room > 0 here, so the division is safe
                let fraction = room / item.weight();
                value += fraction * item.value();
                weight = capacity;
                split = Some((pos, fraction));
            }
            stopped_at = Some(pos);
            break;
        }
    }

    Scan {
        weight,
        value,
        split,
        stopped_at,
    }
}

/// Fractional-relaxation value of the best completion from `level` onward,
/// given an accumulated `(weight, value)`.
///
/// Never smaller than the value of any 0/1 completion, which makes it an
/// admissible bound for branch-and-bound. Weightless items have density 0
/// and sort last, where the scan may stop before reaching them; they always
/// fit, so their values are added on top.
pub fn fractional_bound(instance: &ProblemInstance, level: usize, weight: f64, value: f64) -> f64 {
    let result = scan(instance, level, weight, value, true, |_| {});
    match result.stopped_at {
        Some(pos) => {
            let weightless: f64 = instance.items()[pos + 1..]
                .iter()
                .filter(|item| item.weight() == 0.0)
                .map(Item::value)
                .sum();
            result.value + weightless
        }
        None => result.value,
    }
}

/// Greedy strategy: integral heuristic or fractional relaxation.
#[derive(Debug, Clone, Default)]
pub struct GreedySolver {
    config: GreedyConfig,
}

impl GreedySolver {
    pub fn new(config: GreedyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GreedyConfig {
        &self.config
    }

    /// Runs the scan described by the configuration, without the
    /// trivial-case checks of [`crate::solver::Solver`].
    pub fn evaluate(&self, instance: &ProblemInstance) -> Result<Solution, SolveError> {
        self.check(instance)?;
        Ok(self.scan_solution(instance))
    }

    fn scan_solution(&self, instance: &ProblemInstance) -> Solution {
        let items = instance.items();
        let mut taken = Vec::new();
        let result = scan(
            instance,
            self.config.start_level,
            self.config.weight_offset,
            self.config.value_offset,
            self.config.fractional,
            |pos| taken.push(items[pos].clone()),
        );

        let split = result.split.map(|(pos, fraction)| {
            taken.push(items[pos].clone());
            SplitItem {
                index: items[pos].index(),
                fraction,
            }
        });
        let status = if self.config.fractional {
            SolveStatus::Relaxation
        } else {
            SolveStatus::Heuristic
        };
        Solution::new(taken, result.value, result.weight, status).with_split(split)
    }
}

impl Strategy for GreedySolver {
    fn kind(&self) -> SolverKind {
        SolverKind::Greedy
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
        _stop: &StopSignal,
    ) -> Result<Solution, SolveError> {
        Ok(self.scan_solution(instance))
    }
}
