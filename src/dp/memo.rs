//! Top-down dynamic programming with an explicit memo table.

use super::cache::MemoCache;
use super::config::MemoConfig;
use crate::error::SolveError;
use crate::instance::{Item, ProblemInstance};
use crate::solver::{SearchStats, Solution, SolveStatus, SolverKind, StopSignal, Strategy};
use log::{debug, warn};

/// How many frames are processed between stop-signal polls.
const POLL_INTERVAL: usize = 4096;

/// Subproblem key: item count and the bit pattern of the remaining capacity.
type Key = (usize, u64);

/// One step of the explicit evaluation stack.
#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Resolve `value(m, remaining)` from the memo or schedule its children.
    Enter { m: usize, remaining: f64 },
    /// Children are on the value stack; combine and memoize.
    Combine { m: usize, remaining: f64 },
}

/// Evaluates `value(m, remaining)` without native recursion.
///
/// Child results travel on `values` rather than through the memo, so
/// evictions from a bounded cache can never starve a pending frame.
struct Evaluator<'a> {
    items: &'a [Item],
    /// Slack on the remaining capacity, so rounding in `remaining` never
    /// rejects an item that fits exactly.
    tolerance: f64,
    cache: MemoCache<Key>,
    frames: Vec<Frame>,
    values: Vec<f64>,
    processed: usize,
}

impl<'a> Evaluator<'a> {
    fn new(instance: &'a ProblemInstance, config: &MemoConfig) -> Self {
        Self {
            items: instance.items(),
            tolerance: instance.tolerance(),
            cache: MemoCache::new(config.cache),
            frames: Vec::new(),
            values: Vec::new(),
            processed: 0,
        }
    }

    fn fits(&self, item: &Item, remaining: f64) -> bool {
        item.weight() <= remaining + self.tolerance
    }

    /// Best value using the first `m` items within `remaining` capacity.
    fn value(&mut self, m: usize, remaining: f64, stop: &StopSignal) -> Result<f64, SolveStatus> {
        self.frames.clear();
        self.values.clear();
        self.frames.push(Frame::Enter { m, remaining });

        while let Some(frame) = self.frames.pop() {
            self.processed += 1;
            if self.processed % POLL_INTERVAL == 0 {
                if let Some(status) = stop.poll() {
                    return Err(status);
                }
            }

            match frame {
                Frame::Enter { m: 0, .. } => self.values.push(0.0),
                Frame::Enter { m, remaining } => {
                    if let Some(v) = self.cache.get(&(m, remaining.to_bits())) {
                        self.values.push(v);
                        continue;
                    }
                    let item = &self.items[m - 1];
                    self.frames.push(Frame::Combine { m, remaining });
                    if self.fits(item, remaining) {
                        self.frames.push(Frame::Enter {
                            m: m - 1,
                            remaining: remaining - item.weight(),
                        });
                    }
                    self.frames.push(Frame::Enter { m: m - 1, remaining });
                }
                Frame::Combine { m, remaining } => {
                    let item = &self.items[m - 1];
                    // the skip branch was pushed last, so it resolved first
                    let v = if self.fits(item, remaining) {
                        let take = self.values.pop().unwrap_or(0.0);
                        let skip = self.values.pop().unwrap_or(0.0);
                        skip.max(item.value() + take)
                    } else {
                        self.values.pop().unwrap_or(0.0)
                    };
                    self.cache.insert((m, remaining.to_bits()), v);
                    self.values.push(v);
                }
            }
        }

        Ok(self.values.pop().unwrap_or(0.0))
    }
}

/// Exact solver evaluating the knapsack recurrence top-down.
///
/// Produces the same optimum as [`super::TabulationSolver`] but only visits
/// reachable `(m, remaining)` states, so it tolerates real-valued weights
/// and large sparse capacities. The memo policy is set by [`MemoConfig`].
#[derive(Debug, Clone, Default)]
pub struct MemoSolver {
    config: MemoConfig,
}

impl MemoSolver {
    pub fn new(config: MemoConfig) -> Self {
        Self { config }
    }
}

impl Strategy for MemoSolver {
    fn kind(&self) -> SolverKind {
        SolverKind::DynProgRecurrent
    }

    fn check(&self, _instance: &ProblemInstance) -> Result<(), SolveError> {
        self.config.validate()
    }

    fn solve_core(
        &mut self,
        instance: &ProblemInstance,
        stop: &StopSignal,
    ) -> Result<Solution, SolveError> {
        let items = instance.items();
        let mut eval = Evaluator::new(instance, &self.config);
        let mut remaining = instance.capacity();
        let mut chosen = Vec::new();

        for m in (1..=items.len()).rev() {
            let with = eval.value(m, remaining, stop);
            let without = eval.value(m - 1, remaining, stop);
            match (with, without) {
                (Ok(with), Ok(without)) => {
                    if with != without {
                        chosen.push(items[m - 1].clone());
                        remaining -= items[m - 1].weight();
                    }
                }
                (Err(status), _) | (_, Err(status)) => {
                    warn!("memoized dp: stopped at item {m} ({status:?})");
                    return Ok(Solution::empty(status));
                }
            }
        }

        debug!(
            "memoized dp: {} memo entries, {} hits, {} misses",
            eval.cache.len(),
            eval.cache.hits(),
            eval.cache.misses()
        );
        let stats = SearchStats {
            cache_hits: eval.cache.hits(),
            cache_misses: eval.cache.misses(),
            ..SearchStats::default()
        };
        Ok(Solution::from_items(chosen, SolveStatus::Optimal)
            .within_capacity(instance.capacity())
            .with_stats(stats))
    }
}
