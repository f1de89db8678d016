//! Wire types exchanged with a driver and a result sink.

use crate::bnb::BnbConfig;
use crate::dp::{CachePolicy, MemoConfig};
use crate::error::DriverError;
use crate::greedy::GreedyConfig;
use crate::instance::{self, ItemSpec, ProblemInstance};
use crate::solver::{ItemRecord, Solution, SolverKind};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Instance payload: `{"num_items", "capacity", "items"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnapsackData {
    pub num_items: usize,
    pub capacity: f64,
    pub items: Vec<ItemSpec>,
}

impl KnapsackData {
    pub fn from_json_str(s: &str) -> Result<Self, DriverError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DriverError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Checks that `num_items` agrees with the item list.
    pub fn validate(&self) -> Result<(), DriverError> {
        if self.num_items != self.items.len() {
            return Err(DriverError::ItemCountMismatch {
                declared: self.num_items,
                actual: self.items.len(),
            });
        }
        Ok(())
    }

    /// Builds the instance, density-sorted if `sorted`.
    pub fn to_instance(&self, sorted: bool) -> ProblemInstance {
        instance::build(self.capacity, self.items.iter().cloned(), sorted)
    }
}

/// Per-request tuning. Every field is optional on the wire, and a field
/// that does not apply to the requested strategy is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Greedy: report the fractional relaxation instead of the heuristic.
    pub fractional: bool,
    /// Greedy: sorted position to start scanning from.
    pub start_level: usize,
    /// Greedy: weight accumulated before `start_level`.
    pub weight_offset: f64,
    /// Greedy: value accumulated before `start_level`.
    pub value_offset: f64,
    /// Memoized DP: bound the memo table to this many entries (LRU).
    pub lru_capacity: Option<usize>,
    /// Branch-and-bound: node expansion budget.
    pub max_nodes: Option<usize>,
    /// Wall-clock limit for the search, any strategy.
    pub time_limit_ms: Option<u64>,
}

impl SolveOptions {
    pub fn with_fractional(mut self, fractional: bool) -> Self {
        self.fractional = fractional;
        self
    }

    pub fn with_lru_capacity(mut self, capacity: usize) -> Self {
        self.lru_capacity = Some(capacity);
        self
    }

    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = Some(n);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn greedy_config(&self) -> GreedyConfig {
        GreedyConfig::default()
            .with_fractional(self.fractional)
            .with_start_level(self.start_level)
            .with_offsets(self.weight_offset, self.value_offset)
    }

    pub fn memo_config(&self) -> MemoConfig {
        let cache = match self.lru_capacity {
            Some(capacity) => CachePolicy::Lru { capacity },
            None => CachePolicy::Unbounded,
        };
        MemoConfig::default().with_cache(cache)
    }

    pub fn bnb_config(&self) -> BnbConfig {
        BnbConfig {
            max_nodes: self.max_nodes,
        }
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

/// A solve request: which strategy, on which instance, tuned how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Defaults to branch-and-bound when omitted.
    #[serde(default)]
    pub solver_type: SolverKind,
    pub knapsack_data: KnapsackData,
    #[serde(default)]
    pub options: SolveOptions,
}

impl SolveRequest {
    pub fn new(solver_type: SolverKind, knapsack_data: KnapsackData) -> Self {
        Self {
            solver_type,
            knapsack_data,
            options: SolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }
}

/// What the result sink receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub value: f64,
    pub weight: f64,
    pub items: Vec<ItemRecord>,
}

impl From<&Solution> for SolveResponse {
    fn from(solution: &Solution) -> Self {
        Self {
            value: solution.total_value(),
            weight: solution.total_weight(),
            items: solution.to_records(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIR: &str = r#"{
        "num_items": 2,
        "capacity": 6,
        "items": [
            {"index": 0, "value": 8, "weight": 4},
            {"index": 1, "value": 10, "weight": 5, "name": "tent"}
        ]
    }"#;

    #[test]
    fn test_parse_knapsack_data() {
        let data = KnapsackData::from_json_str(PAIR).unwrap();
        assert_eq!(data.num_items, 2);
        assert_eq!(data.capacity, 6.0);
        assert_eq!(data.items[1].name.as_deref(), Some("tent"));
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_count_mismatch() {
        let mut data = KnapsackData::from_json_str(PAIR).unwrap();
        data.num_items = 3;
        assert!(matches!(
            data.validate(),
            Err(DriverError::ItemCountMismatch {
                declared: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_solver_type_defaults_to_branch_and_bound() {
        let json = format!(r#"{{"knapsack_data": {PAIR}}}"#);
        let request: SolveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.solver_type, SolverKind::BranchAndBound);
    }

    #[test]
    fn test_options_default_when_omitted() {
        let json = format!(r#"{{"solver_type": "GREEDY", "knapsack_data": {PAIR}}}"#);
        let request: SolveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.options, SolveOptions::default());
        assert_eq!(request.options.memo_config().cache, CachePolicy::Unbounded);
        assert_eq!(request.options.time_limit(), None);
    }

    #[test]
    fn test_partial_options() {
        let json = format!(
            r#"{{"knapsack_data": {PAIR}, "options": {{"lru_capacity": 64, "time_limit_ms": 250}}}}"#
        );
        let request: SolveRequest = serde_json::from_str(&json).unwrap();
        assert!(!request.options.fractional);
        assert_eq!(
            request.options.memo_config().cache,
            CachePolicy::Lru { capacity: 64 }
        );
        assert_eq!(request.options.time_limit(), Some(Duration::from_millis(250)));
        assert_eq!(request.options.bnb_config().max_nodes, None);
    }

    #[test]
    fn test_unknown_solver_type_rejected() {
        let json = format!(r#"{{"solver_type": "SIMPLEX", "knapsack_data": {PAIR}}}"#);
        assert!(serde_json::from_str::<SolveRequest>(&json).is_err());
    }

    #[test]
    fn test_to_instance_sorted() {
        let data = KnapsackData::from_json_str(PAIR).unwrap();
        assert!(data.to_instance(true).is_density_sorted());
        assert!(!data.to_instance(false).is_density_sorted());
    }

    #[test]
    fn test_missing_file() {
        let err = KnapsackData::from_json_file("/nonexistent/ks.json").unwrap_err();
        assert!(matches!(err, DriverError::Io(_)));
    }
}
