//! Branch-and-bound configuration.

use crate::error::SolveError;

/// Configuration for the branch-and-bound solver.
///
/// Wall-clock limits and cancellation are attached to the
/// [`Solver`](crate::solver::Solver) instead, since they apply to every
/// strategy.
///
/// # Examples
///
/// ```
/// use knapsack_engine::bnb::BnbConfig;
///
/// let config = BnbConfig::default().with_max_nodes(100_000);
/// assert_eq!(config.max_nodes, Some(100_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BnbConfig {
    /// Maximum number of node expansions. `None` = no limit.
    ///
    /// When the budget runs out the incumbent is returned with
    /// [`SolveStatus::NodeLimit`](crate::solver::SolveStatus::NodeLimit).
    pub max_nodes: Option<usize>,
}

impl BnbConfig {
    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = Some(n);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.max_nodes == Some(0) {
            return Err(SolveError::InvalidConfig("max_nodes must be positive".into()));
        }
        Ok(())
    }
}
