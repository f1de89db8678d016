//! Error types for solving and for the JSON driver boundary.

use thiserror::Error;

/// A solve that cannot produce a meaningful solution.
///
/// All variants are raised before or instead of the strategy-specific
/// search; no partial solution accompanies them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The strategy requires items in non-increasing density order.
    #[error("{solver} requires a density-sorted instance")]
    NotDensitySorted { solver: &'static str },

    /// Tabulation indexes its table by weight, so capacity and weights
    /// must be non-negative whole numbers.
    #[error("{field} must be a non-negative integer for table indexing, got {value}")]
    NonIntegral { field: &'static str, value: f64 },

    /// The `(n + 1) x (capacity + 1)` table exceeds the configured budget.
    #[error("value table needs {cells} cells, limit is {limit}")]
    TableTooLarge { cells: u128, limit: u128 },

    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors surfaced by [`crate::driver`].
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// `num_items` disagrees with the length of `items`.
    #[error("num_items is {declared} but {actual} items were supplied")]
    ItemCountMismatch { declared: usize, actual: usize },
}
