//! Dynamic-programming configuration.

use crate::error::SolveError;

/// Configuration for the tabulation solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabulationConfig {
    /// Largest `(n + 1) * (capacity + 1)` table the solver will allocate.
    pub max_cells: u128,
}

impl Default for TabulationConfig {
    fn default() -> Self {
        Self {
            max_cells: 100_000_000,
        }
    }
}

impl TabulationConfig {
    pub fn with_max_cells(mut self, cells: u128) -> Self {
        self.max_cells = cells;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.max_cells == 0 {
            return Err(SolveError::InvalidConfig("max_cells must be positive".into()));
        }
        Ok(())
    }
}

/// Memo table policy for the memoized solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Keep every evaluated subproblem.
    #[default]
    Unbounded,

    /// Keep at most `capacity` subproblems, evicting the least recently used.
    ///
    /// Evicted entries are recomputed on demand, trading time for memory.
    Lru {
        capacity: usize,
    },
}

/// Configuration for the memoized solver.
///
/// # Examples
///
/// ```
/// use knapsack_engine::dp::{CachePolicy, MemoConfig};
///
/// let config = MemoConfig::default().with_cache(CachePolicy::Lru { capacity: 4096 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemoConfig {
    pub cache: CachePolicy,
}

impl MemoConfig {
    pub fn with_cache(mut self, cache: CachePolicy) -> Self {
        self.cache = cache;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolveError> {
        if let CachePolicy::Lru { capacity: 0 } = self.cache {
            return Err(SolveError::InvalidConfig(
                "lru cache capacity must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(TabulationConfig::default().max_cells, 100_000_000);
        assert_eq!(MemoConfig::default().cache, CachePolicy::Unbounded);
    }

    #[test]
    fn test_validate_ok() {
        assert!(TabulationConfig::default().validate().is_ok());
        assert!(MemoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_cells() {
        assert!(TabulationConfig::default()
            .with_max_cells(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_lru() {
        let config = MemoConfig::default().with_cache(CachePolicy::Lru { capacity: 0 });
        assert!(config.validate().is_err());
    }
}
