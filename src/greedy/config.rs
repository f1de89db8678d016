//! Greedy configuration.

use crate::error::SolveError;

/// Configuration for the greedy solver.
///
/// The offsets and `start_level` let the scan evaluate a suffix of the
/// density-ordered items from an already accumulated partial state.
///
/// # Examples
///
/// ```
/// use knapsack_engine::greedy::GreedyConfig;
///
/// let config = GreedyConfig::default()
///     .with_fractional(true)
///     .with_start_level(3)
///     .with_offsets(12.0, 40.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyConfig {
    /// Split the first item that does not fit and stop.
    pub fractional: bool,

    /// Position in the sorted item sequence to start from.
    pub start_level: usize,

    /// Weight already accumulated before `start_level`.
    pub weight_offset: f64,

    /// Value already accumulated before `start_level`.
    pub value_offset: f64,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            fractional: false,
            start_level: 0,
            weight_offset: 0.0,
            value_offset: 0.0,
        }
    }
}

impl GreedyConfig {
    /// Integral greedy starting from the first item.
    pub fn integral() -> Self {
        Self::default()
    }

    /// Fractional greedy starting from the first item.
    pub fn fractional() -> Self {
        Self::default().with_fractional(true)
    }

    pub fn with_fractional(mut self, fractional: bool) -> Self {
        self.fractional = fractional;
        self
    }

    pub fn with_start_level(mut self, level: usize) -> Self {
        self.start_level = level;
        self
    }

    /// Sets the accumulated `(weight, value)` the scan starts from.
    pub fn with_offsets(mut self, weight: f64, value: f64) -> Self {
        self.weight_offset = weight;
        self.value_offset = value;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.weight_offset.is_nan() || self.weight_offset < 0.0 {
            return Err(SolveError::InvalidConfig(format!(
                "weight_offset must be non-negative, got {}",
                self.weight_offset
            )));
        }
        if self.value_offset.is_nan() || self.value_offset < 0.0 {
            return Err(SolveError::InvalidConfig(format!(
                "value_offset must be non-negative, got {}",
                self.value_offset
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GreedyConfig::default();
        assert!(!config.fractional);
        assert_eq!(config.start_level, 0);
        assert_eq!(config.weight_offset, 0.0);
        assert_eq!(config.value_offset, 0.0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GreedyConfig::fractional().validate().is_ok());
    }

    #[test]
    fn test_validate_negative_offset() {
        let config = GreedyConfig::default().with_offsets(-1.0, 0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan_offset() {
        let config = GreedyConfig::default().with_offsets(0.0, f64::NAN);
        assert!(config.validate().is_err());
    }
}
