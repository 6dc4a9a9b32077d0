//! Solve configuration.

use std::time::Duration;

/// Configuration for one solve.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use flowmip::solver::SolveConfig;
///
/// let config = SolveConfig::default().with_time_limit(Duration::from_secs(60));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Wall-clock budget for the search. A soft deadline: a backend that
    /// reaches it returns its best incumbent instead of proving
    /// optimality.
    pub time_limit: Duration,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(3600),
        }
    }
}

impl SolveConfig {
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit.is_zero() {
            return Err("time_limit must be positive".into());
        }
        Ok(())
    }
}
