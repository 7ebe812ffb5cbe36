//! Refinement budget configuration.

/// Budget for the refinement stage.
///
/// # Examples
///
/// ```
/// use rail_dispatch::refine::RefineConfig;
///
/// let config = RefineConfig::default()
///     .with_max_iterations(500)
///     .with_time_limit_ms(50);
/// ```
#[derive(Debug, Clone)]
pub struct RefineConfig {
    /// Maximum number of candidate moves to evaluate.
    ///
    /// 0 disables refinement; the incoming plan is returned unchanged.
    pub max_iterations: usize,

    /// Optional wall-clock ceiling in milliseconds.
    ///
    /// `None` leaves the iteration budget as the only limit.
    pub time_limit_ms: Option<u64>,
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            max_iterations: 2000,
            time_limit_ms: None,
        }
    }
}

impl RefineConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive when set".into());
        }
        Ok(())
    }
}
