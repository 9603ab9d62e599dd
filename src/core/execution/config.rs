/// Enumeration of supported concurrency modes for the combined solver.
///
/// A single simulation is strictly sequential; the only admissible
/// parallelism is running the two queries on independently parsed
/// networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcurrencyMode {
    /// Run the two queries one after the other on the calling thread.
    Sequential,
    /// Run the two queries concurrently via rayon::join.
    Rayon,
}

impl Default for ConcurrencyMode {
    fn default() -> Self {
        ConcurrencyMode::Sequential
    }
}

/// Configuration for the combined solver.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// The concurrency mode used to run the two queries.
    pub concurrency_mode: ConcurrencyMode,
}

impl SolverConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the concurrency mode used to run the two queries.
    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_sequential() {
        let config = SolverConfig::default();
        assert_eq!(config.concurrency_mode, ConcurrencyMode::Sequential);
    }

    #[test]
    fn test_config_builder() {
        let config = SolverConfig::new().with_concurrency(ConcurrencyMode::Rayon);
        assert_eq!(config.concurrency_mode, ConcurrencyMode::Rayon);
    }
}
