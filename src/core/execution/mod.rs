pub mod config;
pub mod cycle_analyzer;
pub mod pulse_engine;

// Re-export commonly used types
pub use config::{ConcurrencyMode, SolverConfig};
pub use cycle_analyzer::CycleAnalyzer;
pub use pulse_engine::{PulseCounts, PulseEngine};
