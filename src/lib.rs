pub mod core;

// Re-export commonly used types
pub use crate::core::error::SimulationError;
pub use crate::core::execution::{
    ConcurrencyMode, CycleAnalyzer, PulseCounts, PulseEngine, SolverConfig,
};
pub use crate::core::module::{Module, ModuleKind};
pub use crate::core::network::Network;
pub use crate::core::solver::{activations_until_low, pulses_after_activations, solve, Answers};
pub use crate::core::types::{ModuleName, Pulse, PulseLevel};
