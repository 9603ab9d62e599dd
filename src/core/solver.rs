use log::debug;
use serde::Serialize;

use crate::core::error::SimulationError;
use crate::core::execution::config::{ConcurrencyMode, SolverConfig};
use crate::core::execution::cycle_analyzer::CycleAnalyzer;
use crate::core::execution::pulse_engine::PulseEngine;
use crate::core::network::Network;

/// Product of low and high pulse totals after the given number of button
/// activations against a freshly parsed network.
pub fn pulses_after_activations<S: AsRef<str>>(
    lines: &[S],
    activations: u64,
) -> Result<u64, SimulationError> {
    let network = Network::parse(lines)?;
    let mut engine = PulseEngine::new(network)?;

    let counts = engine.count_pulses(activations);
    debug!(
        "{} low / {} high after {activations} activations",
        counts.low, counts.high
    );

    Ok(counts.product())
}

/// Minimum number of activations until `sink` first receives a low pulse.
pub fn activations_until_low<S: AsRef<str>>(
    lines: &[S],
    sink: &str,
) -> Result<u64, SimulationError> {
    let network = Network::parse(lines)?;
    let mut analyzer = CycleAnalyzer::new(network, sink)?;

    Ok(analyzer.run())
}

/// Answers to the two queries over one module configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Answers {
    pub pulse_product: u64,
    pub first_low_activation: u64,
}

/// Run both queries, each against an independently parsed network.
///
/// The two simulations share no mutable state, so the concurrency mode
/// changes wall time only, never the answers.
pub fn solve<S: AsRef<str> + Sync>(
    lines: &[S],
    activations: u64,
    sink: &str,
    config: &SolverConfig,
) -> Result<Answers, SimulationError> {
    let (pulse_product, first_low_activation) = match config.concurrency_mode {
        ConcurrencyMode::Sequential => (
            pulses_after_activations(lines, activations)?,
            activations_until_low(lines, sink)?,
        ),
        ConcurrencyMode::Rayon => {
            let (product, first_low) = rayon::join(
                || pulses_after_activations(lines, activations),
                || activations_until_low(lines, sink),
            );
            (product?, first_low?)
        }
    };

    Ok(Answers {
        pulse_product,
        first_low_activation,
    })
}
