use std::collections::HashMap;

use log::debug;

use crate::core::error::SimulationError;
use crate::core::execution::pulse_engine::PulseEngine;
use crate::core::network::Network;
use crate::core::types::{ModuleName, PulseLevel};

/// Finds the minimum number of activations until a sink first receives a
/// low pulse.
///
/// Relies on a documented structural precondition: the sink hangs off a
/// single conjunction fed by a small set of conjunctions, each the
/// terminal node of an independently periodic branch whose period equals
/// its first high emission, phase-aligned to activation zero. The walk in
/// `resolve_detection_set` verifies the shape; the periodicity itself is a
/// property of the input and is not verified by simulation.
pub struct CycleAnalyzer {
    engine: PulseEngine,
    detection_set: Vec<ModuleName>,
    first_high: HashMap<ModuleName, u64>,
}

impl CycleAnalyzer {
    /// Resolve the detection set for `sink` and prepare an engine over the
    /// network.
    pub fn new(network: Network, sink: &str) -> Result<Self, SimulationError> {
        let detection_set = resolve_detection_set(&network, sink)?;
        debug!("detection set for {sink:?}: {detection_set:?}");

        let engine = PulseEngine::new(network)?;

        Ok(Self {
            engine,
            detection_set,
            first_high: HashMap::new(),
        })
    }

    /// The conjunction modules whose first high emissions determine the
    /// answer.
    pub fn detection_set(&self) -> &[ModuleName] {
        &self.detection_set
    }

    /// Simulate until every detection-set member has emitted a high pulse
    /// at least once, then fold their first-occurrence activation indices
    /// with least common multiple.
    pub fn run(&mut self) -> u64 {
        while self.first_high.len() < self.detection_set.len() {
            let activation = self.engine.activations() + 1;
            let detection_set = &self.detection_set;
            let first_high = &mut self.first_high;

            self.engine.activate(|pulse| {
                if pulse.level == PulseLevel::High && detection_set.contains(&pulse.sender) {
                    first_high.entry(pulse.sender.clone()).or_insert(activation);
                }
            });
        }

        for (name, activation) in &self.first_high {
            debug!("{name} first emitted high at activation {activation}");
        }

        self.first_high.values().copied().fold(1, lcm)
    }
}

/// Reverse-adjacency walk from the sink: replace the frontier with the set
/// of modules feeding it until that set holds more than one module.
fn resolve_detection_set(
    network: &Network,
    sink: &str,
) -> Result<Vec<ModuleName>, SimulationError> {
    let mut frontier = vec![sink.to_string()];

    // Each step moves one level upstream, so a conforming network converges
    // within the module count.
    for _ in 0..=network.len() {
        let senders = network.senders_to(&frontier);

        match senders.len() {
            0 => {
                return Err(SimulationError::StructuralAssumptionViolated(format!(
                    "no modules send to {frontier:?}"
                )))
            }
            1 => frontier = senders,
            _ => return require_conjunctions(network, senders),
        }
    }

    Err(SimulationError::StructuralAssumptionViolated(format!(
        "reverse walk from {sink:?} never widened past a single module"
    )))
}

fn require_conjunctions(
    network: &Network,
    senders: Vec<ModuleName>,
) -> Result<Vec<ModuleName>, SimulationError> {
    for name in &senders {
        let is_conjunction = network
            .module(name)
            .map_or(false, |module| module.is_conjunction());

        if !is_conjunction {
            return Err(SimulationError::StructuralAssumptionViolated(format!(
                "detection set member {name:?} is not a conjunction"
            )));
        }
    }

    Ok(senders)
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Least common multiple, used as the fold over first-high indices.
fn lcm(a: u64, b: u64) -> u64 {
    a * (b / gcd(a, b))
}
