use std::collections::VecDeque;

use log::trace;
use serde::Serialize;

use crate::core::error::SimulationError;
use crate::core::network::Network;
use crate::core::types::{Pulse, PulseLevel};

/// Running totals of pulses sent, by level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PulseCounts {
    pub low: u64,
    pub high: u64,
}

impl PulseCounts {
    /// Count one pulse of the given level.
    pub fn record(&mut self, level: PulseLevel) {
        match level {
            PulseLevel::Low => self.low += 1,
            PulseLevel::High => self.high += 1,
        }
    }

    /// Product of the two totals.
    pub fn product(&self) -> u64 {
        self.low * self.high
    }
}

/// Drives button activations against one exclusively owned network.
///
/// One activation injects the synthetic low pulse into the broadcaster and
/// drains the FIFO queue to empty before returning. Activations are
/// strictly sequential; interleaving them would corrupt conjunction memory
/// because each module's emission order depends on the exact order of
/// prior receives.
pub struct PulseEngine {
    network: Network,
    queue: VecDeque<Pulse>,
    activations: u64,
}

impl PulseEngine {
    /// Take ownership of a freshly wired network.
    pub fn new(network: Network) -> Result<Self, SimulationError> {
        if !network.has_broadcaster() {
            return Err(SimulationError::MissingBroadcaster);
        }

        Ok(Self {
            network,
            queue: VecDeque::new(),
            activations: 0,
        })
    }

    /// Number of activations driven so far.
    pub fn activations(&self) -> u64 {
        self.activations
    }

    /// Run one activation, invoking `observer` once per pulse in delivery
    /// order, the synthetic button pulse included.
    pub fn activate<F: FnMut(&Pulse)>(&mut self, mut observer: F) {
        self.activations += 1;
        self.queue.push_back(Pulse::button_press());

        while let Some(pulse) = self.queue.pop_front() {
            observer(&pulse);

            // Unknown destinations are sinks; the pulse is absorbed.
            if let Some(module) = self.network.module_mut(&pulse.destination) {
                let emitted = module.receive(pulse.level, &pulse.sender);
                self.queue.extend(emitted);
            }
        }

        trace!("activation {} drained", self.activations);
    }

    /// Run the given number of activations, counting every pulse sent.
    pub fn count_pulses(&mut self, activations: u64) -> PulseCounts {
        let mut counts = PulseCounts::default();

        for _ in 0..activations {
            self.activate(|pulse| counts.record(pulse.level));
        }

        counts
    }
}
