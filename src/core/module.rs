use std::collections::HashMap;
use std::str::FromStr;

use crate::core::error::SimulationError;
use crate::core::types::{ModuleName, Pulse, PulseLevel, BROADCASTER_NAME};

/// Variant-specific behavior and memory of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleKind {
    /// Repeats every received pulse to all destinations.
    Broadcaster,
    /// On/off toggle, initially off. Reacts to low pulses only.
    FlipFlop { on: bool },
    /// Remembers the last level received from each tracked input; emits
    /// low exactly when every remembered level is high.
    Conjunction {
        last_received: HashMap<ModuleName, PulseLevel>,
    },
}

/// One signal-routing module: a name, an ordered destination list, and
/// variant-specific memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    name: ModuleName,
    destinations: Vec<ModuleName>,
    kind: ModuleKind,
}

impl Module {
    /// The module's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Destination names in emission order.
    pub fn destinations(&self) -> &[ModuleName] {
        &self.destinations
    }

    /// The module's variant and current memory.
    pub fn kind(&self) -> &ModuleKind {
        &self.kind
    }

    pub fn is_conjunction(&self) -> bool {
        matches!(self.kind, ModuleKind::Conjunction { .. })
    }

    /// Register `input` as a tracked input of this conjunction, seeded to
    /// a remembered low. No-op for the other variants.
    pub(crate) fn track_input(&mut self, input: &str) {
        if let ModuleKind::Conjunction { last_received } = &mut self.kind {
            last_received.insert(input.to_string(), PulseLevel::Low);
        }
    }

    /// Deliver a pulse to this module and collect the pulses it emits, in
    /// destination order.
    pub fn receive(&mut self, level: PulseLevel, sender: &str) -> Vec<Pulse> {
        let emitted = match &mut self.kind {
            ModuleKind::Broadcaster => Some(level),
            ModuleKind::FlipFlop { on } => match level {
                PulseLevel::High => None,
                PulseLevel::Low => {
                    *on = !*on;
                    Some(if *on { PulseLevel::High } else { PulseLevel::Low })
                }
            },
            ModuleKind::Conjunction { last_received } => {
                // The tracked-input set is fixed at wiring time; a pulse
                // only updates the sender's remembered level.
                if let Some(remembered) = last_received.get_mut(sender) {
                    *remembered = level;
                }

                let all_high = last_received
                    .values()
                    .all(|remembered| *remembered == PulseLevel::High);

                Some(if all_high { PulseLevel::Low } else { PulseLevel::High })
            }
        };

        match emitted {
            Some(level) => self
                .destinations
                .iter()
                .map(|destination| Pulse::new(&self.name, destination, level))
                .collect(),
            None => Vec::new(),
        }
    }
}

fn valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase())
}

impl FromStr for Module {
    type Err = SimulationError;

    /// Parse one configuration line: a `%`-prefixed name for a flip-flop,
    /// a `&`-prefixed name for a conjunction, or the reserved name
    /// `broadcaster`, followed by ` -> ` and a comma-separated destination
    /// list.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = || SimulationError::MalformedModule(line.to_string());

        let (header, rest) = line.split_once(" -> ").ok_or_else(malformed)?;

        let (kind, name) = if let Some(name) = header.strip_prefix('%') {
            (ModuleKind::FlipFlop { on: false }, name)
        } else if let Some(name) = header.strip_prefix('&') {
            (
                ModuleKind::Conjunction {
                    last_received: HashMap::new(),
                },
                name,
            )
        } else if header == BROADCASTER_NAME {
            (ModuleKind::Broadcaster, header)
        } else {
            return Err(malformed());
        };

        if !valid_name(name) {
            return Err(malformed());
        }

        let destinations: Vec<ModuleName> = rest.split(", ").map(str::to_string).collect();
        if !destinations.iter().all(|destination| valid_name(destination)) {
            return Err(malformed());
        }

        Ok(Self {
            name: name.to_string(),
            destinations,
            kind,
        })
    }
}
