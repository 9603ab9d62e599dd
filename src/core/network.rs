use std::collections::HashMap;

use log::debug;

use crate::core::error::SimulationError;
use crate::core::module::Module;
use crate::core::types::{ModuleName, BROADCASTER_NAME};

/// The full set of named modules making up one communication network.
///
/// Parsing and wiring happen together: by the time `parse` returns, every
/// conjunction knows the complete set of modules feeding it, each seeded
/// to a remembered low level. The network is exclusively owned by the
/// engine that drives it and must be re-parsed for a fresh run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    modules: HashMap<ModuleName, Module>,
}

impl Network {
    /// Parse one module per line and wire conjunction inputs.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, SimulationError> {
        let mut modules = HashMap::with_capacity(lines.len());

        for line in lines {
            let module: Module = line.as_ref().parse()?;
            let name = module.name().to_string();

            if modules.insert(name.clone(), module).is_some() {
                return Err(SimulationError::DuplicateModule(name));
            }
        }

        wire_conjunction_inputs(&mut modules);

        debug!("parsed network with {} modules", modules.len());

        Ok(Self { modules })
    }

    /// Look up a module by name. `None` means the name is a sink.
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    pub(crate) fn module_mut(&mut self, name: &str) -> Option<&mut Module> {
        self.modules.get_mut(name)
    }

    /// Number of defined modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Whether a broadcaster module is defined.
    pub fn has_broadcaster(&self) -> bool {
        self.modules.contains_key(BROADCASTER_NAME)
    }

    /// Names of all modules whose destination list contains any of
    /// `targets`, sorted for deterministic iteration.
    pub fn senders_to(&self, targets: &[ModuleName]) -> Vec<ModuleName> {
        let mut senders: Vec<ModuleName> = self
            .modules
            .values()
            .filter(|module| {
                module
                    .destinations()
                    .iter()
                    .any(|destination| targets.contains(destination))
            })
            .map(|module| module.name().to_string())
            .collect();

        senders.sort();
        senders
    }
}

/// Wiring pass: every module naming a conjunction as destination becomes
/// one of that conjunction's tracked inputs. Must run before any pulse is
/// injected.
fn wire_conjunction_inputs(modules: &mut HashMap<ModuleName, Module>) {
    let edges: Vec<(ModuleName, ModuleName)> = modules
        .values()
        .flat_map(|module| {
            module
                .destinations()
                .iter()
                .map(|destination| (module.name().to_string(), destination.clone()))
        })
        .collect();

    for (source, destination) in edges {
        if let Some(module) = modules.get_mut(&destination) {
            module.track_input(&source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::module::ModuleKind;
    use crate::core::types::PulseLevel;

    const LINES: [&str; 5] = [
        "broadcaster -> a, b, c",
        "%a -> b",
        "%b -> c",
        "%c -> inv",
        "&inv -> a",
    ];

    #[test]
    fn test_parse_wires_conjunction_inputs() {
        let network = Network::parse(&LINES).unwrap();

        let inv = network.module("inv").unwrap();
        let expected: HashMap<ModuleName, PulseLevel> =
            [("c".to_string(), PulseLevel::Low)].into_iter().collect();

        assert_eq!(
            *inv.kind(),
            ModuleKind::Conjunction {
                last_received: expected
            }
        );
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = Network::parse(&LINES).unwrap();
        let second = Network::parse(&LINES).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_rejects_duplicate_names() {
        let lines = ["broadcaster -> a", "%a -> b", "%a -> c"];

        assert_eq!(
            Network::parse(&lines),
            Err(SimulationError::DuplicateModule("a".to_string()))
        );
    }

    #[test]
    fn test_parse_propagates_malformed_lines() {
        let lines = ["broadcaster -> a", "a -> b"];

        assert_eq!(
            Network::parse(&lines),
            Err(SimulationError::MalformedModule("a -> b".to_string()))
        );
    }

    #[test]
    fn test_senders_to_collects_upstream_modules() {
        let network = Network::parse(&LINES).unwrap();

        assert_eq!(network.senders_to(&["a".to_string()]), ["broadcaster", "inv"]);
        assert_eq!(network.senders_to(&["inv".to_string()]), ["c"]);
    }

    #[test]
    fn test_conjunction_with_multiple_inputs_is_fully_wired() {
        let lines = [
            "broadcaster -> a, b",
            "%a -> con",
            "%b -> con",
            "&con -> rx",
        ];
        let network = Network::parse(&lines).unwrap();

        let expected: HashMap<ModuleName, PulseLevel> = [
            ("a".to_string(), PulseLevel::Low),
            ("b".to_string(), PulseLevel::Low),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            *network.module("con").unwrap().kind(),
            ModuleKind::Conjunction {
                last_received: expected
            }
        );
    }
}
