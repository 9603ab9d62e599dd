use serde::Serialize;

/// Name of a module as written in the configuration text.
pub type ModuleName = String;

/// Reserved name of the single broadcast module.
pub const BROADCASTER_NAME: &str = "broadcaster";

/// Sender name carried by the synthetic pulse each activation injects.
pub const BUTTON_NAME: &str = "button";

/// The two signal levels a pulse can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PulseLevel {
    Low,
    High,
}

impl std::fmt::Display for PulseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PulseLevel::Low => write!(f, "low"),
            PulseLevel::High => write!(f, "high"),
        }
    }
}

/// A directed, leveled signal travelling from one module to another.
///
/// Created by a module's `receive` and consumed exactly once when the
/// engine dequeues it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pulse {
    pub sender: ModuleName,
    pub destination: ModuleName,
    pub level: PulseLevel,
}

impl Pulse {
    /// Create a new pulse.
    pub fn new(sender: &str, destination: &str, level: PulseLevel) -> Self {
        Self {
            sender: sender.to_string(),
            destination: destination.to_string(),
            level,
        }
    }

    /// The synthetic low pulse one button activation injects into the
    /// broadcaster.
    pub fn button_press() -> Self {
        Self::new(BUTTON_NAME, BROADCASTER_NAME, PulseLevel::Low)
    }
}

impl std::fmt::Display for Pulse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -{}-> {}", self.sender, self.level, self.destination)
    }
}
