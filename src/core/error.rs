use thiserror::Error;

/// Errors surfaced by parsing, wiring, and cycle analysis.
///
/// Every variant is a programming or input error; re-running with the same
/// input yields the same outcome, so none of them are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A configuration line does not match the module grammar.
    #[error("malformed module definition: {0:?}")]
    MalformedModule(String),

    /// Two configuration lines define a module with the same name.
    #[error("duplicate module name: {0:?}")]
    DuplicateModule(String),

    /// The configuration defines no broadcaster module.
    #[error("network has no broadcaster module")]
    MissingBroadcaster,

    /// The reverse-adjacency walk did not converge on a detection set made
    /// of conjunction modules, so the cycle analyzer cannot produce a
    /// trustworthy answer.
    #[error("structural assumption violated: {0}")]
    StructuralAssumptionViolated(String),
}
