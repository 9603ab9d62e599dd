use crate::core::error::SimulationError;
use crate::core::execution::cycle_analyzer::CycleAnalyzer;
use crate::core::network::Network;

// Two flip-flop chains with periods 2 and 4, each terminating in its own
// conjunction, joined through a final conjunction into the sink.
const TWO_CHAIN: [&str; 7] = [
    "broadcaster -> a, b",
    "%a -> ca",
    "%b -> bb",
    "%bb -> cb",
    "&ca -> con",
    "&cb -> con",
    "&con -> rx",
];

fn analyzer(lines: &[&str], sink: &str) -> Result<CycleAnalyzer, SimulationError> {
    CycleAnalyzer::new(Network::parse(lines).unwrap(), sink)
}

#[test]
fn test_detection_set_is_one_level_above_the_final_conjunction() {
    let analyzer = analyzer(&TWO_CHAIN, "rx").unwrap();

    assert_eq!(analyzer.detection_set(), ["ca", "cb"]);
}

#[test]
fn test_run_folds_branch_periods_with_lcm() {
    // Chain a flips every activation, so ca first emits high at
    // activation 2; chain b -> bb halves that rate, so cb first emits
    // high at activation 4.
    let mut analyzer = analyzer(&TWO_CHAIN, "rx").unwrap();

    assert_eq!(analyzer.run(), 4);
}

#[test]
fn test_non_conjunction_detection_set_is_rejected() {
    let lines = [
        "broadcaster -> a, b",
        "%a -> con",
        "%b -> con",
        "&con -> rx",
    ];

    assert!(matches!(
        analyzer(&lines, "rx"),
        Err(SimulationError::StructuralAssumptionViolated(_))
    ));
}

#[test]
fn test_sink_with_no_senders_is_rejected() {
    let lines = ["broadcaster -> a", "%a -> b"];

    assert!(matches!(
        analyzer(&lines, "rx"),
        Err(SimulationError::StructuralAssumptionViolated(_))
    ));
}

#[test]
fn test_walk_that_never_widens_is_rejected() {
    // a and b feed each other forever without the frontier ever growing.
    let lines = ["broadcaster -> q", "%a -> b, rx", "%b -> a"];

    assert!(matches!(
        analyzer(&lines, "rx"),
        Err(SimulationError::StructuralAssumptionViolated(_))
    ));
}
