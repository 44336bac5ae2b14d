//! `snet example`: analyze the built-in demonstration list.

use supplynet_analysis::analyze_with;
use supplynet_core::config::RiskWeights;
use supplynet_core::model::Relationship;

use super::analyze::render_report;
use crate::output::OutputMode;

/// Three providers trading in a loop, plus one unrelated pair.
pub const EXAMPLE_RELATIONSHIPS: [(&str, &str); 4] = [
    ("ProveedorA", "ProveedorB"),
    ("ProveedorB", "ProveedorC"),
    ("ProveedorC", "ProveedorA"),
    ("ProveedorD", "ProveedorE"),
];

#[must_use]
pub fn example_relationships() -> Vec<Relationship> {
    EXAMPLE_RELATIONSHIPS
        .iter()
        .map(|&(from, to)| Relationship::new(from, to))
        .collect()
}

/// Execute `snet example`.
pub fn run_example(weights: &RiskWeights, output: OutputMode) -> anyhow::Result<()> {
    let report = analyze_with(&example_relationships(), weights);
    render_report(output, &report)
}
