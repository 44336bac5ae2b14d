//! Analysis orchestration.
//!
//! One call builds a fresh [`SupplierGraph`] and runs, in order:
//!
//! ```text
//! build → cycles → bridges → communities → risk
//! ```
//!
//! Risk scoring reads the `in_cycle` / `is_bridge` flags written by the two
//! detectors before it, so it always runs last. Community detection reads
//! no flags. Nothing is retained between calls.

use supplynet_core::config::RiskWeights;
use supplynet_core::model::{AnalysisResult, Relationship};
use tracing::{debug, instrument};

use crate::detect::{detect_bridges, detect_communities, detect_cycles};
use crate::graph::SupplierGraph;
use crate::score::score_graph;

/// Analyze `relationships` with the default risk weights.
#[must_use]
pub fn analyze(relationships: &[Relationship]) -> AnalysisResult {
    analyze_with(relationships, &RiskWeights::default())
}

/// Analyze `relationships` with explicit risk weights.
///
/// `weights` should already have passed [`RiskWeights::validate`]. A
/// `max_score` above the 100 ceiling is clamped to it.
#[must_use]
#[instrument(skip_all, fields(relationships = relationships.len()))]
pub fn analyze_with(relationships: &[Relationship], weights: &RiskWeights) -> AnalysisResult {
    let mut graph = SupplierGraph::from_relationships(relationships);
    analyze_graph(&mut graph, weights)
}

/// Run every pass over an already-built graph, writing its flags.
#[must_use]
pub fn analyze_graph(graph: &mut SupplierGraph, weights: &RiskWeights) -> AnalysisResult {
    let cycles = detect_cycles(graph);
    let bridges = detect_bridges(graph);
    let communities = detect_communities(graph);
    let risk_scores = score_graph(graph, weights);

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        cycles = cycles.cycles.len(),
        bridges = bridges.bridges.len(),
        communities = communities.communities.len(),
        hash = graph.content_hash(),
        "analysis complete"
    );

    AnalysisResult {
        cycles,
        bridges,
        communities,
        risk_scores,
    }
}
