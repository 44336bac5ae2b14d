//! Basic graph statistics for a supplier graph.
//!
//! # Statistics Provided
//!
//! - **node_count**: Distinct providers.
//! - **edge_count**: Relationships, duplicates included.
//! - **distinct_edge_count**: Distinct ordered `(from, to)` pairs.
//! - **self_loop_count**: Relationships whose endpoints coincide.
//! - **isolated_node_count**: Providers with no edges (only possible when
//!   the graph was seeded with a roster).
//! - **max_in_degree** / **max_out_degree**: Largest incoming / outgoing
//!   list length, duplicates included.
//! - **density**: `distinct non-self-loop edges / (n * (n - 1))`. Zero for
//!   graphs with fewer than two nodes.
//! - **weakly_connected_component_count**: Components with edge direction
//!   ignored. Always equals the number of detected communities.

use std::collections::HashSet;

use petgraph::algo::connected_components;
use serde::Serialize;

use super::SupplierGraph;

/// Summary statistics for a supplier graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub distinct_edge_count: usize,
    pub self_loop_count: usize,
    pub isolated_node_count: usize,
    pub max_in_degree: usize,
    pub max_out_degree: usize,
    pub density: f64,
    pub weakly_connected_component_count: usize,
    pub content_hash: String,
}

impl GraphStats {
    #[must_use]
    pub fn from_graph(graph: &SupplierGraph) -> Self {
        let node_count = graph.node_count();

        let mut distinct: HashSet<(&str, &str)> = HashSet::new();
        let mut self_loop_count = 0;
        for provider in graph.providers() {
            for target in &provider.outgoing {
                if *target == provider.id {
                    self_loop_count += 1;
                }
                distinct.insert((provider.id.as_str(), target.as_str()));
            }
        }
        let distinct_edge_count = distinct.len();
        let distinct_non_loop = distinct.iter().filter(|(a, b)| a != b).count();

        Self {
            node_count,
            edge_count: graph.edge_count(),
            distinct_edge_count,
            self_loop_count,
            isolated_node_count: graph.providers().filter(|p| p.is_isolated()).count(),
            max_in_degree: graph.providers().map(|p| p.incoming.len()).max().unwrap_or(0),
            max_out_degree: graph.providers().map(|p| p.outgoing.len()).max().unwrap_or(0),
            density: compute_density(node_count, distinct_non_loop),
            weakly_connected_component_count: connected_components(graph.inner()),
            content_hash: graph.content_hash().to_string(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    let max_edges = node_count * (node_count - 1);
    edge_count as f64 / max_edges as f64
}
