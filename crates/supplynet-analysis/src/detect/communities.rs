//! Trading communities: connected components of the undirected projection.
//!
//! Components are emitted in the order their root is reached while scanning
//! graph order; members are listed in DFS visitation order. A provider with
//! no edges forms a singleton community. This pass reads no flags and sets
//! none.

use petgraph::graph::NodeIndex;
use supplynet_core::model::CommunityResult;
use tracing::{debug, instrument};

use crate::graph::{SupplierGraph, UndirectedProjection};

#[instrument(skip_all, fields(nodes = graph.node_count()))]
pub fn detect_communities(graph: &SupplierGraph) -> CommunityResult {
    let projection = UndirectedProjection::from_graph(graph);

    let communities: Vec<Vec<String>> = components(graph, &projection)
        .into_iter()
        .map(|members| {
            members
                .into_iter()
                .filter_map(|idx| graph.provider_id(idx).map(str::to_string))
                .collect()
        })
        .collect();

    debug!(count = communities.len(), "community detection complete");
    CommunityResult { communities }
}

/// Connected components as node indices, in emission order.
#[must_use]
pub fn components(
    graph: &SupplierGraph,
    projection: &UndirectedProjection,
) -> Vec<Vec<NodeIndex>> {
    let mut visited = vec![false; projection.node_count()];
    let mut out = Vec::new();

    for root in graph.node_indices() {
        if !visited[root.index()] {
            let mut members = Vec::new();
            collect(projection, root, &mut visited, &mut members);
            out.push(members);
        }
    }

    out
}

fn collect(
    projection: &UndirectedProjection,
    node: NodeIndex,
    visited: &mut [bool],
    members: &mut Vec<NodeIndex>,
) {
    visited[node.index()] = true;
    members.push(node);

    for &next in projection.neighbors(node) {
        if !visited[next.index()] {
            collect(projection, next, visited, members);
        }
    }
}
