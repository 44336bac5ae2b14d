//! Directed cycle detection over a single DFS forest.
//!
//! # Traversal Contract
//!
//! Roots are taken in graph order, skipping any node already visited by an
//! earlier root. A node is visited at most once across the whole forest, so
//! this reports the cycles *encountered* by that one forest pass rather
//! than every elementary cycle. Overlapping cycles through an already
//! explored node can go unreported; output cardinality depends on this.
//!
//! For each outgoing neighbor, in list order:
//!
//! - unvisited: descend;
//! - on the recursion stack: record `path[first(neighbor)..] + [neighbor]`;
//! - visited and off the stack: ignore.
//!
//! A self-loop `a → a` is recorded as `[a, a]`. Duplicate edges to a node
//! on the stack record the same cycle once per edge.

use petgraph::graph::NodeIndex;
use supplynet_core::model::CycleResult;
use tracing::{debug, instrument, trace};

use crate::graph::SupplierGraph;

/// Find cycles and set `in_cycle` on every provider that appears in one.
#[instrument(skip_all, fields(nodes = graph.node_count()))]
pub fn detect_cycles(graph: &mut SupplierGraph) -> CycleResult {
    let found = find_cycles(graph);

    for cycle in &found {
        for &idx in cycle {
            if let Some(provider) = graph.provider_at_mut(idx) {
                provider.in_cycle = true;
            }
        }
    }

    let cycles: Vec<Vec<String>> = found
        .iter()
        .map(|cycle| {
            cycle
                .iter()
                .filter_map(|&idx| graph.provider_id(idx).map(str::to_string))
                .collect()
        })
        .collect();

    debug!(count = cycles.len(), "cycle detection complete");
    CycleResult::from_cycles(cycles)
}

/// Run the DFS forest without touching provider flags.
///
/// Each cycle is returned as node indices, closed back to its start.
#[must_use]
pub fn find_cycles(graph: &SupplierGraph) -> Vec<Vec<NodeIndex>> {
    let mut search = CycleSearch::new(graph);
    for root in graph.node_indices() {
        if !search.visited[root.index()] {
            search.visited[root.index()] = true;
            search.visit(root);
        }
    }
    search.cycles
}

struct CycleSearch<'g> {
    graph: &'g SupplierGraph,
    visited: Vec<bool>,
    on_stack: Vec<bool>,
    /// Current root-to-node path. Pushed on entry, popped on return, so a
    /// sibling branch always starts from its parent's path.
    path: Vec<NodeIndex>,
    cycles: Vec<Vec<NodeIndex>>,
}

impl<'g> CycleSearch<'g> {
    fn new(graph: &'g SupplierGraph) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            visited: vec![false; n],
            on_stack: vec![false; n],
            path: Vec::new(),
            cycles: Vec::new(),
        }
    }

    fn visit(&mut self, node: NodeIndex) {
        self.on_stack[node.index()] = true;
        self.path.push(node);

        for next in self.graph.outgoing_indices(node) {
            if !self.visited[next.index()] {
                self.visited[next.index()] = true;
                self.visit(next);
            } else if self.on_stack[next.index()] {
                self.record(next);
            }
        }

        self.path.pop();
        self.on_stack[node.index()] = false;
    }

    fn record(&mut self, start: NodeIndex) {
        let Some(pos) = self.path.iter().position(|&n| n == start) else {
            return;
        };
        let mut cycle = self.path[pos..].to_vec();
        cycle.push(start);
        trace!(len = cycle.len() - 1, "cycle found");
        self.cycles.push(cycle);
    }
}
