//! Bridge providers: articulation points of the undirected projection.
//!
//! # Algorithm
//!
//! Low-link DFS over [`UndirectedProjection`], rooted at each unvisited node
//! in graph order. Each node gets a discovery time from one counter owned
//! by the search and shared by every frame of every tree in the forest, so
//! discovery times are strictly increasing across the whole forest. `low`
//! starts at the discovery time and takes:
//!
//! - the `low` of each tree child once that child returns;
//! - the discovery time of any already-visited neighbor other than the
//!   node's DFS parent (a back edge).
//!
//! A node is an articulation point if it is a tree root with more than one
//! tree child, or a non-root with some child whose `low` is at least the
//! node's own discovery time.
//!
//! Bridges are reported in the order they qualify, each at most once.

use petgraph::graph::NodeIndex;
use supplynet_core::model::BridgeResult;
use tracing::{debug, instrument, trace};

use crate::graph::{SupplierGraph, UndirectedProjection};

/// Find articulation points and set `is_bridge` on each.
#[instrument(skip_all, fields(nodes = graph.node_count()))]
pub fn detect_bridges(graph: &mut SupplierGraph) -> BridgeResult {
    let projection = UndirectedProjection::from_graph(graph);
    let found = articulation_points(graph, &projection);

    for &idx in &found {
        if let Some(provider) = graph.provider_at_mut(idx) {
            provider.is_bridge = true;
        }
    }

    let bridges: Vec<String> = found
        .iter()
        .filter_map(|&idx| graph.provider_id(idx).map(str::to_string))
        .collect();

    debug!(count = bridges.len(), "bridge detection complete");
    BridgeResult { bridges }
}

/// Compute articulation points without touching provider flags.
#[must_use]
pub fn articulation_points(
    graph: &SupplierGraph,
    projection: &UndirectedProjection,
) -> Vec<NodeIndex> {
    let mut search = LowLink::new(projection);
    for root in graph.node_indices() {
        if search.disc[root.index()].is_none() {
            search.visit(root, None);
        }
    }
    search.found
}

struct LowLink<'p> {
    projection: &'p UndirectedProjection,
    /// Discovery time; `None` while unvisited.
    disc: Vec<Option<usize>>,
    low: Vec<usize>,
    /// Forest-wide discovery counter.
    time: usize,
    flagged: Vec<bool>,
    found: Vec<NodeIndex>,
}

impl<'p> LowLink<'p> {
    fn new(projection: &'p UndirectedProjection) -> Self {
        let n = projection.node_count();
        Self {
            projection,
            disc: vec![None; n],
            low: vec![0; n],
            time: 0,
            flagged: vec![false; n],
            found: Vec::new(),
        }
    }

    fn visit(&mut self, node: NodeIndex, parent: Option<NodeIndex>) {
        let u = node.index();
        self.time += 1;
        let disc_u = self.time;
        self.disc[u] = Some(disc_u);
        self.low[u] = disc_u;

        let mut children = 0usize;
        let projection = self.projection;

        for &next in projection.neighbors(node) {
            let v = next.index();
            match self.disc[v] {
                None => {
                    children += 1;
                    self.visit(next, Some(node));
                    self.low[u] = self.low[u].min(self.low[v]);

                    let is_cut = match parent {
                        Some(_) => self.low[v] >= disc_u,
                        None => children > 1,
                    };
                    if is_cut {
                        self.flag(node);
                    }
                }
                Some(disc_v) if Some(next) != parent => {
                    self.low[u] = self.low[u].min(disc_v);
                }
                Some(_) => {}
            }
        }
    }

    fn flag(&mut self, node: NodeIndex) {
        if !self.flagged[node.index()] {
            self.flagged[node.index()] = true;
            trace!(node = node.index(), "articulation point");
            self.found.push(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supplynet_core::model::Relationship;

    fn build(pairs: &[(&str, &str)]) -> SupplierGraph {
        let rels: Vec<Relationship> =
            pairs.iter().map(|&(a, b)| Relationship::new(a, b)).collect();
        SupplierGraph::from_relationships(&rels)
    }

    fn bridges(pairs: &[(&str, &str)]) -> Vec<String> {
        let mut graph = build(pairs);
        detect_bridges(&mut graph).bridges
    }

    #[test]
    fn chain_interior_nodes_are_bridges() {
        let mut graph = build(&[("A", "B"), ("B", "C"), ("C", "D")]);
        let result = detect_bridges(&mut graph);
        // Post-order: C qualifies before B.
        assert_eq!(result.bridges, vec!["C", "B"]);
        assert!(graph.provider("B").expect("B").is_bridge);
        assert!(graph.provider("C").expect("C").is_bridge);
        assert!(!graph.provider("A").expect("A").is_bridge);
        assert!(!graph.provider("D").expect("D").is_bridge);
    }

    #[test]
    fn triangle_has_no_bridges() {
        assert!(bridges(&[("A", "B"), ("B", "C"), ("C", "A")]).is_empty());
    }

    #[test]
    fn fully_connected_graph_has_no_bridges() {
        let found = bridges(&[
            ("A", "B"),
            ("B", "C"),
            ("C", "A"),
            ("A", "C"),
            ("B", "A"),
            ("C", "B"),
        ]);
        assert!(found.is_empty());
    }

    #[test]
    fn long_chain_has_every_interior_node() {
        let mut found = bridges(&[
            ("A", "B"),
            ("B", "C"),
            ("C", "D"),
            ("D", "E"),
            ("E", "F"),
        ]);
        found.sort();
        assert_eq!(found, vec!["B", "C", "D", "E"]);
    }

    #[test]
    fn endpoints_and_separate_pairs_are_not_bridges() {
        let mut graph = build(&[("A", "B"), ("B", "C"), ("C", "D"), ("E", "F")]);
        detect_bridges(&mut graph);
        for id in ["A", "D", "E", "F"] {
            assert!(!graph.provider(id).expect("node").is_bridge, "{id}");
        }
        for id in ["B", "C"] {
            assert!(graph.provider(id).expect("node").is_bridge, "{id}");
        }
    }

    #[test]
    fn star_center_is_root_bridge() {
        // Hub is the DFS root with three tree children.
        assert_eq!(bridges(&[("H", "A"), ("H", "B"), ("H", "C")]), vec!["H"]);
    }

    #[test]
    fn root_with_single_child_is_not_bridge() {
        assert!(bridges(&[("A", "B")]).is_empty());
    }

    #[test]
    fn two_triangles_joined_at_a_node() {
        // Bowtie: C is shared by triangles ABC and CDE.
        let found = bridges(&[
            ("A", "B"),
            ("B", "C"),
            ("C", "A"),
            ("C", "D"),
            ("D", "E"),
            ("E", "C"),
        ]);
        assert_eq!(found, vec!["C"]);
    }

    #[test]
    fn node_flagged_by_several_children_is_reported_once() {
        // B separates A, C and D from each other.
        assert_eq!(bridges(&[("A", "B"), ("B", "C"), ("B", "D")]), vec!["B"]);
    }

    #[test]
    fn discovery_counter_spans_the_forest() {
        // The second tree (X, Y, Z) must get discovery times after the first
        // tree's, otherwise back-edge lows from it would compare against
        // stale times. Y is the only cut vertex there.
        let found = bridges(&[
            ("A", "B"),
            ("B", "C"),
            ("C", "A"),
            ("X", "Y"),
            ("Y", "Z"),
        ]);
        assert_eq!(found, vec!["Y"]);
    }

    #[test]
    fn deep_subtree_back_edge_keeps_ancestor_off_the_list() {
        // A - B - C - D with D → B closing a loop: only B is a cut vertex
        // (it separates A). C is not, because D reaches back to B.
        let found = bridges(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "B")]);
        assert_eq!(found, vec!["B"]);
    }

    #[test]
    fn self_loop_does_not_crash_or_flag() {
        assert!(bridges(&[("A", "A")]).is_empty());
        assert_eq!(bridges(&[("A", "A"), ("A", "B"), ("B", "C")]), vec!["B"]);
    }

    #[test]
    fn duplicate_edges_do_not_change_result() {
        assert_eq!(
            bridges(&[("A", "B"), ("A", "B"), ("B", "C"), ("B", "C")]),
            vec!["B"]
        );
    }
}
