//! Undirected projection of a [`SupplierGraph`].
//!
//! Every directed edge `a → b` becomes the undirected pair `{a, b}`.
//! Neighbor lists have set semantics: direction and multiplicity
//! collapse, so each neighbor appears once.
//!
//! Neighbor order is insertion order while scanning nodes in graph order
//! and each node's outgoing list in list order. For `a → b` the entry `b`
//! is appended to `a`'s list before `a` is appended to `b`'s. The bridge
//! and community traversals iterate these lists, so the order is part of
//! their output contract.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;

use super::SupplierGraph;

/// Per-node undirected neighbor lists, indexed by `NodeIndex::index()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedProjection {
    neighbors: Vec<Vec<NodeIndex>>,
}

impl UndirectedProjection {
    #[must_use]
    pub fn from_graph(graph: &SupplierGraph) -> Self {
        let mut neighbors: Vec<Vec<NodeIndex>> = vec![Vec::new(); graph.node_count()];
        let mut seen: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();

        let mut link = |from: NodeIndex, to: NodeIndex| {
            if seen.insert((from, to)) {
                neighbors[from.index()].push(to);
            }
        };

        for node in graph.node_indices() {
            for next in graph.outgoing_indices(node) {
                link(node, next);
                link(next, node);
            }
        }

        Self { neighbors }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Undirected neighbors of `node`; empty for unknown indices.
    #[must_use]
    pub fn neighbors(&self, node: NodeIndex) -> &[NodeIndex] {
        self.neighbors
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supplynet_core::model::Relationship;

    fn project(pairs: &[(&str, &str)]) -> (SupplierGraph, UndirectedProjection) {
        let rels: Vec<Relationship> =
            pairs.iter().map(|&(a, b)| Relationship::new(a, b)).collect();
        let graph = SupplierGraph::from_relationships(&rels);
        let projection = UndirectedProjection::from_graph(&graph);
        (graph, projection)
    }

    fn names<'g>(
        graph: &'g SupplierGraph,
        projection: &UndirectedProjection,
        id: &str,
    ) -> Vec<&'g str> {
        let idx = graph.node_index(id).expect("node exists");
        projection
            .neighbors(idx)
            .iter()
            .filter_map(|&n| graph.provider_id(n))
            .collect()
    }

    #[test]
    fn direction_collapses() {
        let (graph, projection) = project(&[("A", "B"), ("B", "A")]);
        assert_eq!(names(&graph, &projection, "A"), vec!["B"]);
        assert_eq!(names(&graph, &projection, "B"), vec!["A"]);
    }

    #[test]
    fn duplicates_collapse() {
        let (graph, projection) = project(&[("A", "B"), ("A", "B"), ("A", "B")]);
        assert_eq!(names(&graph, &projection, "A"), vec!["B"]);
    }

    #[test]
    fn neighbor_order_follows_graph_scan() {
        // Scan: A→B (A:[B], B:[A]), B→C (B:[A,C], C:[B]), C→A (C:[B,A], A:[B,C]).
        let (graph, projection) = project(&[("A", "B"), ("B", "C"), ("C", "A")]);
        assert_eq!(names(&graph, &projection, "A"), vec!["B", "C"]);
        assert_eq!(names(&graph, &projection, "B"), vec!["A", "C"]);
        assert_eq!(names(&graph, &projection, "C"), vec!["B", "A"]);
    }

    #[test]
    fn self_loop_is_own_neighbor_once() {
        let (graph, projection) = project(&[("A", "A")]);
        assert_eq!(names(&graph, &projection, "A"), vec!["A"]);
    }

    #[test]
    fn unknown_index_has_no_neighbors() {
        let (_, projection) = project(&[("A", "B")]);
        assert!(projection.neighbors(NodeIndex::new(99)).is_empty());
        assert_eq!(projection.node_count(), 2);
    }
}
