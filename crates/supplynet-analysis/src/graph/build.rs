//! Graph construction from a relationship list.
//!
//! # Overview
//!
//! [`SupplierGraph`] stores one [`Provider`] per distinct identifier in a
//! petgraph [`DiGraph`]. Construction is two-pass:
//!
//! 1. Create a node for every identifier in first-seen order (`from` before
//!    `to` within a relationship), with empty edge lists.
//! 2. For each relationship `(a, b)` in input order, append `b` to `a`'s
//!    outgoing list, `a` to `b`'s incoming list, and add the petgraph edge.
//!
//! ## Node Order
//!
//! Node indices are assigned in first-seen order, so
//! [`SupplierGraph::node_indices`] is the graph iteration order. Every
//! traversal uses it to pick DFS roots, which makes it part of the output
//! contract for cycles, bridges, and communities.
//!
//! ## Multiplicity
//!
//! Unlike a dependency graph, repeated relationships are kept: a pair that
//! appears `k` times yields `k` list entries and `k` petgraph edges. A
//! self-loop `(a, a)` lands in both of `a`'s lists.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use supplynet_core::model::{Provider, Relationship};
use tracing::instrument;

// ---------------------------------------------------------------------------
// SupplierGraph
// ---------------------------------------------------------------------------

/// A directed supplier graph built once per analysis.
///
/// Edge lists are fixed after construction; only the provider flags
/// (`in_cycle`, `is_bridge`, `risk_score`) are written by later passes.
#[derive(Debug, Clone)]
pub struct SupplierGraph {
    graph: DiGraph<Provider, ()>,
    node_map: HashMap<String, NodeIndex>,
    content_hash: String,
}

impl SupplierGraph {
    /// Build a graph from `relationships`.
    #[must_use]
    #[instrument(skip_all, fields(relationships = relationships.len()))]
    pub fn from_relationships(relationships: &[Relationship]) -> Self {
        Self::with_roster(std::iter::empty::<&str>(), relationships)
    }

    /// Build a graph whose first nodes are `roster`, in roster order.
    ///
    /// Roster entries with no relationships become isolated nodes. Entries
    /// that repeat, or that also appear in `relationships`, are created once.
    #[must_use]
    pub fn with_roster<I, S>(roster: I, relationships: &[Relationship]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = DiGraph::<Provider, ()>::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();

        let mut ensure = |id: &str| -> NodeIndex {
            if let Some(&idx) = node_map.get(id) {
                return idx;
            }
            let idx = graph.add_node(Provider::new(id));
            node_map.insert(id.to_string(), idx);
            idx
        };

        // Pass 1: nodes in first-seen order.
        for id in roster {
            ensure(id.as_ref());
        }
        let mut endpoints = Vec::with_capacity(relationships.len());
        for rel in relationships {
            let from = ensure(&rel.from);
            let to = ensure(&rel.to);
            endpoints.push((from, to));
        }

        // Pass 2: edges in input order.
        for (rel, (from, to)) in relationships.iter().zip(endpoints) {
            graph[from].outgoing.push(rel.to.clone());
            graph[to].incoming.push(rel.from.clone());
            graph.add_edge(from, to, ());
        }

        Self {
            graph,
            node_map,
            content_hash: compute_relationship_hash(relationships),
        }
    }

    /// Number of distinct providers.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of relationships, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// BLAKE3 fingerprint of the ordered relationship list.
    #[must_use]
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// Node indices in graph iteration order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Providers in graph iteration order.
    pub fn providers(&self) -> impl Iterator<Item = &Provider> + '_ {
        self.graph.node_weights()
    }

    /// Look up the `NodeIndex` for a provider ID.
    #[must_use]
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    #[must_use]
    pub fn provider(&self, id: &str) -> Option<&Provider> {
        self.node_index(id).map(|idx| &self.graph[idx])
    }

    /// The provider at `idx`, if the index belongs to this graph.
    #[must_use]
    pub fn provider_at(&self, idx: NodeIndex) -> Option<&Provider> {
        self.graph.node_weight(idx)
    }

    /// Mutable access to the provider at `idx` for the flag-writing passes.
    pub(crate) fn provider_at_mut(&mut self, idx: NodeIndex) -> Option<&mut Provider> {
        self.graph.node_weight_mut(idx)
    }

    /// Mutable access to every provider, in graph order.
    pub(crate) fn providers_mut(&mut self) -> impl Iterator<Item = &mut Provider> + '_ {
        self.graph.node_weights_mut()
    }

    /// Outgoing neighbors of `idx` as node indices, in list order.
    ///
    /// Duplicates are preserved. Unlike petgraph's own neighbor iterator,
    /// this follows input order rather than reverse insertion order.
    #[must_use]
    pub fn outgoing_indices(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.graph.node_weight(idx).map_or_else(Vec::new, |provider| {
            provider
                .outgoing
                .iter()
                .filter_map(|id| self.node_index(id))
                .collect()
        })
    }

    /// The provider ID label for a node.
    #[must_use]
    pub fn provider_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(|p| p.id.as_str())
    }

    /// The underlying petgraph graph, one edge per relationship.
    #[must_use]
    pub const fn inner(&self) -> &DiGraph<Provider, ()> {
        &self.graph
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Compute a BLAKE3 hash of the ordered relationship list.
fn compute_relationship_hash(relationships: &[Relationship]) -> String {
    let mut hasher = blake3::Hasher::new();
    for rel in relationships {
        hasher.update(rel.from.as_bytes());
        hasher.update(b"\x00");
        hasher.update(rel.to.as_bytes());
        hasher.update(b"\x00");
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
