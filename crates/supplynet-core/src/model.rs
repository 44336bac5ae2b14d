//! Supplier relationship data model and analysis report types.
//!
//! # Wire Format
//!
//! The report types serialize to the JSON shape consumed by fraud-analysis
//! pipelines:
//!
//! ```text
//! {
//!   "cycles":      { "hasCycles": bool, "cycles": [[id, ...]] },
//!   "bridges":     { "bridges": [id, ...] },
//!   "communities": { "communities": [[id, ...]] },
//!   "riskScores":  { "providerScores": { id: 0..=100, ... } }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A directed supplier-to-supplier relationship `from → to`.
///
/// Identifiers are opaque strings. Relationships are not deduplicated: a
/// repeated pair contributes a repeated edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub from: String,
    pub to: String,
}

impl Relationship {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Returns `true` when both endpoints name the same entity.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<F: Into<String>, T: Into<String>> From<(F, T)> for Relationship {
    fn from((from, to): (F, T)) -> Self {
        Self::new(from, to)
    }
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// A supplier entity in the relationship graph.
///
/// Edge lists mirror input multiplicity: a relationship that appears `k`
/// times contributes `k` entries. The flags are written by the analysis
/// passes; edge lists never change after the graph is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    /// Sources of incoming relationships, in input order.
    pub incoming: Vec<String>,
    /// Targets of outgoing relationships, in input order.
    pub outgoing: Vec<String>,
    /// Set when the provider appears in at least one reported cycle.
    pub in_cycle: bool,
    /// Set when the provider is an articulation point.
    pub is_bridge: bool,
    /// `None` until the risk pass runs.
    pub risk_score: Option<u8>,
}

impl Provider {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            incoming: Vec::new(),
            outgoing: Vec::new(),
            in_cycle: false,
            is_bridge: false,
            risk_score: None,
        }
    }

    /// Incoming plus outgoing edge count, duplicates included.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }

    /// Returns `true` when the provider has no edges at all.
    #[must_use]
    pub fn is_isolated(&self) -> bool {
        self.incoming.is_empty() && self.outgoing.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Directed cycles found by the cycle pass.
///
/// Each cycle closes back to its start: `[a, b, c, a]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleResult {
    pub has_cycles: bool,
    pub cycles: Vec<Vec<String>>,
}

impl CycleResult {
    #[must_use]
    pub fn from_cycles(cycles: Vec<Vec<String>>) -> Self {
        Self {
            has_cycles: !cycles.is_empty(),
            cycles,
        }
    }
}

/// Articulation points of the undirected projection, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeResult {
    pub bridges: Vec<String>,
}

/// Connected components of the undirected projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityResult {
    pub communities: Vec<Vec<String>>,
}

impl CommunityResult {
    /// Component sizes in emission order.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.communities.iter().map(Vec::len).collect()
    }
}

/// Composite risk score (`0..=100`) per provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScoreResult {
    pub provider_scores: BTreeMap<String, u8>,
}

impl RiskScoreResult {
    #[must_use]
    pub fn score(&self, id: &str) -> Option<u8> {
        self.provider_scores.get(id).copied()
    }
}

/// Combined report produced by one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub cycles: CycleResult,
    pub bridges: BridgeResult,
    pub communities: CommunityResult,
    pub risk_scores: RiskScoreResult,
}
