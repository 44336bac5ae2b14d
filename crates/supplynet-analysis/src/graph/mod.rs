//! Supplier graph module.
//!
//! # Overview
//!
//! This module turns a flat relationship list into the graph every analysis
//! pass works on.
//!
//! ## Pipeline
//!
//! ```text
//! [Relationship]
//!        ↓  build::SupplierGraph::from_relationships()
//! SupplierGraph (DiGraph<Provider, ()>, first-seen node order, multigraph)
//!        ↓  projection::UndirectedProjection::from_graph()
//! UndirectedProjection (neighbor sets, used by bridges + communities)
//!        ↓  stats::GraphStats::from_graph()
//! GraphStats (counts, degrees, density, weak components)
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use supplynet_analysis::graph::{GraphStats, SupplierGraph};
//! use supplynet_core::Relationship;
//!
//! let rels = vec![Relationship::new("A", "B"), Relationship::new("B", "C")];
//! let graph = SupplierGraph::from_relationships(&rels);
//! let stats = GraphStats::from_graph(&graph);
//! assert_eq!(stats.node_count, 3);
//! ```

pub mod build;
pub mod projection;
pub mod stats;

pub use build::SupplierGraph;
pub use projection::UndirectedProjection;
pub use stats::GraphStats;
