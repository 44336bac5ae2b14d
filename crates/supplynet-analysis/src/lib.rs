#![forbid(unsafe_code)]
//! supplynet-analysis library.
//!
//! Builds a supplier graph from a relationship list and produces the
//! structural risk report: directed trading loops, articulation-point
//! "bridge" providers, connected trading communities, and a composite risk
//! score per provider.
//!
//! ```rust
//! use supplynet_analysis::analyze;
//! use supplynet_core::Relationship;
//!
//! let report = analyze(&[
//!     Relationship::new("A", "B"),
//!     Relationship::new("B", "C"),
//!     Relationship::new("C", "A"),
//! ]);
//! assert!(report.cycles.has_cycles);
//! assert!(report.bridges.bridges.is_empty());
//! ```
//!
//! # Conventions
//!
//! - **Errors**: the analysis passes are infallible; validation happens in
//!   `supplynet_core::input` before the core is called.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod detect;
pub mod graph;
pub mod pipeline;
pub mod score;

pub use graph::{GraphStats, SupplierGraph};
pub use pipeline::{analyze, analyze_graph, analyze_with};
