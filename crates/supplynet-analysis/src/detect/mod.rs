//! Structural detectors over a [`SupplierGraph`](crate::graph::SupplierGraph).
//!
//! - [`cycles`]: directed trading loops (sets `in_cycle`).
//! - [`bridges`]: articulation points of the undirected projection (sets `is_bridge`).
//! - [`communities`]: connected components of the undirected projection (no flags).

pub mod bridges;
pub mod communities;
pub mod cycles;

pub use bridges::detect_bridges;
pub use communities::detect_communities;
pub use cycles::detect_cycles;
