//! Per-provider risk scoring.

pub mod risk;

pub use risk::{risk_score, score_graph, score_providers};
