#![forbid(unsafe_code)]
//! supplynet-core library.
//!
//! Shared types for supplier relationship analysis: the relationship and
//! provider model, the report types, input validation, error codes, and
//! risk-weight configuration.
//!
//! # Conventions
//!
//! - **Errors**: `thiserror` enums at the parse/config boundaries, each
//!   mapped to a stable [`error::ErrorCode`].
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod input;
pub mod model;

pub use config::{ProjectConfig, RiskWeights};
pub use error::ErrorCode;
pub use input::{InputError, parse_relationships};
pub use model::{
    AnalysisResult, BridgeResult, CommunityResult, CycleResult, Provider, Relationship,
    RiskScoreResult,
};
