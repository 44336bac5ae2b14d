pub mod analyze;
pub mod completions;
pub mod example;
pub mod stats;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use supplynet_core::ErrorCode;
use supplynet_core::input::parse_relationships;
use supplynet_core::model::Relationship;
use tracing::debug;

use crate::output::CliError;

/// Read and validate a relationship array from `file`, or stdin when the
/// path is absent or `-`.
pub fn read_relationships(file: Option<&Path>) -> anyhow::Result<Vec<Relationship>> {
    let text = read_input(file)?;
    let relationships = parse_relationships(&text)?;
    debug!(count = relationships.len(), "relationships loaded");
    Ok(relationships)
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path).map_err(|e| {
            CliError::coded(
                format!("failed to read {}: {e}", path.display()),
                ErrorCode::InputUnreadable,
            )
            .into()
        }),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(|e| {
                anyhow::Error::from(CliError::coded(
                    format!("failed to read stdin: {e}"),
                    ErrorCode::InputUnreadable,
                ))
            })?;
            Ok(buf)
        }
    }
}
