//! Scoring configuration files

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use happyhex_core::ScoringConfig;

/// Load a scoring config from JSON, or the defaults when no file is given.
///
/// Missing fields keep their default values.
pub fn load_scoring(path: Option<&Path>) -> Result<ScoringConfig> {
    let Some(path) = path else {
        return Ok(ScoringConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: ScoringConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    tracing::info!("Loaded scoring config from {}", path.display());
    Ok(config)
}
