//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Example configuration written by `axebridge init`
pub const EXAMPLE_CONFIG: &str = include_str!("../../bridge.example.yaml");

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<BridgeConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&contents)
}

/// Parse and validate configuration from YAML text
pub fn parse_config(contents: &str) -> Result<BridgeConfig> {
    let config: BridgeConfig = serde_yaml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}
