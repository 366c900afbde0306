use anyhow::{Context, Result};
use packs_solver::{PackCalculator, Strategy};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PackConfig {
    pub packs: Vec<i64>,
    #[serde(default)]
    pub strategy: Strategy,
}

impl PackConfig {
    /// Validates the catalog. A strategy given on the command line wins over the file.
    pub fn into_calculator(self, strategy: Option<Strategy>) -> Result<PackCalculator> {
        let strategy = strategy.unwrap_or(self.strategy);
        PackCalculator::new(&self.packs, strategy).context("invalid pack catalog")
    }
}

/// Loads the pack configuration from a `.json` file path or an inline json string.
pub fn load_config(config: &str) -> Result<PackConfig> {
    let config = if config.ends_with(".json") {
        fs::read_to_string(config)
            .with_context(|| format!("failed to read config file: {}", config))?
    } else {
        config.to_string()
    };

    serde_json::from_str::<PackConfig>(&config).context("failed to parse config")
}
