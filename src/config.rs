use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Sizing of the text charts produced by `report`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: usize,
    pub histogram_bins: usize,
    pub beeswarm_levels: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 64,
            histogram_bins: 12,
            beeswarm_levels: 3,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub chart: ChartConfig,
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
