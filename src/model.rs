// Core structs: Listing, MarketSnapshot
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// One marketplace listing, sold or active, as a retrieval collaborator
/// delivers it. Price fields are kept raw here; `normalizer` resolves them
/// into a single canonical amount.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub title: String,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub shipping_price: Option<f64>,
    #[serde(default)]
    pub buying_format: BuyingFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyingFormat {
    FixedPrice,
    Auction,
    BestOffer,
    #[default]
    Unknown,
}

/// A single search result snapshot: everything the analyzer needs for one
/// query, frozen at `fetched_at`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketSnapshot {
    pub query: String,
    pub fetched_at: DateTime<Utc>,
    #[serde(default)]
    pub sold: Vec<Listing>,
    #[serde(default)]
    pub active: Vec<Listing>,
}

impl MarketSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
