//! Market analytics for collectible comps: turns one snapshot of sold and
//! active listings into a fair market value, three market-health indicators,
//! a tier with per-persona advice, a pricing recommendation and chart
//! layouts.

// Core modules
pub mod advisory;
pub mod analyzer;
pub mod chart;
pub mod config;
pub mod model;
pub mod normalizer;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use advisory::AdvisoryRequest;
pub use analyzer::price_analysis::{Analyzer, MarketReport};
pub use analyzer::AnalyzerImpl;
pub use model::{BuyingFormat, Listing, MarketSnapshot};
