// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod advice;
pub mod market_indicators;
pub mod price_analysis;
pub mod pricing;
pub mod stats;
pub mod tier;

// Re-export the main Analyzer implementation for ease of use.
pub use price_analysis::AnalyzerImpl;
