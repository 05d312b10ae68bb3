use crate::analyzer::price_analysis::MarketReport;
use crate::utils::round_to;
use serde::Serialize;

/// Request payload for the external advisory service that turns indicator
/// values into natural-language commentary. Field names and numeric forms
/// (signed pressure to one decimal, whole-number scores, fmv rounded to
/// cents) follow that service's call contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryRequest {
    pub market_pressure: Option<f64>,
    pub liquidity_score: f64,
    pub market_confidence: f64,
    pub fmv: Option<f64>,
}

impl AdvisoryRequest {
    pub fn from_report(report: &MarketReport) -> Self {
        Self {
            market_pressure: report.pressure.value,
            liquidity_score: report.liquidity.score.round(),
            market_confidence: report.confidence.value,
            fmv: report.fmv.map(|v| round_to(v, 2)),
        }
    }
}
