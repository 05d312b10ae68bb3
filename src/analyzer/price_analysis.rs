use crate::analyzer::advice::{persona_advice, PersonaAdvice};
use crate::analyzer::market_indicators::{
    ConfidenceReading, LiquidityReading, MarketIndicators, PressureReading,
};
use crate::analyzer::pricing::{recommend_pricing, PricingRecommendation};
use crate::analyzer::stats::{self, PriceStats};
use crate::analyzer::tier::{classify_market, MarketTier};
use crate::model::MarketSnapshot;
use crate::normalizer::{asking_prices, sold_prices};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Trait defining the interface for a snapshot analyzer.
pub trait Analyzer {
    fn analyze(&self, snapshot: &MarketSnapshot) -> MarketReport;
}

/// Implementation of the snapshot analyzer.
pub struct AnalyzerImpl;

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self
    }
}

/// Everything derived from one listings snapshot: the price samples, fair
/// market value, the three indicators, tier, per-persona advice and the
/// pricing recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketReport {
    pub query: String,
    pub fetched_at: DateTime<Utc>,
    pub sold_prices: Vec<f64>,
    pub asking_prices: Vec<f64>,
    pub fmv: Option<f64>,
    pub sold_stats: Option<PriceStats>,
    pub pressure: PressureReading,
    pub confidence: ConfidenceReading,
    pub liquidity: LiquidityReading,
    pub tier: MarketTier,
    pub advice: PersonaAdvice,
    pub pricing: Option<PricingRecommendation>,
}

impl Analyzer for AnalyzerImpl {
    /// Runs the full pipeline over one snapshot. `fetched_at` is copied from
    /// the snapshot, so identical input produces an identical report.
    fn analyze(&self, snapshot: &MarketSnapshot) -> MarketReport {
        let sold = sold_prices(&snapshot.sold);
        let asking = asking_prices(&snapshot.active);
        debug!(
            "resolved {} sold / {} asking prices for \"{}\"",
            sold.len(),
            asking.len(),
            snapshot.query
        );

        let fmv = stats::fair_market_value(&sold);
        let sold_stats = PriceStats::from_sample(&stats::filter_outliers(&sold));

        let pressure = MarketIndicators::pressure(&asking, fmv.unwrap_or(0.0));
        let confidence = MarketIndicators::confidence(&sold);
        let liquidity = MarketIndicators::liquidity(sold.len(), asking.len());
        let tier = classify_market(&pressure, &confidence, &liquidity);
        let advice = persona_advice(&tier, &pressure, &confidence, &liquidity);
        let pricing = recommend_pricing(fmv.unwrap_or(0.0), pressure.value, liquidity.score);

        MarketReport {
            query: snapshot.query.clone(),
            fetched_at: snapshot.fetched_at,
            sold_prices: sold,
            asking_prices: asking,
            fmv,
            sold_stats,
            pressure,
            confidence,
            liquidity,
            tier,
            advice,
            pricing,
        }
    }
}
