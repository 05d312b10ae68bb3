use crate::analyzer::market_indicators::{ConfidenceReading, LiquidityReading, PressureReading};
use serde::Serialize;

/// Overall market favorability: tier 1 (best) to 5 (worst), with the
/// underlying 0-9 score kept for display. Recomputed per snapshot, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketTier {
    pub tier: u8,
    pub score: u8,
}

impl MarketTier {
    pub fn label(&self) -> &'static str {
        match self.tier {
            1 => "Excellent",
            2 => "Good",
            3 => "Fair",
            4 => "Challenging",
            _ => "Poor",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.tier {
            1 => "💎",
            2 => "✅",
            3 => "⚖️",
            4 => "⚠️",
            _ => "🧊",
        }
    }

    pub fn description(&self) -> &'static str {
        match self.tier {
            1 => "Strong demand, consistent prices, sellers in control.",
            2 => "Healthy market with room to negotiate.",
            3 => "Workable market, expect some friction.",
            4 => "Soft demand or scattered prices, deals need patience.",
            _ => "Illiquid or erratic market, tread carefully.",
        }
    }
}

/// Combines the three indicators into a 0-9 score and maps it to a tier.
/// Each indicator contributes 0-3 points; a missing pressure reading simply
/// contributes nothing.
pub fn classify_market(
    pressure: &PressureReading,
    confidence: &ConfidenceReading,
    liquidity: &LiquidityReading,
) -> MarketTier {
    let pressure_points = match pressure.value {
        Some(p) if p < 0.0 => 3,
        Some(p) if p <= 15.0 => 2,
        Some(p) if p <= 30.0 => 1,
        _ => 0,
    };
    let confidence_points = if confidence.value >= 70.0 {
        3
    } else if confidence.value >= 50.0 {
        2
    } else if confidence.value >= 30.0 {
        1
    } else {
        0
    };
    let liquidity_points = if liquidity.score >= 75.0 {
        3
    } else if liquidity.score >= 50.0 {
        2
    } else if liquidity.score >= 25.0 {
        1
    } else {
        0
    };

    let score = pressure_points + confidence_points + liquidity_points;
    let tier = if score >= 7 {
        1
    } else if score >= 5 {
        2
    } else if score >= 3 {
        3
    } else if score >= 1 {
        4
    } else {
        5
    };
    MarketTier { tier, score }
}
