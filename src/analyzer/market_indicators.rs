//! The three normalized market-health indicators: pressure, confidence and
//! liquidity. Each calculator is a pure function of one snapshot's samples;
//! sparse data produces a neutral or `None` reading, never an error.

use crate::analyzer::stats;
use crate::utils::round_to;
use serde::Serialize;
use std::fmt;

/// Asking-vs-sold deviation. `value` is the percentage by which the median
/// asking price sits above (positive) or below (negative) fair value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureReading {
    pub value: Option<f64>,
    pub median_asking: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureBand {
    Opportunity,
    Healthy,
    Optimistic,
    Resistance,
    Unrealistic,
}

impl PressureReading {
    pub fn band(&self) -> Option<PressureBand> {
        self.value.map(|v| {
            if v < 0.0 {
                PressureBand::Opportunity
            } else if v <= 15.0 {
                PressureBand::Healthy
            } else if v <= 30.0 {
                PressureBand::Optimistic
            } else if v <= 50.0 {
                PressureBand::Resistance
            } else {
                PressureBand::Unrealistic
            }
        })
    }
}

impl PressureBand {
    pub fn label(&self) -> &'static str {
        match self {
            PressureBand::Opportunity => "Below FMV",
            PressureBand::Healthy => "Healthy",
            PressureBand::Optimistic => "Optimistic",
            PressureBand::Resistance => "Resistance",
            PressureBand::Unrealistic => "Unrealistic",
        }
    }
}

/// Price-consistency score in `[0, 100]` derived from the spread of sold
/// prices. `cov` and `sample_size` describe the sample the score came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceReading {
    pub value: f64,
    pub cov: f64,
    pub sample_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Good,
    Moderate,
    Low,
    VeryLow,
}

impl ConfidenceReading {
    pub fn band(&self) -> ConfidenceBand {
        if self.value >= 80.0 {
            ConfidenceBand::High
        } else if self.value >= 60.0 {
            ConfidenceBand::Good
        } else if self.value >= 40.0 {
            ConfidenceBand::Moderate
        } else if self.value >= 20.0 {
            ConfidenceBand::Low
        } else {
            ConfidenceBand::VeryLow
        }
    }
}

impl ConfidenceBand {
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "High",
            ConfidenceBand::Good => "Good",
            ConfidenceBand::Moderate => "Moderate",
            ConfidenceBand::Low => "Low",
            ConfidenceBand::VeryLow => "Very Low",
        }
    }
}

/// Supply/demand score in `[0, 100]` from the absorption ratio
/// (sold count over active count).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiquidityReading {
    pub score: f64,
    pub ratio: AbsorptionRatio,
    pub sold_count: usize,
    pub active_count: usize,
}

/// Absorption ratio with its two sentinel states spelled out so callers
/// never see a NaN or infinite ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsorptionRatio {
    /// Nothing sold, nothing listed.
    Unknown,
    /// Sales happened and nothing is left on the market.
    AllAbsorbed,
    Of(f64),
}

impl fmt::Display for AbsorptionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbsorptionRatio::Unknown => write!(f, "unknown"),
            AbsorptionRatio::AllAbsorbed => write!(f, "all absorbed"),
            AbsorptionRatio::Of(r) => write!(f, "{:.2}", r),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidityBand {
    High,
    Moderate,
    Low,
    VeryLow,
}

impl LiquidityReading {
    pub fn band(&self) -> LiquidityBand {
        if self.score >= 75.0 {
            LiquidityBand::High
        } else if self.score >= 50.0 {
            LiquidityBand::Moderate
        } else if self.score >= 25.0 {
            LiquidityBand::Low
        } else {
            LiquidityBand::VeryLow
        }
    }
}

impl LiquidityBand {
    pub fn label(&self) -> &'static str {
        match self {
            LiquidityBand::High => "High",
            LiquidityBand::Moderate => "Moderate",
            LiquidityBand::Low => "Low",
            LiquidityBand::VeryLow => "Very Low",
        }
    }
}

pub struct MarketIndicators;

impl MarketIndicators {
    /// Market pressure: how far the median asking price deviates from fair
    /// value, in percent, rounded to one decimal. Asking prices are outlier
    /// trimmed first (falling back to the raw sample if the trim empties
    /// it). `value` is `None` with no qualifying asks or a non-positive fmv;
    /// `median_asking` is reported whenever there are asks at all.
    pub fn pressure(asking: &[f64], fmv: f64) -> PressureReading {
        if asking.is_empty() {
            return PressureReading {
                value: None,
                median_asking: None,
            };
        }
        let filtered = stats::filter_outliers(asking);
        let sample = if filtered.is_empty() { asking } else { &filtered[..] };
        let median_asking = stats::median(sample);
        if fmv <= 0.0 {
            return PressureReading {
                value: None,
                median_asking,
            };
        }
        let value = median_asking.map(|m| round_to(100.0 * (m - fmv) / fmv, 1));
        PressureReading {
            value,
            median_asking,
        }
    }

    /// Market confidence from sold-price consistency. Fewer than two prices
    /// count as fully consistent (100). Otherwise the sample is outlier
    /// trimmed (kept only if at least two points survive) and the score is
    /// `round(100 / (1 + CoV/100))`, clamped to `[0, 100]`.
    pub fn confidence(sold: &[f64]) -> ConfidenceReading {
        if sold.len() < 2 {
            return ConfidenceReading {
                value: 100.0,
                cov: 0.0,
                sample_size: sold.len(),
            };
        }
        let filtered = stats::filter_outliers(sold);
        let sample = if filtered.len() >= 2 { &filtered[..] } else { sold };
        let cov = stats::coefficient_of_variation(sample).unwrap_or(0.0);
        let value = (100.0 / (1.0 + cov / 100.0)).round().clamp(0.0, 100.0);
        ConfidenceReading {
            value,
            cov,
            sample_size: sample.len(),
        }
    }

    /// Liquidity score from listing counts. 0 sold / 0 active is a neutral
    /// 50 with an unknown ratio; sales with an empty market score 100.
    /// Otherwise a piecewise-linear (log-damped above parity) mapping of
    /// `sold / active` onto `[0, 100]`.
    pub fn liquidity(sold_count: usize, active_count: usize) -> LiquidityReading {
        if sold_count == 0 && active_count == 0 {
            return LiquidityReading {
                score: 50.0,
                ratio: AbsorptionRatio::Unknown,
                sold_count,
                active_count,
            };
        }
        if active_count == 0 {
            return LiquidityReading {
                score: 100.0,
                ratio: AbsorptionRatio::AllAbsorbed,
                sold_count,
                active_count,
            };
        }
        let ratio = sold_count as f64 / active_count as f64;
        let score = if ratio >= 1.0 {
            (75.0 + 25.0 * (ratio + 1.0).log10()).min(100.0)
        } else if ratio >= 0.5 {
            50.0 + (ratio - 0.5) * 50.0
        } else if ratio >= 0.2 {
            25.0 + (ratio - 0.2) / 0.3 * 25.0
        } else {
            ratio / 0.2 * 25.0
        };
        LiquidityReading {
            score,
            ratio: AbsorptionRatio::Of(ratio),
            sold_count,
            active_count,
        }
    }
}
