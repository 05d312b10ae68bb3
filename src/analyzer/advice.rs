use crate::analyzer::market_indicators::{ConfidenceReading, LiquidityReading, PressureReading};
use crate::analyzer::tier::MarketTier;
use serde::Serialize;

/// One line of guidance per user role. Pure text, derived only from the
/// tier and the three indicators; identical inputs always produce the same
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaAdvice {
    pub collector: String,
    pub seller: String,
    pub flipper: String,
}

/// Every persona's rules branch on market pressure, so a missing pressure
/// reading means every persona falls back to its insufficient-data phrase.
pub fn persona_advice(
    tier: &MarketTier,
    pressure: &PressureReading,
    confidence: &ConfidenceReading,
    liquidity: &LiquidityReading,
) -> PersonaAdvice {
    let Some(p) = pressure.value else {
        return PersonaAdvice {
            collector: format!(
                "Not enough asking data to judge entry prices. Overall market looks {}.",
                tier.label().to_lowercase()
            ),
            seller: "Not enough asking data to position a listing. Price near recent sales and watch the market.".to_string(),
            flipper: "Not enough data to size a flip margin. Sit this one out.".to_string(),
        };
    };

    PersonaAdvice {
        collector: collector_advice(p),
        seller: seller_advice(p, liquidity.score),
        flipper: flipper_advice(p, confidence.value, liquidity.score),
    }
}

fn collector_advice(pressure: f64) -> String {
    if pressure < 0.0 {
        "Asking prices sit below fair value. Good window to buy."
    } else if pressure <= 15.0 {
        "Asking prices track fair value. Paying list is reasonable."
    } else if pressure <= 30.0 {
        "Sellers are asking a premium over fair value. Negotiate or wait."
    } else {
        "Asking prices run well above fair value. Hunt auctions or hold off."
    }
    .to_string()
}

fn seller_advice(pressure: f64, liquidity: f64) -> String {
    if liquidity >= 75.0 {
        if pressure > 15.0 {
            "Demand is strong but the competition asks high. Undercut slightly to sell first."
        } else {
            "Demand is strong. List at fair value for a quick, clean sale."
        }
    } else if liquidity >= 50.0 {
        if pressure < 0.0 {
            "Steady demand with soft asking prices. Price at fair value, skip the premium."
        } else {
            "Steady demand. Fair value plus a small premium should still move."
        }
    } else if pressure < 0.0 {
        "Slow market and weak asking prices. Hold unless you need to sell."
    } else {
        "Slow market. Price sharp and expect a wait."
    }
    .to_string()
}

fn flipper_advice(pressure: f64, confidence: f64, liquidity: f64) -> String {
    if pressure < 0.0 && confidence >= 60.0 {
        "Asks sit under a stable fair value. Real flip margin here."
    } else if confidence < 40.0 {
        "Sold prices are scattered. Margin is a coin flip, pass."
    } else if pressure > 30.0 {
        "Entry prices are inflated. No margin at current asks."
    } else if liquidity < 25.0 {
        "Too few buyers. Even a good buy would be slow to exit."
    } else {
        "No clear edge. Watch for a mispriced listing instead."
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::market_indicators::AbsorptionRatio;
    use crate::analyzer::tier::classify_market;

    fn readings(
        pressure: Option<f64>,
        confidence: f64,
        liquidity: f64,
    ) -> (PressureReading, ConfidenceReading, LiquidityReading) {
        (
            PressureReading {
                value: pressure,
                median_asking: pressure.map(|p| 100.0 + p),
            },
            ConfidenceReading {
                value: confidence,
                cov: 0.0,
                sample_size: 6,
            },
            LiquidityReading {
                score: liquidity,
                ratio: AbsorptionRatio::Of(1.0),
                sold_count: 6,
                active_count: 6,
            },
        )
    }

    fn advice_for(pressure: Option<f64>, confidence: f64, liquidity: f64) -> PersonaAdvice {
        let (p, c, l) = readings(pressure, confidence, liquidity);
        let tier = classify_market(&p, &c, &l);
        persona_advice(&tier, &p, &c, &l)
    }

    #[test]
    fn test_missing_pressure_gives_generic_phrases() {
        let advice = advice_for(None, 100.0, 50.0);
        assert!(advice.collector.contains("Not enough asking data"));
        assert!(advice.seller.contains("Not enough asking data"));
        assert!(advice.flipper.contains("Sit this one out"));
    }

    #[test]
    fn test_buy_window_flags_for_collector_and_flipper() {
        let advice = advice_for(Some(-10.0), 85.0, 60.0);
        assert!(advice.collector.contains("Good window to buy"));
        assert!(advice.flipper.contains("Real flip margin"));
    }

    #[test]
    fn test_scattered_prices_warn_the_flipper_first() {
        // confidence rule outranks the inflated-asks rule
        let advice = advice_for(Some(40.0), 30.0, 60.0);
        assert!(advice.flipper.contains("coin flip"));
    }

    #[test]
    fn test_inflated_asks_block_the_flip() {
        let advice = advice_for(Some(40.0), 80.0, 60.0);
        assert!(advice.flipper.contains("No margin"));
    }

    #[test]
    fn test_thin_market_blocks_the_exit() {
        let advice = advice_for(Some(10.0), 80.0, 10.0);
        assert!(advice.flipper.contains("slow to exit"));
        assert!(advice.seller.contains("Slow market"));
    }

    #[test]
    fn test_strong_demand_seller_paths() {
        let hot = advice_for(Some(25.0), 80.0, 85.0);
        assert!(hot.seller.contains("Undercut"));
        let honest = advice_for(Some(5.0), 80.0, 85.0);
        assert!(honest.seller.contains("quick, clean sale"));
    }

    #[test]
    fn test_determinism() {
        let a = advice_for(Some(12.0), 70.0, 55.0);
        let b = advice_for(Some(12.0), 70.0, 55.0);
        assert_eq!(a, b);
    }
}
