use crate::utils::round_to;
use serde::Serialize;

/// Three price points for a seller: move fast, hold the line, or wait for
/// the right buyer. Discount and premium are percentages of fmv.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingRecommendation {
    pub quick_sale: f64,
    pub target: f64,
    pub patient_sale: f64,
    pub quick_discount_pct: f64,
    pub patient_premium_pct: f64,
}

/// Derives the three price points from fmv, market pressure and liquidity.
/// Baseline is 15% off / 15% over; pressure picks the stance (soft asks
/// mean smaller swings, inflated asks mean a deeper quick-sale cut) and
/// liquidity then shifts both within fixed floors and caps. Quick and
/// patient prices get retail `.99` endings; the target stays at fmv.
/// `None` when there is no usable fmv.
pub fn recommend_pricing(
    fmv: f64,
    pressure: Option<f64>,
    liquidity: f64,
) -> Option<PricingRecommendation> {
    if fmv <= 0.0 {
        return None;
    }

    let mut discount: f64 = 0.15;
    let mut premium: f64 = 0.15;
    if let Some(p) = pressure {
        if p < 0.0 {
            discount = 0.10;
            premium = 0.05;
        } else if p > 30.0 {
            discount = 0.20;
            premium = 0.10;
        }
    }
    if liquidity >= 75.0 {
        discount = (discount - 0.05).max(0.05);
        premium = (premium + 0.05).min(0.25);
    } else if liquidity < 25.0 {
        discount = (discount + 0.05).min(0.30);
        premium = (premium - 0.05).max(0.05);
    }

    Some(PricingRecommendation {
        quick_sale: retail_99(fmv * (1.0 - discount)),
        target: round_to(fmv, 2),
        patient_sale: retail_99(fmv * (1.0 + premium)),
        quick_discount_pct: round_to(discount * 100.0, 0),
        patient_premium_pct: round_to(premium * 100.0, 0),
    })
}

/// Retail-style price ending: next whole amount minus a cent, never below
/// 0.99.
fn retail_99(value: f64) -> f64 {
    (value.ceil() - 0.01).max(0.99)
}
