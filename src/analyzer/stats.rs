//! Robust descriptive statistics over price samples. All functions are pure
//! and treat an empty sample as "no answer" rather than an error.

use serde::Serialize;
use std::collections::BTreeMap;

pub fn mean(sample: &[f64]) -> Option<f64> {
    if sample.is_empty() {
        return None;
    }
    Some(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Population standard deviation (not sample-corrected).
pub fn std_dev(sample: &[f64]) -> Option<f64> {
    let avg = mean(sample)?;
    let variance = sample.iter().map(|p| (p - avg).powi(2)).sum::<f64>() / sample.len() as f64;
    Some(variance.sqrt())
}

/// Scale-free dispersion: `100 * std_dev / mean`. A zero mean yields 0.
pub fn coefficient_of_variation(sample: &[f64]) -> Option<f64> {
    let avg = mean(sample)?;
    let sd = std_dev(sample)?;
    if avg == 0.0 {
        return Some(0.0);
    }
    Some(100.0 * sd / avg)
}

/// Ordinary order-statistic median; an even-sized sample averages the two
/// middle values.
pub fn median(sample: &[f64]) -> Option<f64> {
    if sample.is_empty() {
        return None;
    }
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Frequency-weighted median: prices are grouped to the cent, then distinct
/// price levels are walked in ascending order, accumulating occurrence
/// counts until half the sample is covered. Repeated price levels pull the
/// result toward themselves, which makes clustered real-world pricing
/// (e.g. many sales at 9.99) win over stray in-between values.
pub fn weighted_median(sample: &[f64]) -> Option<f64> {
    if sample.is_empty() {
        return None;
    }
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &price in sample {
        let cents = (price * 100.0).round() as i64;
        *counts.entry(cents).or_insert(0) += 1;
    }
    let half = sample.len() as f64 / 2.0;
    let mut cumulative = 0usize;
    let mut result = None;
    for (cents, count) in counts {
        cumulative += count;
        if cumulative as f64 >= half {
            result = Some(cents as f64 / 100.0);
            break;
        }
    }
    result
}

/// IQR outlier trim. Samples of fewer than 4 values pass through unchanged
/// (too small for quartile estimation). Quartiles are the order statistics
/// at indices `n/4` and `3n/4`; values within `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`
/// (inclusive) survive, keeping input order and duplicates.
pub fn filter_outliers(sample: &[f64]) -> Vec<f64> {
    if sample.len() < 4 {
        return sample.to_vec();
    }
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let q1 = sorted[sorted.len() / 4];
    let q3 = sorted[sorted.len() * 3 / 4];
    let iqr = q3 - q1;
    let lower = q1 - 1.5 * iqr;
    let upper = q3 + 1.5 * iqr;
    sample
        .iter()
        .copied()
        .filter(|&p| p >= lower && p <= upper)
        .collect()
}

/// Fair market value of a sold-price sample: the weighted median of the
/// outlier-trimmed prices. `None` when there are no sold prices at all.
pub fn fair_market_value(sold: &[f64]) -> Option<f64> {
    weighted_median(&filter_outliers(sold))
}

/// Summary block for a (usually outlier-trimmed) price sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceStats {
    pub mean: f64,
    pub std_dev: f64,
    pub cov: f64,
    pub sample_size: usize,
}

impl PriceStats {
    pub fn from_sample(sample: &[f64]) -> Option<Self> {
        Some(Self {
            mean: mean(sample)?,
            std_dev: std_dev(sample)?,
            cov: coefficient_of_variation(sample)?,
            sample_size: sample.len(),
        })
    }
}
