use serde::Serialize;

/// One fixed-width price interval `[lower, upper)` with a count per sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub sold_count: usize,
    pub active_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistogram {
    pub bins: Vec<HistogramBin>,
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
}

/// Buckets the sold and active price samples into `bin_count` aligned
/// equal-width bins spanning the union range of both samples. Whether the
/// samples arrive raw or outlier-trimmed is the caller's choice. Returns
/// `None` when `bin_count` is zero or both samples are empty. When every
/// price is identical, `bin_width` is 0 and all counts land in bin 0; the
/// renderer owns that special case.
pub fn build_price_histogram(
    sold: &[f64],
    active: &[f64],
    bin_count: usize,
) -> Option<PriceHistogram> {
    if bin_count == 0 {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &price in sold.iter().chain(active) {
        min = min.min(price);
        max = max.max(price);
    }
    if !min.is_finite() || !max.is_finite() {
        return None;
    }

    let bin_width = (max - min) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower: min + bin_width * i as f64,
            upper: min + bin_width * (i + 1) as f64,
            sold_count: 0,
            active_count: 0,
        })
        .collect();

    for &price in sold {
        bins[bin_index(price, min, bin_width, bin_count)].sold_count += 1;
    }
    for &price in active {
        bins[bin_index(price, min, bin_width, bin_count)].active_count += 1;
    }

    Some(PriceHistogram {
        bins,
        min,
        max,
        bin_width,
    })
}

/// Values at or above the top of the range land in the last bin and values
/// below the bottom land in the first, so float boundary misses can never
/// drop a price.
fn bin_index(price: f64, min: f64, bin_width: f64, bin_count: usize) -> usize {
    if bin_width <= 0.0 {
        return 0;
    }
    let idx = ((price - min) / bin_width).floor() as isize;
    idx.clamp(0, bin_count as isize - 1) as usize
}
