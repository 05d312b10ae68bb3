// Chart module: layout algorithms feeding the rendering side.

pub mod beeswarm;
pub mod histogram;

pub use beeswarm::{layout_beeswarm, BeeswarmPoint};
pub use histogram::{build_price_histogram, HistogramBin, PriceHistogram};

/// Builds a linear mapping from `domain` onto `range`. A collapsed or
/// inverted domain maps everything to the start of the range.
pub fn linear_scale(domain: (f64, f64), range: (f64, f64)) -> impl Fn(f64) -> f64 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    let span = d1 - d0;
    move |v: f64| {
        if span <= 0.0 {
            return r0;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }
}
