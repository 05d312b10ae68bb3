//! Text rendering of a `MarketReport`: an indicator card plus character
//! charts. This is the in-repo stand-in for a graphical rendering layer; it
//! decides chart geometry and feeds the layout algorithms outlier-trimmed
//! samples.

use crate::analyzer::price_analysis::MarketReport;
use crate::analyzer::stats;
use crate::chart::{build_price_histogram, layout_beeswarm, linear_scale, PriceHistogram};
use crate::config::ChartConfig;

pub fn render_report(report: &MarketReport, chart: &ChartConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("🔍 {}\n", report.query));
    out.push_str(&format!(
        "📅 {}\n",
        report.fetched_at.format("%Y-%m-%d %H:%M UTC")
    ));

    match report.fmv {
        Some(fmv) => out.push_str(&format!(
            "💰 FMV: ${:.2} ({} sold comps)\n",
            fmv,
            report.sold_prices.len()
        )),
        None => out.push_str("💰 FMV: n/a (no sold comps)\n"),
    }
    if let Some(sold_stats) = &report.sold_stats {
        out.push_str(&format!(
            "📐 Sold sample: mean ${:.2} · sd ${:.2} · CoV {:.1}%\n",
            sold_stats.mean, sold_stats.std_dev, sold_stats.cov
        ));
    }

    let pressure_line = match (
        report.pressure.value,
        report.pressure.band(),
        report.pressure.median_asking,
    ) {
        (Some(v), Some(band), Some(m)) => format!(
            "📈 Pressure: {:+.1}% {} (median ask ${:.2})\n",
            v,
            band.label(),
            m
        ),
        (None, _, Some(m)) => format!("📈 Pressure: n/a (median ask ${:.2}, no fair value)\n", m),
        _ => "📈 Pressure: n/a (no fixed-price asks)\n".to_string(),
    };
    out.push_str(&pressure_line);

    out.push_str(&format!(
        "🎯 Confidence: {:.0} {} (CoV {:.1}%, {} comps)\n",
        report.confidence.value,
        report.confidence.band().label(),
        report.confidence.cov,
        report.confidence.sample_size
    ));
    out.push_str(&format!(
        "🌊 Liquidity: {:.0} {} ({} sold / {} active, ratio {})\n",
        report.liquidity.score,
        report.liquidity.band().label(),
        report.liquidity.sold_count,
        report.liquidity.active_count,
        report.liquidity.ratio
    ));
    out.push_str(&format!(
        "{} Tier {} {}: {}\n",
        report.tier.icon(),
        report.tier.tier,
        report.tier.label(),
        report.tier.description()
    ));

    out.push_str(&format!("👤 Collector: {}\n", report.advice.collector));
    out.push_str(&format!("🏷 Seller: {}\n", report.advice.seller));
    out.push_str(&format!("🔁 Flipper: {}\n", report.advice.flipper));

    if let Some(pricing) = &report.pricing {
        out.push_str(&format!(
            "💵 Quick ${:.2} · Target ${:.2} · Patient ${:.2} (-{:.0}% / +{:.0}%)\n",
            pricing.quick_sale,
            pricing.target,
            pricing.patient_sale,
            pricing.quick_discount_pct,
            pricing.patient_premium_pct
        ));
    }

    let filtered_sold = stats::filter_outliers(&report.sold_prices);
    let filtered_asking = stats::filter_outliers(&report.asking_prices);

    out.push_str("\n📊 Price distribution (sold █ / ask ░)\n");
    match build_price_histogram(&filtered_sold, &filtered_asking, chart.histogram_bins) {
        Some(hist) => out.push_str(&render_histogram(&hist, chart.width)),
        None => out.push_str("  (no price data)\n"),
    }

    out.push_str("\n🐝 Sold price swarm\n");
    out.push_str(&render_beeswarm(&filtered_sold, chart));

    out
}

fn render_histogram(hist: &PriceHistogram, width: usize) -> String {
    let mut out = String::new();
    if hist.bin_width <= 0.0 {
        let total = hist.bins[0].sold_count + hist.bins[0].active_count;
        out.push_str(&format!("  all {} prices at ${:.2}\n", total, hist.min));
        return out;
    }
    let bar_max = (width / 2).max(8);
    let top = hist
        .bins
        .iter()
        .map(|b| b.sold_count.max(b.active_count))
        .max()
        .unwrap_or(1)
        .max(1);
    for bin in &hist.bins {
        let sold_bar = bar("█", bin.sold_count, top, bar_max);
        let active_bar = bar("░", bin.active_count, top, bar_max);
        out.push_str(&format!(
            "  {:>8.2}-{:<8.2} {:<bw$} {:>3} │ {:<bw$} {:>3}\n",
            bin.lower,
            bin.upper,
            sold_bar,
            bin.sold_count,
            active_bar,
            bin.active_count,
            bw = bar_max
        ));
    }
    out
}

fn bar(fill: &str, count: usize, top: usize, max_len: usize) -> String {
    if count == 0 {
        return String::new();
    }
    let len = ((count as f64 / top as f64) * max_len as f64).round() as usize;
    fill.repeat(len.max(1))
}

/// Lays the trimmed sold prices out as a character swarm. Cell geometry:
/// point radius 0.5 makes one nudge step exactly two cells, so rows sit at
/// even y values around the center line.
fn render_beeswarm(prices: &[f64], chart: &ChartConfig) -> String {
    let mut out = String::new();
    if prices.is_empty() {
        out.push_str("  (no sold prices)\n");
        return out;
    }
    let width = chart.width.max(16);
    let levels = chart.beeswarm_levels;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &p in prices {
        min = min.min(p);
        max = max.max(p);
    }

    let x_scale = linear_scale((min, max), (0.0, (width - 1) as f64));
    let center_y = (levels * 2) as f64;
    let points = layout_beeswarm(prices, x_scale, center_y, 0.5, (levels * 2) as f64);

    let rows = levels * 2 + 1;
    let mut grid = vec![vec![' '; width]; rows];
    for cell in grid[levels].iter_mut() {
        *cell = '·';
    }
    for point in &points {
        let col = (point.x.round() as isize).clamp(0, width as isize - 1) as usize;
        let row = ((point.y / 2.0).round() as isize).clamp(0, rows as isize - 1) as usize;
        grid[row][col] = '●';
    }
    for row in grid {
        out.push_str("  ");
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    if max > min {
        let left = format!("${:.2}", min);
        let right = format!("${:.2}", max);
        let pad = width.saturating_sub(left.chars().count());
        out.push_str(&format!("  {}{:>pad$}\n", left, right, pad = pad));
    } else {
        out.push_str(&format!("  all at ${:.2}\n", min));
    }
    out
}
