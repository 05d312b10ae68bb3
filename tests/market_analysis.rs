//! End-to-end pipeline checks on a realistic snapshot: JSON in, full
//! market report out.

use comp_pulse::analyzer::market_indicators::{
    AbsorptionRatio, ConfidenceBand, LiquidityBand, PressureBand,
};
use comp_pulse::advisory::AdvisoryRequest;
use comp_pulse::{Analyzer, AnalyzerImpl, MarketSnapshot};

/// Sold comps around $100 with one price level repeated, asks around $125,
/// plus listings the pipeline must ignore: an auction ask, a best-offer
/// ask, and a sold listing with no resolvable price. One sold listing
/// arrives split into price + shipping.
fn reference_snapshot() -> MarketSnapshot {
    let json = r#"{
        "query": "koloth dark knight 1999 holo",
        "fetched_at": "2026-08-20T12:00:00Z",
        "sold": [
            { "title": "raw copy",        "total_price": 90.0 },
            { "title": "near mint",       "price": 90.0, "shipping_price": 5.0 },
            { "title": "graded 8",        "total_price": 100.0 },
            { "title": "graded 8 again",  "total_price": 100.0 },
            { "title": "graded 9",        "total_price": 105.0 },
            { "title": "pack fresh",      "total_price": 110.0 },
            { "title": "no price listed" }
        ],
        "active": [
            { "title": "bin copy",    "total_price": 120.0, "buying_format": "fixed_price" },
            { "title": "bin copy 2",  "total_price": 125.0, "buying_format": "fixed_price" },
            { "title": "bin copy 3",  "total_price": 130.0, "buying_format": "fixed_price" },
            { "title": "auction lot", "total_price": 60.0,  "buying_format": "auction" },
            { "title": "obo listing", "total_price": 200.0, "buying_format": "best_offer" }
        ]
    }"#;
    MarketSnapshot::from_json_str(json).expect("reference snapshot parses")
}

#[test]
fn test_full_pipeline_reference_scenario() {
    let report = AnalyzerImpl::new().analyze(&reference_snapshot());

    // resolution: 6 usable sold prices, 3 qualifying asks
    assert_eq!(
        report.sold_prices,
        vec![90.0, 95.0, 100.0, 100.0, 105.0, 110.0]
    );
    assert_eq!(report.asking_prices, vec![120.0, 125.0, 130.0]);

    // fmv is the weighted median of the trimmed sold sample
    assert_eq!(report.fmv, Some(100.0));

    // pressure: median ask 125 vs fmv 100
    assert_eq!(report.pressure.value, Some(25.0));
    assert_eq!(report.pressure.median_asking, Some(125.0));
    assert_eq!(report.pressure.band(), Some(PressureBand::Optimistic));

    // confidence: CoV ~6.5% on the sold sample
    assert_eq!(report.confidence.value, 94.0);
    assert_eq!(report.confidence.band(), ConfidenceBand::High);

    // liquidity: 6 sold over 3 active, log-damped top segment
    assert!((report.liquidity.score - 86.928).abs() < 0.01);
    assert_eq!(report.liquidity.band(), LiquidityBand::High);
    assert_eq!(report.liquidity.ratio, AbsorptionRatio::Of(2.0));

    // tier: 1 + 3 + 3 points
    assert_eq!(report.tier.score, 7);
    assert_eq!(report.tier.tier, 1);

    // pricing: high liquidity narrows the cut and widens the premium
    let pricing = report.pricing.as_ref().expect("pricing present");
    assert_eq!(pricing.quick_sale, 89.99);
    assert_eq!(pricing.target, 100.0);
    assert_eq!(pricing.patient_sale, 119.99);

    // advice reacts to the premium asks and strong demand
    assert!(report.advice.collector.contains("premium"));
    assert!(report.advice.seller.contains("Undercut"));
}

#[test]
fn test_advisory_payload_matches_call_contract() {
    let report = AnalyzerImpl::new().analyze(&reference_snapshot());
    let payload = AdvisoryRequest::from_report(&report);
    assert_eq!(payload.market_pressure, Some(25.0));
    assert_eq!(payload.liquidity_score, 87.0);
    assert_eq!(payload.market_confidence, 94.0);
    assert_eq!(payload.fmv, Some(100.0));
}

#[test]
fn test_identical_snapshots_give_identical_reports() {
    let analyzer = AnalyzerImpl::new();
    let first = analyzer.analyze(&reference_snapshot());
    let second = analyzer.analyze(&reference_snapshot());
    assert_eq!(first, second);
}

#[test]
fn test_sparse_market_degrades_without_errors() {
    let json = r#"{
        "query": "obscure variant",
        "fetched_at": "2026-08-20T12:00:00Z",
        "sold": [ { "title": "only sale", "total_price": 40.0 } ],
        "active": [
            { "title": "auction only", "total_price": 35.0, "buying_format": "auction" }
        ]
    }"#;
    let snapshot = MarketSnapshot::from_json_str(json).expect("snapshot parses");
    let report = AnalyzerImpl::new().analyze(&snapshot);

    assert_eq!(report.fmv, Some(40.0));
    // no qualifying asks: pressure is unknown, not an error
    assert_eq!(report.pressure.value, None);
    assert_eq!(report.pressure.band(), None);
    // one sale counts as fully consistent
    assert_eq!(report.confidence.value, 100.0);
    // one sold, zero qualifying active
    assert_eq!(report.liquidity.score, 100.0);
    assert_eq!(report.liquidity.ratio, AbsorptionRatio::AllAbsorbed);
    // pricing still works from fmv and liquidity alone
    assert!(report.pricing.is_some());
    assert!(report.advice.flipper.contains("Sit this one out"));
}

#[test]
fn test_outlier_resistant_fmv() {
    // a single $999 sale must not drag fair value for a $100 card
    let json = r#"{
        "query": "stable card",
        "fetched_at": "2026-08-20T12:00:00Z",
        "sold": [
            { "title": "a", "total_price": 95.0 },
            { "title": "b", "total_price": 100.0 },
            { "title": "c", "total_price": 100.0 },
            { "title": "d", "total_price": 105.0 },
            { "title": "e", "total_price": 999.0 }
        ],
        "active": []
    }"#;
    let snapshot = MarketSnapshot::from_json_str(json).expect("snapshot parses");
    let report = AnalyzerImpl::new().analyze(&snapshot);
    assert_eq!(report.fmv, Some(100.0));
}
