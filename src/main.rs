use clap::Parser;
use comp_pulse::advisory::AdvisoryRequest;
use comp_pulse::analyzer::price_analysis::Analyzer;
use comp_pulse::analyzer::AnalyzerImpl;
use comp_pulse::config::{load_config, AppConfig};
use comp_pulse::model::MarketSnapshot;
use comp_pulse::report::render_report;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "comp-pulse", version, about = "Market analytics for collectible comps")]
struct Cli {
    /// Listings snapshot JSON file to analyze
    snapshot: PathBuf,

    /// Optional config file; built-in defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the advisory-service payload as JSON instead of the text report
    #[arg(long)]
    advisory_json: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Load configuration from file, or fall back to defaults
    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {}", e);
                return;
            }
        },
        None => AppConfig::default(),
    };

    info!("Loading snapshot: {}", cli.snapshot.display());
    let snapshot = match MarketSnapshot::from_file(&cli.snapshot) {
        Ok(s) => s,
        Err(e) => {
            error!("Snapshot load error: {}", e);
            return;
        }
    };

    info!(
        "Analyzing \"{}\": {} sold / {} active listings...",
        snapshot.query,
        snapshot.sold.len(),
        snapshot.active.len()
    );
    let analyzer = AnalyzerImpl::new();
    let report = analyzer.analyze(&snapshot);
    info!(
        "Analysis complete: tier {} ({}), score {}",
        report.tier.tier,
        report.tier.label(),
        report.tier.score
    );

    if cli.advisory_json {
        let payload = AdvisoryRequest::from_report(&report);
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Payload encode error: {}", e),
        }
    } else {
        println!("{}", render_report(&report, &config.chart));
    }
}
