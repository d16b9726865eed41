//! ADS Metrics - Entry Point
//!
//! Looks up the fixed author and prints citation, read and refereed totals.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ads_metrics::config::{api, lookup};
use ads_metrics::{Config, MetricsAggregator};

#[derive(Parser, Debug)]
#[command(name = "ads-metrics")]
#[command(about = "Citation, read and refereed-paper totals from NASA ADS")]
#[command(version)]
struct Cli {
    /// File holding the ADS development key
    #[arg(long, default_value = api::KEY_FILE)]
    key_file: std::path::PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr);
        subscriber.with(layer).init();
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(std::io::stderr);
        subscriber.with(layer).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        author = lookup::AUTHOR,
        "Starting ADS lookup"
    );

    let metrics = lookup::METRICS.iter().map(ToString::to_string).collect();
    let aggregator =
        MetricsAggregator::new(lookup::AUTHOR, metrics).with_key_file(cli.key_file);

    aggregator.collect_metrics(&Config::default()).await?;

    Ok(())
}
