mod config;
mod dedup;
mod extract;
mod fallback;
mod fx;
mod model;
mod pipeline;
mod points;
mod rank;
mod source;
mod utils;

use std::time::Duration;

use chrono::NaiveDate;
use tracing::{error, info, warn};

use config::AppConfig;
use model::SearchQuery;
use pipeline::ScrapePipeline;
use points::PointsEstimator;
use source::GoogleFlightsFetcher;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: fare-sniper <ORIGIN> <DESTINATION> <YYYY-MM-DD>");
        std::process::exit(2);
    }
    let date = match NaiveDate::parse_from_str(&args[3], "%Y-%m-%d") {
        Ok(date) => date,
        Err(e) => {
            error!("Invalid date {}: {}", args[3], e);
            std::process::exit(2);
        }
    };
    let query = SearchQuery {
        origin: args[1].to_uppercase(),
        destination: args[2].to_uppercase(),
        date,
    };

    // Load configuration from file; defaults cover a missing file
    let cfg: AppConfig = match config::load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load error ({}), using defaults", e);
            AppConfig::default()
        }
    };

    let fetcher =
        match GoogleFlightsFetcher::new(Duration::from_secs(cfg.request_timeout_seconds)) {
            Ok(fetcher) => fetcher,
            Err(e) => {
                error!("Failed to initialize fetcher: {}", e);
                std::process::exit(1);
            }
        };

    let points = PointsEstimator::new(&cfg.pipeline);
    let pipeline = ScrapePipeline::new(fetcher, cfg.pipeline.clone());

    info!("Starting live scrape...");
    let outcome = pipeline.scrape(&query).await;
    let (flights, errors) = fallback::finalize(outcome, &query, &points);

    let body = serde_json::json!({ "flights": flights, "errors": errors });
    match serde_json::to_string_pretty(&body) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            error!("Failed to serialize results: {}", e);
            std::process::exit(1);
        }
    }
}
