//! Game catalog server
//!
//! Loads the static game feed into a TTL-cached in-memory catalog and serves
//! listing, category, tag and search queries over HTTP.

use clap::Parser;
use game_catalog::catalog::CatalogService;
use std::sync::Arc;
use std::time::Duration;

/// Game catalog server - serves listings, search and tag/category queries
#[derive(Parser, Debug)]
#[command(name = "game_catalog")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the game feed JSON file
    #[arg(short, long, default_value = "feed.json")]
    feed: String,

    /// Port for the HTTP API
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Games per listing page
    #[arg(long, default_value_t = game_catalog::config::PAGE_SIZE)]
    page_size: usize,

    /// Seconds a loaded catalog is served before the feed is re-read
    #[arg(long, default_value_t = 300)]
    ttl_secs: u64,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting game_catalog...");
    log::info!("Feed path: {}", args.feed);

    let catalog = Arc::new(CatalogService::with_ttl(
        &args.feed,
        Duration::from_secs(args.ttl_secs),
    ));

    // Load eagerly so feed problems surface in the log at startup
    let snapshot = catalog.snapshot();
    if snapshot.is_empty() {
        log::warn!("Catalog is empty; serving no games until the feed becomes readable");
    } else {
        log::info!("Catalog ready with {} games", snapshot.len());
    }

    if let Err(e) = game_catalog::web::serve(catalog, args.port, args.page_size).await {
        log::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
