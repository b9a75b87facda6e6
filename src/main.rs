use goodreads_quotes::config::{load_config, SourceConfig};
use goodreads_quotes::parser::GoodreadsParser;
use goodreads_quotes::scraper::ScraperImpl;
use goodreads_quotes::{GoodreadsSource, QuoteSource};
use std::path::Path;
use std::thread;
use tracing::{error, info, warn};

const CONFIG_PATH: &str = "config.json";

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Config file is optional; defaults point at the public listing
    let config = if Path::new(CONFIG_PATH).exists() {
        match load_config(CONFIG_PATH) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {}", e);
                return;
            }
        }
    } else {
        SourceConfig::default()
    };

    let scraper = match ScraperImpl::new(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize scraper: {}", e);
            return;
        }
    };

    let mut source = GoodreadsSource::new(scraper, GoodreadsParser::new(), config);

    // The fetch blocks for every page; run it off the main thread like a host would
    let worker = thread::spawn(move || {
        source.activate();
        source
    });
    let mut source = match worker.join() {
        Ok(s) => s,
        Err(_) => {
            error!("Activation thread panicked");
            return;
        }
    };

    match serde_json::to_string_pretty(&source.info()) {
        Ok(json) => println!("{}", json),
        Err(e) => warn!("Failed to encode plugin info: {}", e),
    }

    match source.get_random().first() {
        Some(quote) => match serde_json::to_string_pretty(quote) {
            Ok(json) => println!("{}", json),
            Err(e) => warn!("Failed to encode quote: {}", e),
        },
        None => warn!("No quotes available"),
    }

    source.deactivate();
    info!("Done.");
}
