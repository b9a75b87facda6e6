// Quote-source plugin: lifecycle and queries the host calls
use crate::config::SourceConfig;
use crate::model::{PluginInfo, Quote};
use crate::parser::{GoodreadsParser, Parser};
use crate::scraper::{Scraper, ScraperImpl};
use rand::seq::IndexedRandom;
use tracing::{debug, info, warn};

pub const GOODREADS_INFO: PluginInfo = PluginInfo {
    name: "Goodreads",
    description: "Popular quotes from goodreads.com",
    author: "Denis Mach",
    version: "0.1",
};

/// Contract between the wallpaper host and a quote provider.
pub trait QuoteSource {
    fn info(&self) -> PluginInfo;
    fn supports_search(&self) -> bool;
    fn activate(&mut self);
    fn deactivate(&mut self);
    fn get_for_author(&self, author: &str) -> Vec<Quote>;
    fn get_for_keyword(&self, keyword: &str) -> Vec<Quote>;
    /// Zero or one quote.
    fn get_random(&self) -> Vec<Quote>;
}

pub struct GoodreadsSource<S = ScraperImpl, P = GoodreadsParser> {
    scraper: S,
    parser: P,
    config: SourceConfig,
    active: bool,
    quotes: Vec<Quote>,
}

impl<S: Scraper, P: Parser> GoodreadsSource<S, P> {
    pub fn new(scraper: S, parser: P, config: SourceConfig) -> Self {
        Self {
            scraper,
            parser,
            config,
            active: false,
            quotes: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Walks every listing page and replaces the stored quotes with what was found.
    ///
    /// A page that fails to download or parse is logged and skipped.
    pub fn fetch_quotes(&mut self) {
        self.quotes.clear();
        let mut collected = Vec::new();

        for page in 1..=self.config.pages {
            let url = self.config.page_url(page);

            let html = match self.scraper.fetch(&url) {
                Ok(html) => html,
                Err(e) => {
                    warn!("Skipping {}: {}", url, e);
                    continue;
                }
            };

            match self.parser.parse(&html, &url) {
                Ok(quotes) => {
                    debug!("{} quotes on {}", quotes.len(), url);
                    collected.extend(quotes);
                }
                Err(e) => warn!("Skipping {}: {}", url, e),
            }
        }

        if collected.is_empty() {
            warn!("Could not find quotes for URL {}", self.config.base_url);
        } else {
            info!("Loaded {} quotes from {}", collected.len(), self.config.base_url);
        }

        self.quotes = collected;
    }
}

impl<S: Scraper, P: Parser> QuoteSource for GoodreadsSource<S, P> {
    fn info(&self) -> PluginInfo {
        GOODREADS_INFO
    }

    fn supports_search(&self) -> bool {
        false
    }

    fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;

        info!("Activating {} quote source", GOODREADS_INFO.name);
        self.fetch_quotes();
    }

    fn deactivate(&mut self) {
        self.quotes.clear();
        self.active = false;
    }

    fn get_for_author(&self, _author: &str) -> Vec<Quote> {
        Vec::new()
    }

    fn get_for_keyword(&self, _keyword: &str) -> Vec<Quote> {
        Vec::new()
    }

    fn get_random(&self) -> Vec<Quote> {
        self.quotes
            .choose(&mut rand::rng())
            .cloned()
            .into_iter()
            .collect()
    }
}
