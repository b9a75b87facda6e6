use crate::model::ScraperError;

/// Fetches the raw HTML body behind a URL.
pub trait Scraper {
    fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}
