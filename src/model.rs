// Core structs: Quote, PluginInfo, and the error enums
use serde::Serialize;
use thiserror::Error;

pub const SOURCE_NAME: &str = "goodreads";

/// A single scraped quote. Fields are fixed once the parser builds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub quote: String,
    pub author: String,
    pub source_name: String,
    pub link: String,
}

impl Quote {
    pub fn new(quote: String, author: String, link: &str) -> Self {
        Self {
            quote,
            author,
            source_name: SOURCE_NAME.to_string(),
            link: link.to_string(),
        }
    }
}

/// Static metadata the host shows for a quote source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    InvalidResponse { url: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}
