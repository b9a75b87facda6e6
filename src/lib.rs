//! Goodreads quote source for a wallpaper host.
//!
//! Scrapes the popular-quotes listing, normalizes each quote to plain ASCII,
//! and serves a random one through the [`source::QuoteSource`] contract.

pub mod config;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod scraper;
pub mod source;

pub use model::{PluginInfo, Quote};
pub use source::{GoodreadsSource, QuoteSource};
