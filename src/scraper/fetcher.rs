use crate::config::SourceConfig;
use crate::model::ScraperError;
use crate::scraper::traits::Scraper;

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

pub struct ScraperImpl {
    client: Client,
}

impl ScraperImpl {
    pub fn new(config: &SourceConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(ScraperError::Client)?;

        Ok(Self { client })
    }
}

impl Scraper for ScraperImpl {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::InvalidResponse {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}
