use serde::Deserialize;
use std::fs;

pub const DEFAULT_BASE_URL: &str = "https://www.goodreads.com/quotes";
pub const DEFAULT_PAGES: u32 = 19;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    /// Listing pages fetched per activation, starting at page 1.
    pub pages: u32,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            pages: DEFAULT_PAGES,
            timeout_seconds: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) GoodreadsQuotes/0.1".to_string(),
        }
    }
}

impl SourceConfig {
    pub fn page_url(&self, page: u32) -> String {
        format!("{}?page={}", self.base_url, page)
    }
}

pub fn load_config(path: &str) -> Result<SourceConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: SourceConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: SourceConfig = serde_json::from_str(r#"{ "pages": 3 }"#).unwrap();
        assert_eq!(config.pages, 3);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn page_url_appends_query() {
        let config = SourceConfig::default();
        assert_eq!(config.page_url(7), "https://www.goodreads.com/quotes?page=7");
    }

    #[test]
    fn load_config_reads_json_file() {
        let path = std::env::temp_dir().join("goodreads-quotes-config-test.json");
        fs::write(&path, r#"{ "base_url": "http://localhost/quotes", "timeout_seconds": 2 }"#).unwrap();

        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.base_url, "http://localhost/quotes");
        assert_eq!(config.timeout_seconds, 2);
        assert_eq!(config.pages, DEFAULT_PAGES);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_config_fails_on_missing_file() {
        assert!(load_config("/nonexistent/goodreads-quotes.json").is_err());
    }
}
