use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use metrics_client::{DEFAULT_BASE_URL, DEFAULT_EXPLORER_MAINNET_URL, DEFAULT_EXPLORER_TESTNET_URL};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub metrics_base_url: String,
    pub explorer_mainnet_url: String,
    pub explorer_testnet_url: String,
    pub tvl_fallback_url: Option<String>,
    pub keyword_debounce: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            data_dir: env::var("DIRECTORY_DATA_DIR")
                .unwrap_or_else(|_| "./data".to_string())
                .into(),
            metrics_base_url: env::var("METRICS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            explorer_mainnet_url: env::var("EXPLORER_MAINNET_URL")
                .unwrap_or_else(|_| DEFAULT_EXPLORER_MAINNET_URL.to_string()),
            explorer_testnet_url: env::var("EXPLORER_TESTNET_URL")
                .unwrap_or_else(|_| DEFAULT_EXPLORER_TESTNET_URL.to_string()),
            tvl_fallback_url: env::var("TVL_FALLBACK_URL").ok(),
            keyword_debounce: Duration::from_millis(
                env::var("KEYWORD_DEBOUNCE_MS")
                    .unwrap_or_else(|_| "200".to_string())
                    .parse()
                    .context("KEYWORD_DEBOUNCE_MS must be a number of milliseconds")?,
            ),
        })
    }

    /// Metrics client pointed at the configured endpoints
    pub fn metrics_client(&self) -> metrics_client::MetricsClient {
        let client = metrics_client::MetricsClient::new()
            .with_base_url(&self.metrics_base_url)
            .with_explorer_urls(&self.explorer_mainnet_url, &self.explorer_testnet_url);
        match &self.tvl_fallback_url {
            Some(url) => client.with_tvl_fallback_url(url),
            None => client,
        }
    }
}
