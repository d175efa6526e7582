//! Best-effort REST client for ecosystem dashboard metrics.
//!
//! Wraps the starknet-db metrics API and the Voyager block explorer. Each call
//! is independent. Calls documented as "coerced" never fail: network errors,
//! non-2xx responses and malformed bodies are logged and replaced by a neutral
//! value so a dashboard tile can always render.
//!
//! # Example
//!
//! ```rust,ignore
//! use metrics_client::{Chain, MetricsClient};
//!
//! let client = MetricsClient::new();
//!
//! let downloads = client.fetch_npm_downloads("starknet").await; // 0 on failure
//! let tvl = client.fetch_tvl().await; // None when every provider failed
//! let snapshot = client.ecosystem_snapshot(Chain::Mainnet).await;
//! ```

pub mod dashboard;
pub mod error;
pub mod fallback;
pub mod types;

pub use dashboard::{
    DeveloperSnapshot, EcosystemSnapshot, EcosystemTiles, PackageDownloads, RepoMetrics, Tile,
};
pub use error::{MetricsError, Result};
pub use fallback::{FallbackChain, JsonNumberSource, MetricSource, ValueShape};
pub use types::{BridgeMetrics, Chain, GithubRepo, NpmDownloads, TweetCount};

use std::str::FromStr;
use std::sync::Arc;

use num_bigint::BigUint;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use fallback::{EXPLORER_TVL_SHAPES, TVL_SHAPES};
use types::{BridgeMetricsDto, ExplorerPage};

pub const DEFAULT_BASE_URL: &str = "https://api.starknet-db.com";
pub const DEFAULT_EXPLORER_MAINNET_URL: &str = "https://voyager.online";
pub const DEFAULT_EXPLORER_TESTNET_URL: &str = "https://goerli.voyager.online";

/// Page size requested from the explorer listings. Totals are `lastPage * EXPLORER_PAGE_SIZE`.
pub const EXPLORER_PAGE_SIZE: u64 = 10;

/// Explorer listing whose total is derived from its page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerListing {
    Transactions,
    Blocks,
    Contracts,
}

impl ExplorerListing {
    fn path(&self) -> &'static str {
        match self {
            ExplorerListing::Transactions => "txns",
            ExplorerListing::Blocks => "blocks",
            ExplorerListing::Contracts => "contracts",
        }
    }
}

/// Client for the metrics endpoints.
#[derive(Clone)]
pub struct MetricsClient {
    http: Client,
    base_url: String,
    explorer_mainnet_url: String,
    explorer_testnet_url: String,
    tvl_fallback_url: String,
    tvl_chain: Arc<FallbackChain<f64>>,
    /// Set by [`MetricsClient::with_tvl_chain`]; URL builders leave such a chain alone.
    custom_tvl_chain: bool,
}

impl MetricsClient {
    /// Create a client pointed at the public endpoints.
    pub fn new() -> Self {
        let http = Client::new();
        let tvl_fallback_url = format!("{}/api/stats", DEFAULT_EXPLORER_MAINNET_URL);
        let tvl_chain = Arc::new(build_tvl_chain(&http, DEFAULT_BASE_URL, &tvl_fallback_url));
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            explorer_mainnet_url: DEFAULT_EXPLORER_MAINNET_URL.to_string(),
            explorer_testnet_url: DEFAULT_EXPLORER_TESTNET_URL.to_string(),
            tvl_fallback_url,
            tvl_chain,
            custom_tvl_chain: false,
        }
    }

    /// Set a custom metrics API base URL (proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = trim_url(url.into());
        self.rebuild_tvl_chain();
        self
    }

    /// Set the explorer hosts for mainnet and testnet.
    pub fn with_explorer_urls(
        mut self,
        mainnet: impl Into<String>,
        testnet: impl Into<String>,
    ) -> Self {
        self.explorer_mainnet_url = trim_url(mainnet.into());
        self.explorer_testnet_url = trim_url(testnet.into());
        self
    }

    /// Set the secondary TVL provider used when the primary one fails.
    pub fn with_tvl_fallback_url(mut self, url: impl Into<String>) -> Self {
        self.tvl_fallback_url = url.into();
        self.rebuild_tvl_chain();
        self
    }

    /// Replace the TVL provider chain entirely. Later URL builders keep it.
    pub fn with_tvl_chain(mut self, chain: FallbackChain<f64>) -> Self {
        self.tvl_chain = Arc::new(chain);
        self.custom_tvl_chain = true;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn rebuild_tvl_chain(&mut self) {
        if self.custom_tvl_chain {
            return;
        }
        self.tvl_chain = Arc::new(build_tvl_chain(
            &self.http,
            &self.base_url,
            &self.tvl_fallback_url,
        ));
    }

    fn explorer_url(&self, chain: Chain) -> &str {
        match chain {
            Chain::Mainnet => &self.explorer_mainnet_url,
            Chain::Testnet => &self.explorer_testnet_url,
        }
    }

    /// GET a URL and decode its JSON body; non-2xx responses are errors.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(MetricsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| MetricsError::Parse(e.to_string()))
    }

    /// Repository metadata. Failures are returned to the caller.
    #[instrument(skip(self))]
    pub async fn fetch_github_repo(&self, organization: &str, name: &str) -> Result<GithubRepo> {
        let url = format!(
            "{}/github-metrics/{}/{}",
            self.base_url,
            urlencoding::encode(organization),
            urlencoding::encode(name)
        );
        self.get_json(&url).await
    }

    /// Download count for an npm package. Coerced: any failure yields `0`.
    #[instrument(skip(self))]
    pub async fn fetch_npm_downloads(&self, package: &str) -> u64 {
        let url = format!(
            "{}/npm-downloads/{}",
            self.base_url,
            urlencoding::encode(package)
        );
        match self.get_json::<NpmDownloads>(&url).await {
            Ok(payload) => payload.downloads,
            Err(e) => {
                warn!(package, error = %e, "Failed to fetch npm downloads");
                0
            }
        }
    }

    /// Approximate size of an explorer listing. Coerced: any failure yields `0`.
    #[instrument(skip(self))]
    pub async fn fetch_explorer_count(&self, listing: ExplorerListing, chain: Chain) -> u64 {
        let url = format!(
            "{}/api/{}?ps={}&p=1",
            self.explorer_url(chain),
            listing.path(),
            EXPLORER_PAGE_SIZE
        );
        match self.get_json::<ExplorerPage>(&url).await {
            Ok(page) => page.last_page.saturating_mul(EXPLORER_PAGE_SIZE),
            Err(e) => {
                warn!(?listing, %chain, error = %e, "Failed to fetch explorer count");
                0
            }
        }
    }

    pub async fn fetch_transaction_count(&self, chain: Chain) -> u64 {
        self.fetch_explorer_count(ExplorerListing::Transactions, chain)
            .await
    }

    pub async fn fetch_block_count(&self, chain: Chain) -> u64 {
        self.fetch_explorer_count(ExplorerListing::Blocks, chain).await
    }

    pub async fn fetch_contract_count(&self, chain: Chain) -> u64 {
        self.fetch_explorer_count(ExplorerListing::Contracts, chain)
            .await
    }

    /// Bridge balance and ETH value. Failures are returned to the caller.
    #[instrument(skip(self))]
    pub async fn fetch_bridge_metrics(&self, chain: Chain) -> Result<BridgeMetrics> {
        let url = format!(
            "{}/bridge-metrics?network={}",
            self.base_url,
            chain.bridge_network()
        );
        let dto: BridgeMetricsDto = self.get_json(&url).await?;
        let balance = BigUint::from_str(dto.balance.trim()).map_err(|e| {
            MetricsError::Parse(format!("Invalid bridge balance {:?}: {}", dto.balance, e))
        })?;
        debug!(%balance, eth_value = dto.eth_value, "Bridge metrics fetched");
        Ok(BridgeMetrics {
            balance,
            eth_value: dto.eth_value,
        })
    }

    /// Total value locked, from the first provider that answers. `None` when all fail.
    pub async fn fetch_tvl(&self) -> Option<f64> {
        self.tvl_chain.resolve().await
    }

    /// Tweet volume buckets for a keyword. Failures are returned to the caller.
    #[instrument(skip(self))]
    pub async fn fetch_tweet_counts(&self, keyword: &str) -> Result<Vec<TweetCount>> {
        let url = format!(
            "{}/tweet-counts?keyword={}",
            self.base_url,
            urlencoding::encode(keyword)
        );
        self.get_json(&url).await
    }
}

impl Default for MetricsClient {
    fn default() -> Self {
        Self::new()
    }
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Primary starknet-db endpoint, then the explorer stats endpoint.
fn build_tvl_chain(http: &Client, base_url: &str, fallback_url: &str) -> FallbackChain<f64> {
    FallbackChain::new()
        .with_source(JsonNumberSource::new(
            "starknet-db",
            format!("{}/tvl", base_url),
            TVL_SHAPES,
            http.clone(),
        ))
        .with_source(JsonNumberSource::new(
            "voyager-stats",
            fallback_url,
            EXPLORER_TVL_SHAPES,
            http.clone(),
        ))
}
