//! Dashboard aggregation.
//!
//! Every tile is fetched on its own. A slow or failing metric never holds back
//! the others: [`MetricsClient::spawn_ecosystem_tiles`] publishes each tile as
//! soon as it resolves, and [`MetricsClient::ecosystem_snapshot`] runs all
//! fetches concurrently.

use futures::future::join_all;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::types::{BridgeMetrics, Chain, GithubRepo};
use crate::MetricsClient;

/// A dashboard value that may still be in flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Tile<T> {
    Loading,
    Ready(T),
}

impl<T> Default for Tile<T> {
    fn default() -> Self {
        Tile::Loading
    }
}

impl<T> Tile<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Tile::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Tile::Ready(value) => Some(value),
            Tile::Loading => None,
        }
    }
}

/// Network activity tiles, each resolving independently.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EcosystemTiles {
    pub transactions: Tile<u64>,
    pub blocks: Tile<u64>,
    pub contracts: Tile<u64>,
    pub bridge: Tile<Option<BridgeMetrics>>,
    pub tvl: Tile<Option<f64>>,
}

impl EcosystemTiles {
    pub fn all_ready(&self) -> bool {
        self.transactions.is_ready()
            && self.blocks.is_ready()
            && self.contracts.is_ready()
            && self.bridge.is_ready()
            && self.tvl.is_ready()
    }
}

/// Fully resolved network activity.
#[derive(Debug, Clone, Serialize)]
pub struct EcosystemSnapshot {
    pub chain: Chain,
    pub transactions: u64,
    pub blocks: u64,
    pub contracts: u64,
    pub bridge: Option<BridgeMetrics>,
    pub tvl: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepoMetrics {
    pub organization: String,
    pub name: String,
    pub repo: Option<GithubRepo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageDownloads {
    pub package: String,
    pub downloads: u64,
}

/// Developer tooling tiles: repositories and npm packages.
#[derive(Debug, Clone, Serialize)]
pub struct DeveloperSnapshot {
    pub repos: Vec<RepoMetrics>,
    pub packages: Vec<PackageDownloads>,
}

impl MetricsClient {
    /// Bridge metrics for a dashboard tile; a failure renders as an empty tile.
    async fn bridge_tile(&self, chain: Chain) -> Option<BridgeMetrics> {
        match self.fetch_bridge_metrics(chain).await {
            Ok(metrics) => Some(metrics),
            Err(e) => {
                warn!(%chain, error = %e, "Failed to fetch bridge metrics");
                None
            }
        }
    }

    /// Fetch every network activity metric concurrently.
    pub async fn ecosystem_snapshot(&self, chain: Chain) -> EcosystemSnapshot {
        let (transactions, blocks, contracts, bridge, tvl) = tokio::join!(
            self.fetch_transaction_count(chain),
            self.fetch_block_count(chain),
            self.fetch_contract_count(chain),
            self.bridge_tile(chain),
            self.fetch_tvl(),
        );
        info!(%chain, transactions, blocks, contracts, "Ecosystem snapshot collected");

        EcosystemSnapshot {
            chain,
            transactions,
            blocks,
            contracts,
            bridge,
            tvl,
        }
    }

    /// Start one task per tile and publish each result as it lands.
    ///
    /// Must be called inside a tokio runtime.
    pub fn spawn_ecosystem_tiles(&self, chain: Chain) -> watch::Receiver<EcosystemTiles> {
        let (tx, rx) = watch::channel(EcosystemTiles::default());

        let client = self.clone();
        let sender = tx.clone();
        tokio::spawn(async move {
            let value = client.fetch_transaction_count(chain).await;
            sender.send_modify(|tiles| tiles.transactions = Tile::Ready(value));
        });

        let client = self.clone();
        let sender = tx.clone();
        tokio::spawn(async move {
            let value = client.fetch_block_count(chain).await;
            sender.send_modify(|tiles| tiles.blocks = Tile::Ready(value));
        });

        let client = self.clone();
        let sender = tx.clone();
        tokio::spawn(async move {
            let value = client.fetch_contract_count(chain).await;
            sender.send_modify(|tiles| tiles.contracts = Tile::Ready(value));
        });

        let client = self.clone();
        let sender = tx.clone();
        tokio::spawn(async move {
            let value = client.bridge_tile(chain).await;
            sender.send_modify(|tiles| tiles.bridge = Tile::Ready(value));
        });

        let client = self.clone();
        tokio::spawn(async move {
            let value = client.fetch_tvl().await;
            tx.send_modify(|tiles| tiles.tvl = Tile::Ready(value));
        });

        rx
    }

    /// Fetch repository metadata and package downloads concurrently.
    ///
    /// A repository that cannot be fetched is kept with `repo: None`.
    pub async fn developer_snapshot(
        &self,
        repos: &[(String, String)],
        packages: &[String],
    ) -> DeveloperSnapshot {
        let repo_futures = repos.iter().map(|(organization, name)| async move {
            let repo = match self.fetch_github_repo(organization, name).await {
                Ok(repo) => Some(repo),
                Err(e) => {
                    warn!(%organization, %name, error = %e, "Failed to fetch repository metrics");
                    None
                }
            };
            RepoMetrics {
                organization: organization.clone(),
                name: name.clone(),
                repo,
            }
        });

        let package_futures = packages.iter().map(|package| async move {
            PackageDownloads {
                package: package.clone(),
                downloads: self.fetch_npm_downloads(package).await,
            }
        });

        let (repos, packages) = tokio::join!(join_all(repo_futures), join_all(package_futures));
        DeveloperSnapshot { repos, packages }
    }
}
