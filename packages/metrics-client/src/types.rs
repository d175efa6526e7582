use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Which Starknet network a metric is read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chain {
    #[default]
    Mainnet,
    Testnet,
}

impl Chain {
    pub fn from_testnet_flag(testnet: bool) -> Self {
        if testnet {
            Chain::Testnet
        } else {
            Chain::Mainnet
        }
    }

    /// Value of the `network` query parameter on the bridge endpoint.
    pub fn bridge_network(&self) -> &'static str {
        match self {
            Chain::Mainnet => "MAINNET",
            Chain::Testnet => "GOERLI",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Chain::Mainnet => write!(f, "mainnet"),
            Chain::Testnet => write!(f, "testnet"),
        }
    }
}

/// Repository metadata from `/github-metrics/{org}/{repo}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubRepo {
    #[serde(default, alias = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "stars", alias = "stargazersCount")]
    pub stargazers_count: u64,
    #[serde(default, alias = "forks", alias = "forksCount")]
    pub forks_count: u64,
    #[serde(default, alias = "watchers", alias = "watchersCount")]
    pub watchers_count: u64,
    #[serde(default, alias = "openIssuesCount")]
    pub open_issues_count: u64,
    #[serde(default, alias = "htmlUrl")]
    pub html_url: Option<String>,
}

/// Payload of `/npm-downloads/{package}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpmDownloads {
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

/// Raw payload of `/bridge-metrics`; the balance is an integer encoded as a string.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BridgeMetricsDto {
    pub balance: String,
    #[serde(rename = "ethValue")]
    pub eth_value: f64,
}

/// Bridge balance (in wei) and its ETH value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeMetrics {
    #[serde(serialize_with = "serialize_decimal")]
    pub balance: BigUint,
    pub eth_value: f64,
}

fn serialize_decimal<S: serde::Serializer>(
    value: &BigUint,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// One bucket of `/tweet-counts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetCount {
    pub start: String,
    pub end: String,
    #[serde(alias = "tweetCount")]
    pub tweet_count: u64,
}

/// First page of a block-explorer listing; only the page count is used.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ExplorerPage {
    #[serde(rename = "lastPage")]
    pub last_page: u64,
}
