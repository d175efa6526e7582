//! Metrics client behaviour against a mock HTTP server.

use metrics_client::fallback::TVL_SHAPES;
use metrics_client::{Chain, FallbackChain, JsonNumberSource, MetricsClient, MetricsError, Tile};
use num_bigint::BigUint;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> MetricsClient {
    MetricsClient::new()
        .with_base_url(server.uri())
        .with_explorer_urls(server.uri(), format!("{}/goerli", server.uri()))
        .with_tvl_fallback_url(format!("{}/api/stats", server.uri()))
}

#[tokio::test]
async fn npm_downloads_server_error_coerces_to_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/npm-downloads/starknet"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.fetch_npm_downloads("starknet").await, 0);
}

#[tokio::test]
async fn npm_downloads_reads_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/npm-downloads/starknet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "downloads": 48213,
            "package": "starknet",
            "start": "2024-01-01",
            "end": "2024-01-31"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.fetch_npm_downloads("starknet").await, 48213);
}

#[tokio::test]
async fn npm_downloads_malformed_body_coerces_to_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/npm-downloads/starknet"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.fetch_npm_downloads("starknet").await, 0);
}

#[tokio::test]
async fn explorer_count_is_last_page_times_page_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/txns"))
        .and(query_param("ps", "10"))
        .and(query_param("p", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "lastPage": 1234 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/goerli/api/blocks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "lastPage": 7 })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.fetch_transaction_count(Chain::Mainnet).await, 12340);
    assert_eq!(client.fetch_block_count(Chain::Testnet).await, 70);
}

#[tokio::test]
async fn explorer_failure_coerces_to_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contracts"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.fetch_contract_count(Chain::Mainnet).await, 0);
}

#[tokio::test]
async fn bridge_balance_is_parsed_beyond_u64() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bridge-metrics"))
        .and(query_param("network", "GOERLI"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "balance": "123456789012345678901234567890",
            "ethValue": 1850.25
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let metrics = client.fetch_bridge_metrics(Chain::Testnet).await.unwrap();

    let expected: BigUint = "123456789012345678901234567890".parse().unwrap();
    assert_eq!(metrics.balance, expected);
    assert_eq!(metrics.eth_value, 1850.25);
}

#[tokio::test]
async fn bridge_invalid_balance_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bridge-metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "balance": "12abc",
            "ethValue": 1.0
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.fetch_bridge_metrics(Chain::Mainnet).await.unwrap_err();
    assert!(matches!(err, MetricsError::Parse(_)));
}

#[tokio::test]
async fn github_repo_non_2xx_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/github-metrics/starkware-libs/cairo"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .fetch_github_repo("starkware-libs", "cairo")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn tweet_counts_send_encoded_keyword() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tweet-counts"))
        .and(query_param("keyword", "starknet defi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "start": "2024-01-01", "end": "2024-01-02", "tweet_count": 12 },
            { "start": "2024-01-02", "end": "2024-01-03", "tweet_count": 30 }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let counts = client.fetch_tweet_counts("starknet defi").await.unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[1].tweet_count, 30);
}

#[tokio::test]
async fn tvl_reads_primary_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tvl"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "totalValueLocked": 250000000.5 })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tvl": 1 })))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.fetch_tvl().await, Some(250000000.5));
}

#[tokio::test]
async fn tvl_bare_zero_from_primary_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tvl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(0)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tvl": 5 })))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.fetch_tvl().await, Some(0.0));
}

#[tokio::test]
async fn custom_tvl_chain_survives_later_url_builders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/custom-tvl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(321.0)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tvl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(1.0)))
        .expect(0)
        .mount(&server)
        .await;

    let custom = FallbackChain::new().with_source(JsonNumberSource::new(
        "custom",
        format!("{}/custom-tvl", server.uri()),
        TVL_SHAPES,
        reqwest::Client::new(),
    ));
    let client = MetricsClient::new()
        .with_tvl_chain(custom)
        .with_base_url(server.uri())
        .with_tvl_fallback_url(format!("{}/api/stats", server.uri()));

    assert_eq!(client.fetch_tvl().await, Some(321.0));
}

#[tokio::test]
async fn tvl_falls_back_when_primary_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tvl"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tvl": 99.0 })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.fetch_tvl().await, Some(99.0));
}

#[tokio::test]
async fn tvl_falls_back_when_primary_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tvl"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "totalValueLocked": 42 })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.fetch_tvl().await, Some(42.0));
}

#[tokio::test]
async fn tvl_is_none_when_every_provider_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tvl"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.fetch_tvl().await, None);
}

#[tokio::test]
async fn snapshot_keeps_healthy_tiles_when_others_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/txns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "lastPage": 5 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/blocks"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/contracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "lastPage": 2 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bridge-metrics"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tvl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(17.5)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let snapshot = client.ecosystem_snapshot(Chain::Mainnet).await;

    assert_eq!(snapshot.transactions, 50);
    assert_eq!(snapshot.blocks, 0);
    assert_eq!(snapshot.contracts, 20);
    assert!(snapshot.bridge.is_none());
    assert_eq!(snapshot.tvl, Some(17.5));
}

#[tokio::test]
async fn spawned_tiles_resolve_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/txns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "lastPage": 3 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bridge-metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "balance": "1000",
            "ethValue": 2.0
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut rx = client.spawn_ecosystem_tiles(Chain::Mainnet);
    let tiles = rx.wait_for(|tiles| tiles.all_ready()).await.unwrap().clone();

    assert_eq!(tiles.transactions, Tile::Ready(30));
    assert_eq!(tiles.blocks, Tile::Ready(0));
    assert_eq!(tiles.contracts, Tile::Ready(0));
    assert_eq!(
        tiles.bridge.ready().unwrap().as_ref().map(|b| b.eth_value),
        Some(2.0)
    );
    assert_eq!(tiles.tvl, Tile::Ready(None));
}

#[tokio::test]
async fn developer_snapshot_keeps_failed_repos() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/github-metrics/keep-starknet-strange/madara"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "stars": 500 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/github-metrics/unknown/repo"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/npm-downloads/get-starknet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "downloads": 9 })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let snapshot = client
        .developer_snapshot(
            &[
                ("keep-starknet-strange".to_string(), "madara".to_string()),
                ("unknown".to_string(), "repo".to_string()),
            ],
            &["get-starknet".to_string(), "missing".to_string()],
        )
        .await;

    assert_eq!(snapshot.repos[0].repo.as_ref().unwrap().stargazers_count, 500);
    assert!(snapshot.repos[1].repo.is_none());
    assert_eq!(snapshot.packages[0].downloads, 9);
    assert_eq!(snapshot.packages[1].downloads, 0);
}
