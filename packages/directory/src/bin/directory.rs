//! Ecosystem directory CLI
//!
//! Renders the directory listings from the local dataset and queries the
//! network metrics endpoints. Every command prints JSON on stdout; logs go
//! to stderr.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use directory_core::common::{debounce_channel, SortKey};
use directory_core::config::Config;
use directory_core::dataset::Dataset;
use directory_core::domains::academy::{AcademyPage, AcademyViewState};
use directory_core::domains::ecosystem::{EcosystemPage, EcosystemViewState, ProjectDetail};
use directory_core::domains::jobs::{JobBoard, JobEntry, JobFilter};
use metrics_client::{Chain, DeveloperSnapshot, EcosystemSnapshot};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "directory")]
#[command(about = "Ecosystem directory: projects, jobs, academy and network metrics")]
struct Cli {
    /// Data directory (overrides DIRECTORY_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List ecosystem projects
    Projects {
        #[arg(long, default_value = "")]
        keyword: String,
        /// Tag value from the ecosystem taxonomy
        #[arg(long)]
        tag: Option<String>,
        /// a-z or popularity
        #[arg(long, default_value = "a-z")]
        sort: String,
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        mainnet_only: bool,
        /// Number of revealed cards
        #[arg(long)]
        loaded: Option<usize>,
    },

    /// Show one project
    Project { id: String },

    /// List the job board
    Jobs {
        #[arg(long, default_value = "")]
        keyword: String,
        #[arg(long)]
        remote_only: bool,
        /// Required job tag, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Deep-link key of the panel to open
        #[arg(long)]
        key: Option<String>,
        #[arg(long)]
        loaded: Option<usize>,
        /// Locale prefix of the emitted deep links
        #[arg(long, default_value = "en")]
        locale: String,
    },

    /// List an academy section
    Academy {
        /// Tag value from the academy taxonomy
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value = "")]
        keyword: String,
        #[arg(long)]
        loaded: Option<usize>,
    },

    /// Fetch network activity metrics
    Metrics {
        #[arg(long)]
        testnet: bool,
        /// GitHub repository as org/name, repeatable
        #[arg(long = "repo")]
        repos: Vec<String>,
        /// npm package, repeatable
        #[arg(long = "package")]
        packages: Vec<String>,
    },

    /// Search projects interactively, one keyword per stdin line
    Search,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,directory_core=debug,metrics_client=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    match cli.command {
        Commands::Projects {
            keyword,
            tag,
            sort,
            mainnet_only,
            loaded,
        } => {
            let dataset = load(&config)?;
            let mut state = EcosystemViewState::default()
                .with_keyword(keyword)
                .with_tag(tag)
                .with_sort(sort.parse::<SortKey>()?)
                .with_mainnet_only(mainnet_only);
            if let Some(loaded) = loaded {
                state = state.with_loaded(loaded);
            }

            let mut page = EcosystemPage::new(dataset.ecosystem_tags);
            page.resolve(dataset.projects);
            page.set_state(state);
            let badge = page.category_badge()?;
            let view = page.render()?;
            print_json(&BadgedView { badge, view })?;
        }
        Commands::Project { id } => {
            let dataset = load(&config)?;
            let detail = ProjectDetail::build(
                &id,
                &dataset.projects,
                &dataset.jobs,
                &dataset.ecosystem_tags,
            )?;
            print_json(&detail)?;
        }
        Commands::Jobs {
            keyword,
            remote_only,
            tags,
            key,
            loaded,
            locale,
        } => {
            let dataset = load(&config)?;
            let mut filter = JobFilter::default()
                .with_keyword(keyword)
                .with_remote_only(remote_only)
                .with_tags(tags);
            if let Some(loaded) = loaded {
                filter = filter.with_loaded(loaded);
            }

            let mut board = JobBoard::new(key);
            board.resolve(dataset.jobs, dataset.projects);
            board.set_filter(filter);
            let view = board.render().map(|entry| JobRow {
                deep_link: entry.key.deep_link(&locale),
                entry,
            });
            print_json(&view)?;
        }
        Commands::Academy {
            category,
            keyword,
            loaded,
        } => {
            let dataset = load(&config)?;
            let mut state = AcademyViewState::default()
                .with_category(category)
                .with_keyword(keyword);
            if let Some(loaded) = loaded {
                state = state.with_loaded(loaded);
            }

            let mut page = AcademyPage::new(dataset.academy_tags);
            page.resolve(dataset.academy);
            page.set_state(state);
            let badge = page.category_badge()?;
            let view = page.render()?;
            print_json(&BadgedView { badge, view })?;
        }
        Commands::Metrics {
            testnet,
            repos,
            packages,
        } => {
            let client = config.metrics_client();
            let chain = Chain::from_testnet_flag(testnet);
            let ecosystem = client.ecosystem_snapshot(chain).await;

            let repos = repos
                .iter()
                .map(|repo| {
                    repo.split_once('/')
                        .map(|(org, name)| (org.to_string(), name.to_string()))
                        .with_context(|| format!("Repository '{}' must be org/name", repo))
                })
                .collect::<Result<Vec<_>>>()?;
            let developer = if repos.is_empty() && packages.is_empty() {
                None
            } else {
                Some(client.developer_snapshot(&repos, &packages).await)
            };

            print_json(&MetricsReport {
                ecosystem,
                developer,
            })?;
        }
        Commands::Search => {
            let dataset = load(&config)?;
            search(dataset, config.keyword_debounce).await?;
        }
    }

    Ok(())
}

fn load(config: &Config) -> Result<Dataset> {
    Dataset::load_dir(&config.data_dir)
        .with_context(|| format!("Failed to load dataset from {}", config.data_dir.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", output);
    Ok(())
}

#[derive(Serialize)]
struct BadgedView<V> {
    badge: Option<String>,
    view: V,
}

#[derive(Serialize)]
struct JobRow<'a> {
    #[serde(flatten)]
    entry: JobEntry<'a>,
    deep_link: String,
}

#[derive(Serialize)]
struct MetricsReport {
    ecosystem: EcosystemSnapshot,
    developer: Option<DeveloperSnapshot>,
}

#[derive(Serialize)]
struct SearchResult<'a> {
    keyword: &'a str,
    total: usize,
    names: Vec<&'a str>,
}

/// Keystrokes arrive as lines; only the last line of a burst is searched.
async fn search(dataset: Dataset, window: Duration) -> Result<()> {
    let (keywords, mut debounced) = debounce_channel::<String>(window);

    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if keywords.send(line).is_err() {
                break;
            }
        }
        Ok::<_, std::io::Error>(())
    });

    let mut page = EcosystemPage::new(dataset.ecosystem_tags);
    page.resolve(dataset.projects);

    while let Some(keyword) = debounced.recv().await {
        page.update(|state| state.with_keyword(keyword.as_str()));
        let view = page.render()?;
        let (total, names) = match view.listing() {
            Some(listing) => (
                listing.total,
                listing.items.iter().map(|project| project.name.as_str()).collect(),
            ),
            None => (0, Vec::new()),
        };
        let result = SearchResult {
            keyword: &keyword,
            total,
            names,
        };
        println!("{}", serde_json::to_string(&result).context("Failed to serialize result")?);
    }

    reader.await.context("Stdin reader task failed")??;
    Ok(())
}
