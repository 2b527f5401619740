//! fluxdash - a terminal dashboard for Flux GitOps resources
//!
//! Browse automations and sources across a cluster and drill into
//! per-resource detail pages, k9s-style.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fluxdash::api::client::{create_client, current_context, KubeCoreClient};
use fluxdash::api::CoreClient;
use fluxdash::config::{self, ConfigLoader};
use fluxdash::logging::init_logging;
use fluxdash::query::QueryClient;
use fluxdash::session::{AuthGate, KubeAuthGate};
use std::sync::Arc;
use std::time::Duration;

/// fluxdash - a terminal dashboard for Flux GitOps resources
#[derive(Parser, Debug)]
#[command(name = "fluxdash")]
#[command(about = "A terminal dashboard for Flux GitOps resources", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    /// Namespace filter override
    #[arg(long, short = 'n')]
    namespace: Option<String>,

    /// Route to open at startup (e.g. "/sources" or
    /// "/git_repo?name=repo&clusterName=prod")
    #[arg(long)]
    route: Option<String>,

    /// Configuration subcommand
    #[command(subcommand)]
    command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "defaultNamespace", "query.staleSeconds")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List,
    /// Show configuration file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(Command::Config { subcommand }) = args.command {
        return handle_config_command(subcommand);
    }

    let log_file = init_logging(args.debug);
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    let mut config = ConfigLoader::load().unwrap_or_default();
    if let Some(namespace) = args.namespace {
        config.default_namespace = namespace;
    }

    tracing::debug!("Initializing Kubernetes client");
    let client = create_client().await?;
    let context = current_context();

    let auth = KubeAuthGate::new(client.clone(), context.clone());
    let user = auth
        .user_info()
        .await
        .context("Unable to authenticate against the cluster")?;
    tracing::info!("Connected to {} as {}", context, user.id);

    let api: Arc<dyn CoreClient> = Arc::new(KubeCoreClient::new(client, context.clone()));

    match api.feature_flags().await {
        Ok(flags) => tracing::debug!("Feature flags: {:?}", flags),
        Err(e) => tracing::warn!("Failed to fetch feature flags: {e}"),
    }

    let queries = Arc::new(QueryClient::new(
        api.clone(),
        Duration::from_secs(config.query.stale_seconds),
        config.query.retries,
    ));

    run(api, queries, context, config, args.route).await
}

#[cfg(feature = "tui")]
async fn run(
    api: Arc<dyn CoreClient>,
    queries: Arc<QueryClient>,
    context: String,
    config: config::Config,
    route: Option<String>,
) -> Result<()> {
    fluxdash::tui::run_tui(api, queries, context, config, route).await
}

#[cfg(not(feature = "tui"))]
async fn run(
    api: Arc<dyn CoreClient>,
    _queries: Arc<QueryClient>,
    _context: String,
    config: config::Config,
    _route: Option<String>,
) -> Result<()> {
    // Headless build: dump the automations list and exit
    let namespace = if config.default_namespace.is_empty() {
        None
    } else {
        Some(config.default_namespace.as_str())
    };
    let automations = api.list_automations(namespace).await?;
    for a in automations {
        println!("{}\t{}/{}", a.kind, a.namespace, a.name);
    }
    Ok(())
}

/// Handle configuration subcommands
fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Get { key } => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            if let Some(key) = key {
                let value = config::get_config_value(&config, &key)?;
                println!("{}", value);
            } else {
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value } => {
            let mut config = ConfigLoader::load().unwrap_or_default();
            config::set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;
            ConfigLoader::save_root(&config).context("Failed to save configuration")?;
            println!("Configuration saved");
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            println!("{}", config::config_path().display());
        }
    }
    Ok(())
}
