//! Command-line interface for the nolasales aggregator: a public browse
//! view over the persisted listings and the admin operations that maintain
//! them (endpoint config, refresh cycles, import/export).

mod refresh;
mod render;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};

use nolasales_core::{AppConfig, AppState};
use nolasales_feeds::FeedClient;
use nolasales_store::{export_file_name, export_pretty, StateStore};

#[derive(Debug, Parser)]
#[command(name = "nolasales")]
#[command(about = "Weekly sale listings aggregated from New Orleans grocery feeds")]
struct Cli {
    /// Location of the state blob (overrides the default data directory)
    #[arg(long, global = true, env = "NOLASALES_DATA_PATH")]
    data_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse current sale listings across all stores
    Browse {
        /// Case-insensitive product-name filter
        #[arg(long)]
        search: Option<String>,
    },
    /// Store configuration, refresh, and import/export operations
    #[command(subcommand)]
    Admin(AdminCommands),
}

#[derive(Debug, Subcommand)]
enum AdminCommands {
    /// List the configured stores
    Stores,
    /// Set a store's feed endpoint URL
    SetUrl { id: String, url: String },
    /// Include a store in bulk refresh
    Enable { id: String },
    /// Exclude a store from bulk refresh
    Disable { id: String },
    /// Fetch, normalize, and persist one store's feed
    Fetch { id: String },
    /// Sequentially refresh every active store with a configured endpoint
    FetchAll,
    /// Write the full state as pretty-printed JSON
    Export {
        /// Output file; defaults to nolasales-data-<date>.json
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replace the full state from a previously exported JSON file
    Import { file: PathBuf },
    /// Show the data summary
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = nolasales_core::load_app_config()?;
    if let Some(path) = cli.data_path {
        config.data_path = path;
    }
    let gateway = StateStore::new(&config.data_path);

    match cli.command {
        Commands::Browse { search } => run_browse(&gateway, search.as_deref()),
        Commands::Admin(command) => run_admin(command, &config, &gateway).await,
    }
}

fn run_browse(gateway: &StateStore, search: Option<&str>) -> anyhow::Result<()> {
    let state = gateway.load_or_init()?;
    let term = search.unwrap_or("");
    let filtered = state.search(term);
    render::print_listings(&state, &filtered, term);
    Ok(())
}

async fn run_admin(
    command: AdminCommands,
    config: &AppConfig,
    gateway: &StateStore,
) -> anyhow::Result<()> {
    match command {
        AdminCommands::Stores => {
            let state = gateway.load_or_init()?;
            for store in &state.stores {
                let updated = store
                    .last_updated
                    .map_or_else(|| "never".to_owned(), |at| at.format("%Y-%m-%d %H:%M UTC").to_string());
                let url = if store.api_url.is_empty() {
                    "<no endpoint>"
                } else {
                    store.api_url.as_str()
                };
                println!(
                    "{:<14} {:<22} format={:<13} active={:<5} updated={updated}  {url}",
                    store.id, store.name, store.format, store.is_active
                );
            }
            Ok(())
        }
        AdminCommands::SetUrl { id, url } => {
            let mut state = gateway.load_or_init()?;
            let store = store_mut_or_bail(&mut state, &id)?;
            store.api_url = url;
            let name = store.name.clone();
            gateway.save(&state)?;
            println!("endpoint updated for {name}");
            Ok(())
        }
        AdminCommands::Enable { id } => set_active(gateway, &id, true),
        AdminCommands::Disable { id } => set_active(gateway, &id, false),
        AdminCommands::Fetch { id } => {
            let client = FeedClient::new(config.request_timeout_secs, &config.user_agent)?;
            let mut state = gateway.load_or_init()?;
            let count = refresh::refresh_store(&client, gateway, &mut state, &id).await?;
            let name = state.store(&id).map_or(id.as_str(), |s| s.name.as_str());
            println!("Updated {name} with {count} products");
            Ok(())
        }
        AdminCommands::FetchAll => {
            let client = FeedClient::new(config.request_timeout_secs, &config.user_agent)?;
            let mut state = gateway.load_or_init()?;
            let delay = Duration::from_millis(config.fetch_delay_ms);
            let summary = refresh::refresh_all(&client, gateway, &mut state, delay).await?;
            println!(
                "refreshed {} stores ({} failed)",
                summary.refreshed, summary.failed
            );
            Ok(())
        }
        AdminCommands::Export { out } => {
            let state = gateway.load_or_init()?;
            let out = out.unwrap_or_else(|| PathBuf::from(export_file_name(Utc::now().date_naive())));
            let json = export_pretty(&state)?;
            std::fs::write(&out, json)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("exported state to {}", out.display());
            Ok(())
        }
        AdminCommands::Import { file } => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            match gateway.import(&json) {
                Ok(state) => {
                    println!(
                        "Data imported successfully: {} stores, {} listings, {} products",
                        state.stores.len(),
                        state.stores_with_data(),
                        state.total_products()
                    );
                    Ok(())
                }
                Err(e) => {
                    // The prior state is untouched on a failed import.
                    println!("Error importing data - invalid format");
                    Err(e.into())
                }
            }
        }
        AdminCommands::Status => {
            let state = gateway.load_or_init()?;
            println!("Active stores:    {}", state.active_store_count());
            println!("Stores with data: {}", state.stores_with_data());
            println!("Total products:   {}", state.total_products());
            match state.last_global_update {
                Some(at) => println!("Last updated:     {}", at.format("%Y-%m-%d %H:%M UTC")),
                None => println!("Last updated:     never"),
            }
            Ok(())
        }
    }
}

fn set_active(gateway: &StateStore, id: &str, active: bool) -> anyhow::Result<()> {
    let mut state = gateway.load_or_init()?;
    let store = store_mut_or_bail(&mut state, id)?;
    store.is_active = active;
    let name = store.name.clone();
    gateway.save(&state)?;
    println!(
        "{name} is now {}",
        if active { "active" } else { "inactive" }
    );
    Ok(())
}

fn store_mut_or_bail<'a>(
    state: &'a mut AppState,
    id: &str,
) -> anyhow::Result<&'a mut nolasales_core::StoreConfig> {
    state
        .store_mut(id)
        .ok_or_else(|| anyhow::anyhow!("no store with id \"{id}\""))
}
