//! lazysui - a terminal explorer for the transactions of Sui addresses and objects.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, bail, eyre};

mod client;
mod commands;
mod domain;
mod logging;
mod presenter;
mod source;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::client::{HttpConfig, SuiRpcClient};
use crate::domain::{Category, CustomNetwork, ExplorerError, NetworkConfig, normalize_id};
use crate::presenter::TxView;
use crate::source::{LiveLoader, SourceKind, StaticDataset, TransactionSource};
use crate::state::{App, AppConfig, Query, StartupOptions};

// ============================================================================
// Command Line
// ============================================================================

/// lazysui - Terminal UI for exploring Sui transactions
#[derive(Parser, Debug)]
#[command(name = "lazysui", version, about, long_about = None)]
struct Cli {
    /// Identifier to show on startup
    #[command(subcommand)]
    command: Option<Commands>,

    /// Network for this session: Local, Devnet, Testnet or a custom network name
    #[arg(short, long, global = true)]
    network: Option<String>,

    /// JSON-RPC endpoint to use instead of the network's own
    #[arg(long, value_name = "URL", global = true, conflicts_with = "network")]
    rpc_url: Option<String>,

    /// Read transactions from a static dataset instead of the network
    #[arg(long = "static", global = true)]
    use_static: bool,

    /// Static dataset file, implies --static
    #[arg(long, value_name = "PATH", global = true)]
    data: Option<PathBuf>,

    /// RPC request timeout in seconds
    #[arg(long, value_name = "SECS", global = true)]
    timeout: Option<u64>,

    /// Print the transactions and exit instead of starting the TUI
    #[arg(short, long, global = true)]
    print: bool,

    /// Log filter, e.g. "debug" (RUST_LOG takes precedence)
    #[arg(long, env = "LAZYSUI_LOG", global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Commands {
    /// Transactions sent from and received by an address
    Address {
        /// Hex identifier, 0x prefix optional
        id: String,
    },
    /// Transactions that took an object as input or mutated it
    Object {
        /// Hex identifier, 0x prefix optional
        id: String,
    },
}

impl Cli {
    /// The identifier and category named on the command line.
    fn query(&self) -> Result<Option<Query>> {
        let Some(command) = &self.command else {
            return Ok(None);
        };
        let (raw, category) = match command {
            Commands::Address { id } => (id, Category::Address),
            Commands::Object { id } => (id, Category::Object),
        };
        let id = normalize_id(raw).map_err(ExplorerError::into_report)?;
        Ok(Some(Query::new(id, category)))
    }

    /// The network overriding the configured one for this session.
    fn network_override(&self, config: &AppConfig) -> Result<Option<NetworkConfig>> {
        if let Some(url) = &self.rpc_url {
            return Ok(Some(NetworkConfig::Custom(CustomNetwork::new(
                "Custom RPC",
                url.clone(),
            ))));
        }
        match &self.network {
            Some(name) => config
                .find_network(name)
                .map(Some)
                .ok_or_else(|| eyre!("unknown network '{name}'")),
            None => Ok(None),
        }
    }

    fn wants_static(&self) -> bool {
        self.use_static || self.data.is_some()
    }

    fn rpc_client(&self) -> Result<SuiRpcClient> {
        let client = match self.timeout {
            Some(secs) => SuiRpcClient::with_config(&HttpConfig::with_timeout(
                Duration::from_secs(secs),
            )),
            None => SuiRpcClient::new(),
        };
        client.map_err(ExplorerError::into_report)
    }
}

// ============================================================================
// Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = AppConfig::load();
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());
    let _logging = logging::init_tracing(&log_level, cli.print)?;

    let query = cli.query()?;
    if cli.print && query.is_none() {
        bail!("--print needs an identifier, e.g. `lazysui address 0x... --print`");
    }

    let options = StartupOptions {
        network: cli.network_override(&config)?,
        query,
        persist_config: !cli.print,
    };

    let kind = SourceKind::from_env(cli.wants_static(), config.use_static_data);
    let source: TransactionSource = match kind {
        SourceKind::Static => {
            let path = cli.data.as_deref().or(config.static_data_path.as_deref());
            TransactionSource::Static(load_dataset(path)?)
        }
        SourceKind::Live => TransactionSource::Live(LiveLoader::new(cli.rpc_client()?)),
    };

    let mut app: App = App::new(config, source, options);

    if cli.print {
        return print_transactions(&mut app).await;
    }

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}

fn load_dataset(path: Option<&Path>) -> Result<StaticDataset> {
    let dataset = match path {
        Some(path) => StaticDataset::load(path)?,
        None => StaticDataset::bundled().map_err(ExplorerError::into_report)?,
    };
    tracing::info!(entries = dataset.len(), "loaded static dataset");
    tracing::debug!(ids = ?dataset.ids(), "static dataset identifiers");
    Ok(dataset)
}

/// Waits for the current key to resolve and prints it as plain text.
async fn print_transactions(app: &mut App) -> Result<()> {
    let view = app.resolve_view().await;
    match &view {
        TxView::Empty => {
            eprintln!("No transactions to show");
            Ok(())
        }
        TxView::Error(panel) => Err(eyre!("{}: 0x{}", panel.message, panel.id)),
        _ => {
            println!("{}", view.to_plain_text());
            Ok(())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
