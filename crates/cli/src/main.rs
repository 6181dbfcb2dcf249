//! `freshmart`: command-line front end for the inventory store.
//!
//! A thin shell: arguments become request values, the store does the work,
//! results and errors are rendered as text or JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use freshmart_inventory::{InventoryStore, StoreConfig, StoreError};

mod commands;
mod render;

use commands::Commands;

#[derive(Parser)]
#[command(name = "freshmart")]
#[command(author, version, about = "FreshMart inventory manager", long_about = None)]
struct Cli {
    /// Inventory table (default: $FRESHMART_INVENTORY_CSV or ./inventory.csv)
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// Report destination (default: $FRESHMART_REPORT_CSV or ./inventory_report.csv)
    #[arg(long, global = true)]
    report: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl Cli {
    fn store_config(&self) -> StoreConfig {
        let mut config = StoreConfig::from_env();
        if let Some(path) = &self.table {
            config = config.with_table_path(path);
        }
        if let Some(path) = &self.report {
            config = config.with_report_path(path);
        }
        config
    }
}

fn main() -> ExitCode {
    freshmart_observability::init();

    let cli = Cli::parse();
    let config = cli.store_config();
    tracing::debug!(
        table = %config.table_path.display(),
        report = %config.report_path.display(),
        "opening inventory store"
    );
    let store = InventoryStore::open(&config);

    match commands::run(&store, cli.command, cli.format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<StoreError>() {
                Some(store_err) => eprintln!("error: {}", render::describe_error(store_err)),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
