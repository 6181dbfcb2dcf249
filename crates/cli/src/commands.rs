//! Subcommands and their handlers.

use clap::{Args, Subcommand};
use serde::Serialize;

use freshmart_core::RecordId;
use freshmart_inventory::{InventoryStore, NewRecord, RecordTable, RecordUpdate};

use crate::OutputFormat;
use crate::render;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show all records, or those whose category matches
    List {
        /// Case-insensitive category substring
        #[arg(long)]
        category: Option<String>,
    },

    /// Add a new record
    Add(AddArgs),

    /// Add units to a record
    Restock {
        id: String,
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
    },

    /// Sell units of a record
    Sell {
        id: String,
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
    },

    /// Change fields of a record (omitted fields keep their value)
    Edit(EditArgs),

    /// Show records at or below their reorder level
    LowStock,

    /// Show total quantity per category
    Totals,

    /// Write the stock report file
    Export,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub category: String,
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: String,
    #[arg(long)]
    pub unit: String,
    #[arg(long, allow_hyphen_values = true)]
    pub reorder_level: String,
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,
}

impl From<AddArgs> for NewRecord {
    fn from(args: AddArgs) -> Self {
        NewRecord {
            id: args.id,
            name: args.name,
            category: args.category,
            quantity: args.quantity,
            unit: args.unit,
            reorder_level: args.reorder_level,
            price_per_unit: args.price,
        }
    }
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: Option<i64>,
    #[arg(long)]
    pub unit: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub reorder_level: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<f64>,
}

impl From<EditArgs> for RecordUpdate {
    fn from(args: EditArgs) -> Self {
        RecordUpdate {
            name: args.name,
            category: args.category,
            quantity: args.quantity,
            unit: args.unit,
            reorder_level: args.reorder_level,
            price_per_unit: args.price,
        }
    }
}

/// Execute one command against `store` and print its result.
pub fn run<T: RecordTable>(
    store: &InventoryStore<T>,
    command: Commands,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match command {
        Commands::List { category } => {
            let records = match category.as_deref() {
                Some(needle) => store.filter_by_category(needle)?,
                None => store.load()?,
            };
            emit(format, &records, |r| render::records_table(r))
        }
        Commands::Add(args) => {
            let record = store.create(&NewRecord::from(args))?;
            emit(format, &record, |_| render::created())
        }
        Commands::Restock { id, quantity } => {
            let restocked = store.restock(&RecordId::new(id)?, quantity)?;
            emit(format, &restocked, render::restocked)
        }
        Commands::Sell { id, quantity } => {
            let sale = store.sell(&RecordId::new(id)?, quantity)?;
            emit(format, &sale, render::sale)
        }
        Commands::Edit(args) => {
            let id = RecordId::new(&args.id)?;
            let record = store.edit(&id, &RecordUpdate::from(args))?;
            emit(format, &record, render::edited)
        }
        Commands::LowStock => {
            let records = store.low_stock()?;
            emit(format, &records, |r| render::low_stock(r))
        }
        Commands::Totals => {
            let totals = store.category_totals()?;
            emit(format, &totals, |t| render::category_totals(t))
        }
        Commands::Export => {
            let rows = store.export_report()?;
            let path = store.report_path().to_path_buf();
            emit(format, &rows, |_| render::exported(&path))
        }
    }
}

fn emit<V: Serialize>(
    format: OutputFormat,
    value: &V,
    pretty: impl FnOnce(&V) -> String,
) -> anyhow::Result<()> {
    let out = match format {
        OutputFormat::Pretty => pretty(value),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    };
    println!("{out}");
    Ok(())
}
