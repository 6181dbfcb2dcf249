//! Human-facing text for results and errors.
//!
//! The store never produces messages; everything a user reads is built here.

use std::path::Path;

use comfy_table::{CellAlignment, Table};

use freshmart_core::DomainError;
use freshmart_inventory::query::total_value;
use freshmart_inventory::{CategoryTotal, InventoryRecord, Restocked, Sale, StoreError};

pub fn records_table(records: &[InventoryRecord]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Category", "Qty", "Unit", "Reorder", "Price"]);
    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            r.name.clone(),
            r.category.clone(),
            r.quantity.to_string(),
            r.unit.clone(),
            r.reorder_level.to_string(),
            format!("{:.2}", r.price_per_unit),
        ]);
    }
    for column in [3, 5, 6] {
        if let Some(col) = table.column_mut(column) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    format!("{table}\nTotal Stock Value: {:.2}", total_value(records))
}

pub fn low_stock(records: &[InventoryRecord]) -> String {
    if records.is_empty() {
        return "All items are sufficiently stocked.".to_string();
    }
    records
        .iter()
        .map(|r| {
            format!(
                "{} - {} {} (Reorder: {})",
                r.name, r.quantity, r.unit, r.reorder_level
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Category totals as a table with a proportional text bar per category.
pub fn category_totals(totals: &[CategoryTotal]) -> String {
    if totals.is_empty() {
        return "No items to show in chart.".to_string();
    }
    const BAR_WIDTH: i128 = 40;
    let max = i128::from(totals.iter().map(|t| t.quantity).max().unwrap_or(0).max(1));

    let mut table = Table::new();
    table.set_header(vec!["Category", "Total Quantity", ""]);
    for t in totals {
        let len = (i128::from(t.quantity.max(0)) * BAR_WIDTH / max) as usize;
        table.add_row(vec![t.category.clone(), t.quantity.to_string(), "#".repeat(len)]);
    }
    table.to_string()
}

pub fn created() -> String {
    "Item added.".to_string()
}

pub fn restocked(r: &Restocked) -> String {
    format!(
        "{} added to {} (now {} {}).",
        r.added, r.record.name, r.record.quantity, r.record.unit
    )
}

pub fn sale(s: &Sale) -> String {
    format!(
        "Sold {} x {} for {:.2}",
        s.quantity, s.record.name, s.total_revenue
    )
}

pub fn edited(r: &InventoryRecord) -> String {
    format!("{} updated.", r.name)
}

pub fn exported(path: &Path) -> String {
    format!("Report saved as {}", path.display())
}

pub fn describe_error(err: &StoreError) -> String {
    match err {
        StoreError::Domain(domain) => match domain {
            DomainError::NotFound(_) => "Item not found.".to_string(),
            DomainError::InsufficientStock {
                requested,
                available,
            } => format!("Not enough stock (requested {requested}, on hand {available})."),
            DomainError::InvalidAmount(_) => {
                "Quantity must be a positive whole number.".to_string()
            }
            DomainError::Validation(msg) => format!("Invalid input: {msg}."),
            DomainError::Conflict(msg) => format!("Cannot add item: {msg}."),
        },
        StoreError::Parse { line, message } => {
            format!("The inventory file is malformed at line {line}: {message}")
        }
        StoreError::Csv(e) => format!("Could not read or write the inventory file: {e}"),
        StoreError::Io(e) => format!("Could not read or write the inventory file: {e}"),
    }
}
