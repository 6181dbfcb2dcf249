//! Stock report export.
//!
//! A report is a read-only snapshot of the record set with each line's value
//! computed. It is always written somewhere other than the inventory table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use freshmart_core::ValueObject;

use crate::error::StoreResult;
use crate::record::InventoryRecord;
use crate::table::write_csv;

/// Column header of the exported report, in order.
pub const REPORT_HEADER: [&str; 8] = [
    "ID",
    "Name",
    "Category",
    "Quantity",
    "Unit",
    "Reorder Level",
    "Price/Unit",
    "Total Value",
];

/// One exported report line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "Unit")]
    pub unit: String,
    #[serde(rename = "Reorder Level")]
    pub reorder_level: i64,
    #[serde(rename = "Price/Unit")]
    pub price_per_unit: f64,
    #[serde(rename = "Total Value")]
    pub line_value: f64,
}

impl ValueObject for ReportRow {}

impl From<&InventoryRecord> for ReportRow {
    fn from(record: &InventoryRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            category: record.category.clone(),
            quantity: record.quantity,
            unit: record.unit.clone(),
            reorder_level: record.reorder_level,
            price_per_unit: record.price_per_unit,
            line_value: record.line_value(),
        }
    }
}

/// One row per record, in record order.
pub fn build_report(records: &[InventoryRecord]) -> Vec<ReportRow> {
    records.iter().map(ReportRow::from).collect()
}

/// Write `rows` with the report header to `path`, replacing any prior report.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> StoreResult<()> {
    write_csv(path, &REPORT_HEADER, rows)
}
