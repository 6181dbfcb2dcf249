//! Inventory store: the single authority over the record set.
//!
//! Every operation loads the table fresh. Mutations then modify the loaded set
//! and save it back in full; on any failure nothing is saved.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use freshmart_core::{DomainError, DomainResult, Entity, RecordId};

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::query::{self, CategoryTotal};
use crate::record::{InventoryRecord, ensure_positive};
use crate::report::{self, ReportRow};
use crate::request::{NewRecord, RecordUpdate};
use crate::table::{CsvTable, RecordTable};

/// Outcome of a restock, for confirmation messaging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restocked {
    pub record: InventoryRecord,
    pub added: i64,
}

/// Outcome of a sale, for confirmation messaging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub record: InventoryRecord,
    pub quantity: i64,
    pub total_revenue: f64,
}

/// Inventory store over a [`RecordTable`].
#[derive(Debug)]
pub struct InventoryStore<T = CsvTable> {
    table: T,
    report_path: PathBuf,
}

impl InventoryStore<CsvTable> {
    /// Store backed by the CSV table named in `config`.
    pub fn open(config: &StoreConfig) -> Self {
        Self::new(CsvTable::new(&config.table_path), &config.report_path)
    }
}

impl<T: RecordTable> InventoryStore<T> {
    pub fn new(table: T, report_path: impl Into<PathBuf>) -> Self {
        Self {
            table,
            report_path: report_path.into(),
        }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    /// All records, in storage order.
    pub fn load(&self) -> StoreResult<Vec<InventoryRecord>> {
        self.table.load()
    }

    /// Replace the persisted record set.
    pub fn save(&self, records: &[InventoryRecord]) -> StoreResult<()> {
        self.table.save(records)
    }

    /// Validate `request` and append the new record.
    ///
    /// Ids must be unique: a request reusing an existing id is rejected with
    /// [`DomainError::Conflict`].
    pub fn create(&self, request: &NewRecord) -> StoreResult<InventoryRecord> {
        let record = request.validate()?;

        let mut records = self.load()?;
        if records.iter().any(|r| r.same_identity(&record)) {
            let msg = format!("record {} already exists", record.id);
            return Err(DomainError::conflict(msg).into());
        }
        records.push(record.clone());
        self.save(&records)?;

        tracing::info!(id = %record.id, quantity = record.quantity, "created inventory record");
        Ok(record)
    }

    pub fn find(&self, id: &RecordId) -> StoreResult<InventoryRecord> {
        let records = self.load()?;
        Ok(query::find_by_id(&records, id)?.clone())
    }

    /// Add `delta` (> 0) units to a record.
    pub fn restock(&self, id: &RecordId, delta: i64) -> StoreResult<Restocked> {
        ensure_positive(delta)?;
        let (record, ()) = self.mutate(id, |record| record.restock(delta))?;

        tracing::info!(id = %id, delta, quantity = record.quantity, "restocked inventory record");
        Ok(Restocked {
            record,
            added: delta,
        })
    }

    /// Sell `delta` (> 0) units of a record.
    ///
    /// Fails with [`DomainError::InsufficientStock`] when fewer than `delta`
    /// units are on hand; the table is left untouched in that case.
    pub fn sell(&self, id: &RecordId, delta: i64) -> StoreResult<Sale> {
        ensure_positive(delta)?;
        let (record, total_revenue) = self
            .mutate(id, |record| record.sell(delta))
            .inspect_err(|err| {
                if let Some(DomainError::InsufficientStock {
                    requested,
                    available,
                }) = err.as_domain()
                {
                    tracing::warn!(id = %id, requested, available, "sale rejected: insufficient stock");
                }
            })?;

        tracing::info!(
            id = %id,
            delta,
            quantity = record.quantity,
            total_revenue,
            "sold from inventory record"
        );
        Ok(Sale {
            record,
            quantity: delta,
            total_revenue,
        })
    }

    /// Apply `update` to a record and persist the merged result.
    ///
    /// An empty update saves nothing and returns the record as stored.
    pub fn edit(&self, id: &RecordId, update: &RecordUpdate) -> StoreResult<InventoryRecord> {
        if update.is_empty() {
            return self.find(id);
        }
        let (record, ()) = self.mutate(id, |record| record.apply(update))?;

        tracing::info!(id = %id, "edited inventory record");
        Ok(record)
    }

    pub fn low_stock(&self) -> StoreResult<Vec<InventoryRecord>> {
        Ok(query::low_stock(&self.load()?))
    }

    pub fn filter_by_category(&self, needle: &str) -> StoreResult<Vec<InventoryRecord>> {
        Ok(query::filter_by_category(&self.load()?, needle))
    }

    pub fn category_totals(&self) -> StoreResult<Vec<CategoryTotal>> {
        Ok(query::category_totals(&self.load()?))
    }

    pub fn total_value(&self) -> StoreResult<f64> {
        Ok(query::total_value(&self.load()?))
    }

    /// Write the stock report to the configured report path and return its rows.
    ///
    /// Refuses to run when the report path is the inventory table itself.
    pub fn export_report(&self) -> StoreResult<Vec<ReportRow>> {
        if let Some(table_path) = self.table.location() {
            if same_path(table_path, &self.report_path) {
                return Err(DomainError::validation(
                    "report path must differ from the inventory table path",
                )
                .into());
            }
        }

        let rows = report::build_report(&self.load()?);
        report::write_report(&self.report_path, &rows)?;

        tracing::info!(
            path = %self.report_path.display(),
            rows = rows.len(),
            "exported inventory report"
        );
        Ok(rows)
    }

    /// Load, modify one record, save. Nothing is saved if `change` fails.
    fn mutate<R>(
        &self,
        id: &RecordId,
        change: impl FnOnce(&mut InventoryRecord) -> DomainResult<R>,
    ) -> StoreResult<(InventoryRecord, R)> {
        let mut records = self.load()?;
        let record = query::find_by_id_mut(&mut records, id)?;
        let outcome = change(&mut *record)?;
        let updated = record.clone();
        self.save(&records)?;
        Ok((updated, outcome))
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
