//! Persisted record tables.
//!
//! The store talks to storage only through [`RecordTable`]: load the whole
//! set, save the whole set. There is no incremental persistence.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::record::InventoryRecord;

/// Canonical column header of the inventory table, in order.
pub const TABLE_HEADER: [&str; 7] = [
    "id",
    "name",
    "category",
    "quantity",
    "unit",
    "reorder_level",
    "price_per_unit",
];

/// Record table abstraction.
pub trait RecordTable: Send + Sync {
    /// Load every record, in storage order.
    fn load(&self) -> StoreResult<Vec<InventoryRecord>>;

    /// Replace the whole table with `records`, in the given order.
    fn save(&self, records: &[InventoryRecord]) -> StoreResult<()>;

    /// Filesystem location backing this table, if any.
    fn location(&self) -> Option<&Path> {
        None
    }
}

/// CSV file table (the canonical persisted format).
#[derive(Debug, Clone)]
pub struct CsvTable {
    path: PathBuf,
}

impl CsvTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordTable for CsvTable {
    fn load(&self) -> StoreResult<Vec<InventoryRecord>> {
        if !self.path.try_exists()? {
            tracing::info!(path = %self.path.display(), "inventory table missing; initializing");
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new().from_path(&self.path)?;

        let mut records = Vec::new();
        for row in reader.deserialize::<InventoryRecord>() {
            records.push(row.map_err(StoreError::from_read)?);
        }

        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded inventory table");
        Ok(records)
    }

    fn save(&self, records: &[InventoryRecord]) -> StoreResult<()> {
        write_csv(&self.path, &TABLE_HEADER, records)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "saved inventory table");
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// In-memory table (no persistence). Useful for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryTable {
    records: RwLock<Vec<InventoryRecord>>,
}

impl InMemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<InventoryRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl RecordTable for InMemoryTable {
    fn load(&self) -> StoreResult<Vec<InventoryRecord>> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records.clone())
    }

    fn save(&self, records: &[InventoryRecord]) -> StoreResult<()> {
        let mut stored = self.records.write().unwrap_or_else(PoisonError::into_inner);
        *stored = records.to_vec();
        Ok(())
    }
}

/// Write `header` and `rows` to `path`.
///
/// Rows go to a sibling staging file which is then renamed over `path`, so a
/// failed write never truncates an existing file.
pub(crate) fn write_csv<I, S>(path: &Path, header: &[&str], rows: I) -> StoreResult<()>
where
    I: IntoIterator<Item = S>,
    S: Serialize,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let staging = staging_path(path);
    let written = (|| -> StoreResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&staging)?;
        writer.write_record(header)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    })();

    if let Err(err) = written {
        let _ = fs::remove_file(&staging);
        return Err(err);
    }
    fs::rename(&staging, path)?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
