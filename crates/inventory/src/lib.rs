//! Inventory domain module.
//!
//! Owns the record set of a single-user stock tracker: the record model, the
//! request values a presentation layer hands in, pure queries over a loaded
//! set, the CSV-backed table and the [`InventoryStore`] that ties them
//! together with load → modify → save semantics.

pub mod config;
pub mod error;
pub mod query;
pub mod record;
pub mod report;
pub mod request;
pub mod store;
pub mod table;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use query::CategoryTotal;
pub use record::InventoryRecord;
pub use report::ReportRow;
pub use request::{NewRecord, RecordUpdate};
pub use store::{InventoryStore, Restocked, Sale};
pub use table::{CsvTable, InMemoryTable, RecordTable};
