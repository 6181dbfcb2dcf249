//! Read-only queries over a loaded record set.
//!
//! All functions are pure and preserve the input (storage) order.

use serde::{Deserialize, Serialize};

use freshmart_core::{DomainError, DomainResult, Entity, RecordId, ValueObject};

use crate::record::InventoryRecord;

/// Summed quantity for one category (one bar of the stock chart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub quantity: i64,
}

impl ValueObject for CategoryTotal {}

/// First record whose id equals `id`.
pub fn find_by_id<'a>(
    records: &'a [InventoryRecord],
    id: &RecordId,
) -> DomainResult<&'a InventoryRecord> {
    records
        .iter()
        .find(|r| r.id() == id)
        .ok_or_else(|| DomainError::not_found(id))
}

/// Mutable variant of [`find_by_id`], used by the store's mutations.
pub fn find_by_id_mut<'a>(
    records: &'a mut [InventoryRecord],
    id: &RecordId,
) -> DomainResult<&'a mut InventoryRecord> {
    records
        .iter_mut()
        .find(|r| r.id() == id)
        .ok_or_else(|| DomainError::not_found(id))
}

/// Records with `quantity <= reorder_level`. Empty means fully stocked.
pub fn low_stock(records: &[InventoryRecord]) -> Vec<InventoryRecord> {
    records.iter().filter(|r| r.is_low_stock()).cloned().collect()
}

/// Records whose category contains `needle`, ignoring case.
pub fn filter_by_category(records: &[InventoryRecord], needle: &str) -> Vec<InventoryRecord> {
    let needle = needle.to_lowercase();
    records
        .iter()
        .filter(|r| r.category.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Quantity summed per exact category string, in order of first appearance.
///
/// Sums saturate at `i64::MAX` instead of wrapping.
pub fn category_totals(records: &[InventoryRecord]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for record in records {
        match totals.iter_mut().find(|t| t.category == record.category) {
            Some(total) => total.quantity = total.quantity.saturating_add(record.quantity),
            None => totals.push(CategoryTotal {
                category: record.category.clone(),
                quantity: record.quantity,
            }),
        }
    }
    totals
}

/// Sum of line values across all records; `0.0` when empty.
pub fn total_value(records: &[InventoryRecord]) -> f64 {
    records.iter().map(InventoryRecord::line_value).sum()
}
