//! Request values handed in by a presentation layer.
//!
//! The store never reads form widgets or prompts; a driver (dialog, CLI, web
//! form) collects input and passes one of these values in.

use serde::{Deserialize, Serialize};

use freshmart_core::{DomainError, DomainResult, RecordId, ValueObject};

use crate::record::InventoryRecord;

/// Request: add a new record.
///
/// Fields are raw text, exactly as typed by the user. [`NewRecord::validate`]
/// turns them into a typed [`InventoryRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit: String,
    pub reorder_level: String,
    pub price_per_unit: String,
}

impl ValueObject for NewRecord {}

impl NewRecord {
    /// Parse and validate every field.
    ///
    /// All fields are required. `quantity` and `reorder_level` must be
    /// integers, `price_per_unit` a non-negative number.
    pub fn validate(&self) -> DomainResult<InventoryRecord> {
        let id = required("id", &self.id)?;
        let name = required("name", &self.name)?;
        let category = required("category", &self.category)?;
        let quantity = required("quantity", &self.quantity)?;
        let unit = required("unit", &self.unit)?;
        let reorder_level = required("reorder_level", &self.reorder_level)?;
        let price_per_unit = required("price_per_unit", &self.price_per_unit)?;

        let record = InventoryRecord {
            id: RecordId::new(id)?,
            name: name.to_string(),
            category: category.to_string(),
            quantity: parse_integer("quantity", quantity)?,
            unit: unit.to_string(),
            reorder_level: parse_integer("reorder_level", reorder_level)?,
            price_per_unit: price_per_unit.parse::<f64>().map_err(|_| {
                DomainError::validation("price_per_unit must be a valid number")
            })?,
        };
        record.validate()?;
        Ok(record)
    }
}

/// Request: change some fields of an existing record.
///
/// `None` keeps the stored value, and so does blank text. `Some(v)` replaces
/// it otherwise, including `Some(0)` and `Some(0.0)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub unit: Option<String>,
    pub reorder_level: Option<i64>,
    pub price_per_unit: Option<f64>,
}

impl ValueObject for RecordUpdate {}

impl RecordUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        supplied(&self.name).is_none()
            && supplied(&self.category).is_none()
            && self.quantity.is_none()
            && supplied(&self.unit).is_none()
            && self.reorder_level.is_none()
            && self.price_per_unit.is_none()
    }
}

/// Trimmed text of an update field, or `None` when absent or blank.
pub(crate) fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(field: &str, value: &'a str) -> DomainResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

fn parse_integer(field: &str, value: &str) -> DomainResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| DomainError::validation(format!("{field} must be an integer")))
}
