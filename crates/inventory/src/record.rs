use core::fmt;
use core::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use freshmart_core::{DomainError, DomainResult, Entity, RecordId};

use crate::request::{RecordUpdate, supplied};

/// One stock-keeping unit.
///
/// Field order matches the persisted table's column order; the CSV codec
/// relies on it. Text fields are stored verbatim; numeric cells tolerate
/// surrounding whitespace left by hand edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    #[serde(deserialize_with = "trimmed_number")]
    pub quantity: i64,
    pub unit: String,
    #[serde(deserialize_with = "trimmed_number")]
    pub reorder_level: i64,
    #[serde(deserialize_with = "trimmed_number")]
    pub price_per_unit: f64,
}

impl Entity for InventoryRecord {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl InventoryRecord {
    /// `quantity * price_per_unit`. Derived, never stored.
    pub fn line_value(&self) -> f64 {
        self.quantity as f64 * self.price_per_unit
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }

    /// Add `delta` units. `delta` must be positive.
    pub fn restock(&mut self, delta: i64) -> DomainResult<()> {
        ensure_positive(delta)?;
        self.quantity = self
            .quantity
            .checked_add(delta)
            .ok_or(DomainError::InvalidAmount(delta))?;
        Ok(())
    }

    /// Remove `delta` units and return the revenue of the sale.
    ///
    /// Leaves the record untouched when there is not enough stock.
    pub fn sell(&mut self, delta: i64) -> DomainResult<f64> {
        ensure_positive(delta)?;
        if self.quantity < delta {
            return Err(DomainError::insufficient_stock(delta, self.quantity));
        }
        self.quantity -= delta;
        Ok(delta as f64 * self.price_per_unit)
    }

    /// Merge `update` into this record.
    ///
    /// Only fields present in the update change; blank text counts as absent.
    /// The merged record must still be valid; on failure nothing is modified.
    pub fn apply(&mut self, update: &RecordUpdate) -> DomainResult<()> {
        let mut next = self.clone();
        if let Some(name) = supplied(&update.name) {
            next.name = name.to_string();
        }
        if let Some(category) = supplied(&update.category) {
            next.category = category.to_string();
        }
        if let Some(quantity) = update.quantity {
            next.quantity = quantity;
        }
        if let Some(unit) = supplied(&update.unit) {
            next.unit = unit.to_string();
        }
        if let Some(reorder_level) = update.reorder_level {
            next.reorder_level = reorder_level;
        }
        if let Some(price) = update.price_per_unit {
            next.price_per_unit = price;
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Check the field-level invariants shared by create and edit.
    pub fn validate(&self) -> DomainResult<()> {
        for (field, value) in [
            ("id", self.id.as_str()),
            ("name", self.name.as_str()),
            ("category", self.category.as_str()),
            ("unit", self.unit.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!("{field} cannot be empty")));
            }
        }
        if self.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        if !self.price_per_unit.is_finite() || self.price_per_unit < 0.0 {
            return Err(DomainError::validation(
                "price_per_unit must be a non-negative number",
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberCell<T> {
    Number(T),
    Text(String),
}

/// Accept a native number, or text holding one with surrounding whitespace.
fn trimmed_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match NumberCell::<T>::deserialize(deserializer)? {
        NumberCell::Number(value) => Ok(value),
        NumberCell::Text(raw) => raw.trim().parse().map_err(de::Error::custom),
    }
}

/// Restock/sell amounts must be strictly positive.
pub(crate) fn ensure_positive(delta: i64) -> DomainResult<()> {
    if delta <= 0 {
        return Err(DomainError::InvalidAmount(delta));
    }
    Ok(())
}
