//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two with the same attribute values are
/// equal. In this workspace they are the derived, read-only values computed
/// from a record set (report rows, category buckets) and the request values
/// handed in by a presentation layer.
///
/// - **Value Object**: `CategoryTotal { category: "Grain", quantity: 80 }`
/// - **Entity**: `InventoryRecord { id: RecordId("A1"), .. }`
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
