//! Identity of stored records.

/// Something that keeps its identity while its fields change.
///
/// An inventory record implements this with `Id = RecordId`: restocking,
/// selling or editing a record changes its fields but never its id, and
/// the store finds the record to mutate by comparing ids alone
/// (`query::find_by_id` and `find_by_id_mut` match on [`Entity::id`]).
/// Two records with the same id are the same stock item even if every
/// other field differs. Ids are not required to be unique within a
/// table; lookups take the first match in storage order.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// True when `other` carries the same identifier.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
