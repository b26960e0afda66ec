//! Domain Layer - Core Entity Trait
//!
//! Every record held in a store carries a unique identifier.

/// Core trait for all domain records
pub trait Entity: Sized + Clone {
    /// The type of the record's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the record's unique identifier
    fn id(&self) -> Self::Id;
}

/// Remove every record with the given id, returning how many were dropped
pub fn remove_by_id<T: Entity>(records: &mut Vec<T>, id: T::Id) -> usize {
    let before = records.len();
    records.retain(|r| r.id() != id);
    before - records.len()
}

/// Insert at the front, evicting any record that already uses the id
pub fn prepend_unique<T: Entity>(records: &mut Vec<T>, record: T) {
    remove_by_id(records, record.id());
    records.insert(0, record);
}

/// Keep the first occurrence of each id
pub fn dedup_by_id<T: Entity>(records: Vec<T>) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    records.into_iter().filter(|r| seen.insert(r.id())).collect()
}
