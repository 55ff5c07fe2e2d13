//! Entity re-exports.

pub use super::spending_entries::Entity as SpendingEntries;
