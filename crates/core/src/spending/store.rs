//! Persistence contract for spending entries.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::error::SpendingError;
use super::types::{Category, NewSpendingEntry, SpendingEntry};

/// Storage for spending entries.
///
/// Implementations assign `id` and `created_at` on insert and must make each
/// insert atomic. Any failure is reported as [`SpendingError::Storage`].
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Persists a validated entry and returns the stored record.
    async fn insert(&self, entry: NewSpendingEntry) -> Result<SpendingEntry, SpendingError>;

    /// Returns every persisted entry, in no particular order.
    async fn list_all(&self) -> Result<Vec<SpendingEntry>, SpendingError>;

    /// Sum of amounts for one category; zero when the category has no entries.
    ///
    /// A sum that does not fit in a `Decimal` is [`SpendingError::TotalOverflow`].
    async fn category_total(&self, category: Category) -> Result<Decimal, SpendingError>;
}
