//! In-memory entry store.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tally_shared::types::EntryId;
use tokio::sync::RwLock;

use super::error::SpendingError;
use super::store::EntryStore;
use super::types::{Category, NewSpendingEntry, SpendingEntry};

/// Entry store backed by a vector behind a lock.
///
/// Used in tests and for running the API without a database. Contents are
/// lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryEntryStore {
    entries: RwLock<Vec<SpendingEntry>>,
}

impl InMemoryEntryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn insert(&self, entry: NewSpendingEntry) -> Result<SpendingEntry, SpendingError> {
        let mut entries = self.entries.write().await;

        // Wall clocks can step backwards; created_at must not.
        let now = Utc::now();
        let created_at = entries
            .last()
            .map_or(now, |last| last.created_at.max(now));

        let stored = SpendingEntry {
            id: EntryId::new(),
            date: entry.date,
            category: entry.category,
            amount: entry.amount,
            description: entry.description,
            created_at,
        };
        entries.push(stored.clone());

        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<SpendingEntry>, SpendingError> {
        Ok(self.entries.read().await.clone())
    }

    async fn category_total(&self, category: Category) -> Result<Decimal, SpendingError> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|e| e.category == category)
            .try_fold(Decimal::ZERO, |total, e| total.checked_add(e.amount))
            .ok_or(SpendingError::TotalOverflow)
    }
}
