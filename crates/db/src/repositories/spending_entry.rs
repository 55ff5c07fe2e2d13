//! Spending entry repository backed by PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set, sea_query::Expr,
};
use tally_core::spending::{
    Category, EntryStore, NewSpendingEntry, SpendingEntry, SpendingError,
};
use tally_shared::types::EntryId;
use tracing::{debug, error};

use crate::entities::{sea_orm_active_enums::SpendingCategory, spending_entries};

/// Spending entry repository for insert and read operations.
#[derive(Debug, Clone)]
pub struct SpendingEntryRepository {
    db: DatabaseConnection,
}

impl SpendingEntryRepository {
    /// Creates a new spending entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts one entry. The id is generated here; `created_at` comes from
    /// the column default.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, entry: NewSpendingEntry) -> Result<spending_entries::Model, DbErr> {
        spending_entries::ActiveModel {
            id: Set(EntryId::new().into_inner()),
            date: Set(entry.date),
            category: Set(entry.category.into()),
            amount: Set(entry.amount),
            description: Set(entry.description),
            created_at: NotSet,
        }
        .insert(&self.db)
        .await
    }

    /// Fetches every entry, newest expense date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_all(&self) -> Result<Vec<spending_entries::Model>, DbErr> {
        spending_entries::Entity::find()
            .order_by_desc(spending_entries::Column::Date)
            .order_by_desc(spending_entries::Column::CreatedAt)
            .order_by_desc(spending_entries::Column::Id)
            .all(&self.db)
            .await
    }

    /// Fetches the entries of one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<spending_entries::Model>, DbErr> {
        spending_entries::Entity::find()
            .filter(spending_entries::Column::Category.eq(SpendingCategory::from(category)))
            .order_by_desc(spending_entries::Column::Date)
            .all(&self.db)
            .await
    }

    /// Sums amounts for one category in the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn sum_by_category(&self, category: Category) -> Result<Decimal, DbErr> {
        let total: Option<Option<Decimal>> = spending_entries::Entity::find()
            .select_only()
            .column_as(Expr::col(spending_entries::Column::Amount).sum(), "total")
            .filter(spending_entries::Column::Category.eq(SpendingCategory::from(category)))
            .into_tuple()
            .one(&self.db)
            .await?;

        // SUM over zero rows is NULL
        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }
}

/// Converts a stored row into the domain entry.
#[must_use]
pub fn to_domain(model: spending_entries::Model) -> SpendingEntry {
    SpendingEntry {
        id: EntryId::from_uuid(model.id),
        date: model.date,
        category: model.category.into(),
        amount: model.amount,
        description: model.description,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn storage_error(operation: &'static str, err: &DbErr) -> SpendingError {
    error!(error = %err, operation, "Spending entry query failed");
    SpendingError::Storage(err.to_string())
}

#[async_trait]
impl EntryStore for SpendingEntryRepository {
    async fn insert(&self, entry: NewSpendingEntry) -> Result<SpendingEntry, SpendingError> {
        let model = self
            .create(entry)
            .await
            .map_err(|e| storage_error("insert", &e))?;
        debug!(entry_id = %model.id, "Spending entry inserted");
        Ok(to_domain(model))
    }

    async fn list_all(&self) -> Result<Vec<SpendingEntry>, SpendingError> {
        let models = self
            .find_all()
            .await
            .map_err(|e| storage_error("list_all", &e))?;
        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn category_total(&self, category: Category) -> Result<Decimal, SpendingError> {
        self.sum_by_category(category)
            .await
            .map_err(|e| storage_error("category_total", &e))
    }
}
