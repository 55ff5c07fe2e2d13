//! Spending entries migration.
//!
//! Creates the single table holding Beer and Gym spending entries.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(SPENDING_ENTRIES_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS spending_entries CASCADE;")
            .await?;
        Ok(())
    }
}

const SPENDING_ENTRIES_SQL: &str = r"
-- One row per recorded expense; rows are never updated or deleted
CREATE TABLE spending_entries (
    id UUID PRIMARY KEY,
    date DATE NOT NULL,
    category VARCHAR(16) NOT NULL,
    amount NUMERIC NOT NULL,
    description TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_spending_category CHECK (category IN ('Beer', 'Gym')),
    CONSTRAINT chk_spending_amount_positive CHECK (amount > 0),
    CONSTRAINT chk_spending_amount_max CHECK (amount <= 999999999999.99)
);

-- Listing order: newest expense date first, latest recorded first within a day
CREATE INDEX idx_spending_entries_date ON spending_entries(date DESC, created_at DESC, id DESC);

-- Per-category totals
CREATE INDEX idx_spending_entries_category ON spending_entries(category);
";
