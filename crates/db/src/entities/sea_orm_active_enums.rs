//! `SeaORM` active enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use tally_core::spending::Category;

/// Stored value of the `category` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum SpendingCategory {
    /// `'Beer'`
    #[sea_orm(string_value = "Beer")]
    Beer,
    /// `'Gym'`
    #[sea_orm(string_value = "Gym")]
    Gym,
}

impl From<Category> for SpendingCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::Beer => Self::Beer,
            Category::Gym => Self::Gym,
        }
    }
}

impl From<SpendingCategory> for Category {
    fn from(category: SpendingCategory) -> Self {
        match category {
            SpendingCategory::Beer => Self::Beer,
            SpendingCategory::Gym => Self::Gym,
        }
    }
}
