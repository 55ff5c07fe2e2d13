//! Spending domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::EntryId;

use super::error::SpendingError;

/// Fixed classification of a spending entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Money spent on beer.
    Beer,
    /// Money spent on the gym.
    Gym,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 2] = [Self::Beer, Self::Gym];

    /// Returns the stored string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beer => "Beer",
            Self::Gym => "Gym",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = SpendingError;

    /// Parses a category. Matching is exact: `"beer"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beer" => Ok(Self::Beer),
            "Gym" => Ok(Self::Gym),
            _ => Err(SpendingError::InvalidCategory(s.to_string())),
        }
    }
}

/// A persisted spending entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingEntry {
    /// Store-assigned identifier.
    pub id: EntryId,
    /// Calendar date the expense occurred.
    pub date: NaiveDate,
    /// Beer or Gym.
    pub category: Category,
    /// Amount spent, always positive.
    pub amount: Decimal,
    /// Optional note. `None` and `Some("")` are different values.
    pub description: Option<String>,
    /// Store-assigned insertion instant.
    pub created_at: DateTime<Utc>,
}

/// Raw request to record a spending entry, before validation.
#[derive(Debug, Clone)]
pub struct CreateSpendingEntryInput {
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: String,
    /// Expected to be `"Beer"` or `"Gym"`.
    pub category: String,
    /// Expected to be positive.
    pub amount: Decimal,
    /// Optional note.
    pub description: Option<String>,
}

/// A validated entry ready for insertion.
///
/// Lacks `id` and `created_at`; the store assigns both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpendingEntry {
    /// Normalized calendar date.
    pub date: NaiveDate,
    /// Beer or Gym.
    pub category: Category,
    /// Positive amount.
    pub amount: Decimal,
    /// Optional note.
    pub description: Option<String>,
}

/// Label derived from comparing the Beer and Gym totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonalityType {
    /// More spent on beer than on the gym.
    #[serde(rename = "more an alcoholic")]
    MoreAnAlcoholic,
    /// More spent on the gym than on beer.
    #[serde(rename = "more a fitness enthusiast")]
    MoreAFitnessEnthusiast,
    /// Equal totals, including nothing spent at all.
    #[serde(rename = "balanced")]
    Balanced,
}

impl PersonalityType {
    /// Classifies spending. Beer wins first, then Gym, otherwise balanced.
    #[must_use]
    pub fn classify(beer_total: Decimal, gym_total: Decimal) -> Self {
        if beer_total > gym_total {
            Self::MoreAnAlcoholic
        } else if gym_total > beer_total {
            Self::MoreAFitnessEnthusiast
        } else {
            Self::Balanced
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MoreAnAlcoholic => "more an alcoholic",
            Self::MoreAFitnessEnthusiast => "more a fitness enthusiast",
            Self::Balanced => "balanced",
        }
    }
}

impl std::fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dashboard aggregate over all entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingSummary {
    /// Sum of Beer amounts.
    pub beer_total: Decimal,
    /// Sum of Gym amounts.
    pub gym_total: Decimal,
    /// `beer_total + gym_total`.
    pub total_spending: Decimal,
    /// Derived label.
    pub personality_type: PersonalityType,
}

impl SpendingSummary {
    /// Builds a summary from the two category totals.
    ///
    /// # Errors
    ///
    /// Returns `SpendingError::TotalOverflow` if the totals cannot be added.
    pub fn from_totals(beer_total: Decimal, gym_total: Decimal) -> Result<Self, SpendingError> {
        let total_spending = beer_total
            .checked_add(gym_total)
            .ok_or(SpendingError::TotalOverflow)?;

        Ok(Self {
            beer_total,
            gym_total,
            total_spending,
            personality_type: PersonalityType::classify(beer_total, gym_total),
        })
    }
}
