//! Spending service: create, list, and summarize entries.

use std::cmp::Reverse;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tally_shared::types::MAX_AMOUNT;

use super::error::SpendingError;
use super::store::EntryStore;
use super::types::{
    Category, CreateSpendingEntryInput, NewSpendingEntry, SpendingEntry, SpendingSummary,
};

/// Spending service for business logic.
pub struct SpendingService;

impl SpendingService {
    /// Validates and records a new entry.
    ///
    /// Nothing is written when validation fails. Store failures are returned
    /// unchanged; the entry is not retried.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad amount, category, or date, and
    /// `SpendingError::Storage` if the insert fails.
    pub async fn create_entry(
        store: &dyn EntryStore,
        input: CreateSpendingEntryInput,
    ) -> Result<SpendingEntry, SpendingError> {
        let entry = Self::validate_input(input)?;
        store.insert(entry).await
    }

    /// Lists every entry, most recent expense date first.
    ///
    /// # Errors
    ///
    /// Returns `SpendingError::Storage` if the store cannot be read.
    pub async fn list_entries(store: &dyn EntryStore) -> Result<Vec<SpendingEntry>, SpendingError> {
        let mut entries = store.list_all().await?;
        Self::sort_newest_first(&mut entries);
        Ok(entries)
    }

    /// Computes the Beer vs Gym dashboard from the current entries.
    ///
    /// # Errors
    ///
    /// Returns `SpendingError::Storage` if the store cannot be read and
    /// `SpendingError::TotalOverflow` if the totals cannot be added.
    pub async fn summary(store: &dyn EntryStore) -> Result<SpendingSummary, SpendingError> {
        let beer_total = store.category_total(Category::Beer).await?;
        let gym_total = store.category_total(Category::Gym).await?;
        SpendingSummary::from_totals(beer_total, gym_total)
    }

    /// Turns a raw request into an insertable entry.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: amount, then category, then date.
    pub fn validate_input(
        input: CreateSpendingEntryInput,
    ) -> Result<NewSpendingEntry, SpendingError> {
        let amount = Self::validate_amount(input.amount)?;
        let category = Category::from_str(&input.category)?;
        let date = Self::normalize_date(&input.date)?;

        Ok(NewSpendingEntry {
            date,
            category,
            amount,
            description: input.description,
        })
    }

    /// Checks that an amount is strictly positive and at most `MAX_AMOUNT`.
    ///
    /// # Errors
    ///
    /// Returns `SpendingError::NonPositiveAmount` for zero or negative values
    /// and `SpendingError::AmountTooLarge` above the ceiling.
    pub fn validate_amount(amount: Decimal) -> Result<Decimal, SpendingError> {
        if amount <= Decimal::ZERO {
            return Err(SpendingError::NonPositiveAmount(amount));
        }
        if amount > MAX_AMOUNT {
            return Err(SpendingError::AmountTooLarge(amount));
        }
        Ok(amount)
    }

    /// Reduces a date or timestamp string to a calendar date.
    ///
    /// `YYYY-MM-DD` is taken as-is. RFC 3339 timestamps are converted to UTC
    /// and the time of day is dropped.
    ///
    /// # Errors
    ///
    /// Returns `SpendingError::InvalidDate` if neither format matches.
    pub fn normalize_date(raw: &str) -> Result<NaiveDate, SpendingError> {
        let trimmed = raw.trim();

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(date);
        }

        DateTime::parse_from_rfc3339(trimmed)
            .map(|ts| ts.with_timezone(&Utc).date_naive())
            .map_err(|_| SpendingError::InvalidDate(raw.to_string()))
    }

    /// Sorts by `date` descending.
    ///
    /// Entries sharing a date are ordered by `created_at` descending, then by
    /// `id` descending, so the latest recorded entry of a day comes first.
    pub fn sort_newest_first(entries: &mut [SpendingEntry]) {
        entries.sort_by_key(|e| Reverse((e.date, e.created_at, e.id)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spending::InMemoryEntryStore;
    use crate::spending::PersonalityType;
    use rust_decimal_macros::dec;

    fn input(date: &str, category: &str, amount: Decimal) -> CreateSpendingEntryInput {
        CreateSpendingEntryInput {
            date: date.to_string(),
            category: category.to_string(),
            amount,
            description: None,
        }
    }

    #[test]
    fn test_normalize_date_plain() {
        assert_eq!(
            SpendingService::normalize_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_normalize_date_strips_time() {
        assert_eq!(
            SpendingService::normalize_date("2024-03-01T18:45:00Z").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        // 23:30 at UTC-05:00 is already the next day in UTC.
        assert_eq!(
            SpendingService::normalize_date("2024-03-01T23:30:00-05:00").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
        );
    }

    #[test]
    fn test_normalize_date_rejects_garbage() {
        for raw in ["", "yesterday", "2024-13-01", "01/03/2024"] {
            assert!(
                matches!(
                    SpendingService::normalize_date(raw),
                    Err(SpendingError::InvalidDate(_))
                ),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(SpendingService::validate_amount(dec!(0.01)).unwrap(), dec!(0.01));
        assert!(SpendingService::validate_amount(dec!(0)).is_err());
        assert!(SpendingService::validate_amount(dec!(-5)).is_err());
    }

    #[test]
    fn test_validate_amount_ceiling() {
        assert_eq!(
            SpendingService::validate_amount(MAX_AMOUNT).unwrap(),
            MAX_AMOUNT
        );
        assert!(matches!(
            SpendingService::validate_amount(dec!(1000000000000)),
            Err(SpendingError::AmountTooLarge(_))
        ));
        assert!(matches!(
            SpendingService::validate_amount(Decimal::MAX),
            Err(SpendingError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_validate_input_keeps_empty_description() {
        let mut raw = input("2024-01-01", "Gym", dec!(20));
        raw.description = Some(String::new());

        let entry = SpendingService::validate_input(raw).unwrap();
        assert_eq!(entry.description, Some(String::new()));
    }

    #[tokio::test]
    async fn test_create_entry_rejections_write_nothing() {
        let store = InMemoryEntryStore::new();

        let zero = SpendingService::create_entry(&store, input("2024-01-01", "Beer", dec!(0))).await;
        assert!(matches!(zero, Err(SpendingError::NonPositiveAmount(_))));

        let negative =
            SpendingService::create_entry(&store, input("2024-01-01", "Beer", dec!(-1))).await;
        assert!(matches!(negative, Err(SpendingError::NonPositiveAmount(_))));

        let category =
            SpendingService::create_entry(&store, input("2024-01-01", "Wine", dec!(3))).await;
        assert!(matches!(category, Err(SpendingError::InvalidCategory(_))));

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_entry_returns_stored_record() {
        let store = InMemoryEntryStore::new();
        let mut raw = input("2024-02-10T09:00:00Z", "Beer", dec!(6.40));
        raw.description = Some("Friday pint".to_string());

        let entry = SpendingService::create_entry(&store, raw).await.unwrap();

        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!(entry.category, Category::Beer);
        assert_eq!(entry.amount, dec!(6.40));
        assert_eq!(entry.description.as_deref(), Some("Friday pint"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_entries_newest_date_first() {
        let store = InMemoryEntryStore::new();
        SpendingService::create_entry(&store, input("2024-01-01", "Beer", dec!(1)))
            .await
            .unwrap();
        SpendingService::create_entry(&store, input("2024-03-01", "Gym", dec!(2)))
            .await
            .unwrap();

        let entries = SpendingService::list_entries(&store).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(entries[1].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[tokio::test]
    async fn test_list_entries_same_date_latest_recorded_first() {
        let store = InMemoryEntryStore::new();
        let first = SpendingService::create_entry(&store, input("2024-05-05", "Beer", dec!(1)))
            .await
            .unwrap();
        let second = SpendingService::create_entry(&store, input("2024-05-05", "Gym", dec!(2)))
            .await
            .unwrap();

        let entries = SpendingService::list_entries(&store).await.unwrap();
        let expected = if (second.created_at, second.id) > (first.created_at, first.id) {
            [second.id, first.id]
        } else {
            [first.id, second.id]
        };
        assert_eq!([entries[0].id, entries[1].id], expected);
    }

    #[tokio::test]
    async fn test_list_entries_empty() {
        let store = InMemoryEntryStore::new();
        assert!(SpendingService::list_entries(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_summary_no_entries_is_balanced() {
        let store = InMemoryEntryStore::new();
        let summary = SpendingService::summary(&store).await.unwrap();

        assert_eq!(summary.beer_total, Decimal::ZERO);
        assert_eq!(summary.gym_total, Decimal::ZERO);
        assert_eq!(summary.total_spending, Decimal::ZERO);
        assert_eq!(summary.personality_type, PersonalityType::Balanced);
    }

    #[tokio::test]
    async fn test_summary_beer_heavy() {
        let store = InMemoryEntryStore::new();
        SpendingService::create_entry(&store, input("2024-01-01", "Beer", dec!(10.00)))
            .await
            .unwrap();
        SpendingService::create_entry(&store, input("2024-01-02", "Gym", dec!(5.00)))
            .await
            .unwrap();

        let summary = SpendingService::summary(&store).await.unwrap();
        assert_eq!(summary.beer_total, dec!(10));
        assert_eq!(summary.gym_total, dec!(5));
        assert_eq!(summary.total_spending, dec!(15));
        assert_eq!(summary.personality_type, PersonalityType::MoreAnAlcoholic);
    }

    #[tokio::test]
    async fn test_summary_equal_totals_balanced() {
        let store = InMemoryEntryStore::new();
        SpendingService::create_entry(&store, input("2024-01-01", "Beer", dec!(7.50)))
            .await
            .unwrap();
        SpendingService::create_entry(&store, input("2024-01-01", "Gym", dec!(7.50)))
            .await
            .unwrap();

        let summary = SpendingService::summary(&store).await.unwrap();
        assert_eq!(summary.total_spending, dec!(15));
        assert_eq!(summary.personality_type, PersonalityType::Balanced);
    }

    #[tokio::test]
    async fn test_summary_is_repeatable() {
        let store = InMemoryEntryStore::new();
        SpendingService::create_entry(&store, input("2024-01-01", "Gym", dec!(42)))
            .await
            .unwrap();

        let first = SpendingService::summary(&store).await.unwrap();
        let second = SpendingService::summary(&store).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.personality_type, PersonalityType::MoreAFitnessEnthusiast);
    }
}
