//! Property-based tests for spending module.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::{EntryId, MAX_AMOUNT};

use super::service::SpendingService;
use super::types::{Category, PersonalityType, SpendingEntry, SpendingSummary};

/// Amounts from 0.01 to 1,000,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Totals from 0.00 to 1,000,000.00.
fn total_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![Just(Category::Beer), Just(Category::Gym)]
}

fn entry_strategy() -> impl Strategy<Value = SpendingEntry> {
    (0i64..3650, 0i64..86_400, category_strategy(), positive_amount()).prop_map(
        |(day, second, category, amount)| {
            let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();
            let created_base = DateTime::<Utc>::UNIX_EPOCH + Duration::days(19_000);
            SpendingEntry {
                id: EntryId::new(),
                date: base + Duration::days(day),
                category,
                amount,
                description: None,
                created_at: created_base + Duration::seconds(second),
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Listing order never lets an older expense date precede a newer one.
    #[test]
    fn prop_sorted_by_date_desc(mut entries in prop::collection::vec(entry_strategy(), 0..40)) {
        SpendingService::sort_newest_first(&mut entries);

        for pair in entries.windows(2) {
            prop_assert!(pair[0].date >= pair[1].date);
            if pair[0].date == pair[1].date {
                prop_assert!(pair[0].created_at >= pair[1].created_at);
            }
        }
    }

    /// Sorting is deterministic: the same input always yields the same order.
    #[test]
    fn prop_sort_is_deterministic(entries in prop::collection::vec(entry_strategy(), 0..40)) {
        let mut a = entries.clone();
        let mut b: Vec<_> = entries.into_iter().rev().collect();
        SpendingService::sort_newest_first(&mut a);
        SpendingService::sort_newest_first(&mut b);

        let ids_a: Vec<_> = a.iter().map(|e| e.id).collect();
        let ids_b: Vec<_> = b.iter().map(|e| e.id).collect();
        prop_assert_eq!(ids_a, ids_b);
    }

    /// total_spending is always the sum of the two category totals.
    #[test]
    fn prop_total_is_sum(beer in total_amount(), gym in total_amount()) {
        let summary = SpendingSummary::from_totals(beer, gym).unwrap();
        prop_assert_eq!(summary.total_spending, summary.beer_total + summary.gym_total);
    }

    /// The label follows the three-way comparison exactly.
    #[test]
    fn prop_classification(beer in total_amount(), gym in total_amount()) {
        let expected = match beer.cmp(&gym) {
            std::cmp::Ordering::Greater => PersonalityType::MoreAnAlcoholic,
            std::cmp::Ordering::Less => PersonalityType::MoreAFitnessEnthusiast,
            std::cmp::Ordering::Equal => PersonalityType::Balanced,
        };
        prop_assert_eq!(PersonalityType::classify(beer, gym), expected);
    }

    /// Any strictly positive amount passes validation unchanged.
    #[test]
    fn prop_positive_amount_accepted(amount in positive_amount()) {
        prop_assert_eq!(SpendingService::validate_amount(amount).ok(), Some(amount));
    }

    /// Zero and negative amounts are always rejected.
    #[test]
    fn prop_non_positive_amount_rejected(cents in -100_000_000i64..=0) {
        let amount = Decimal::new(cents, 2);
        prop_assert!(SpendingService::validate_amount(amount).is_err());
    }

    /// Amounts above the ceiling are always rejected.
    #[test]
    fn prop_oversized_amount_rejected(extra in positive_amount()) {
        let amount = MAX_AMOUNT + extra;
        prop_assert!(SpendingService::validate_amount(amount).is_err());
    }

    /// Every valid calendar date survives normalization unchanged.
    #[test]
    fn prop_date_roundtrip(day in 0i64..20_000) {
        let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default() + Duration::days(day);
        let raw = date.format("%Y-%m-%d").to_string();
        prop_assert_eq!(SpendingService::normalize_date(&raw).ok(), Some(date));
    }
}
