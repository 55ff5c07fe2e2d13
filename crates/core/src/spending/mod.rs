//! Spending entries and the Beer vs Gym dashboard.
//!
//! This module provides:
//! - Entry and summary domain types
//! - Draft validation and date normalization
//! - The `EntryStore` persistence contract and an in-memory implementation
//! - `SpendingService`, the create/list/summary operations

pub mod error;
pub mod memory;
pub mod service;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::SpendingError;
pub use memory::InMemoryEntryStore;
pub use service::SpendingService;
pub use store::EntryStore;
pub use types::{
    Category, CreateSpendingEntryInput, NewSpendingEntry, PersonalityType, SpendingEntry,
    SpendingSummary,
};
