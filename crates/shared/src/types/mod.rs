//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::EntryId;
pub use money::{MAX_AMOUNT, format_amount};
