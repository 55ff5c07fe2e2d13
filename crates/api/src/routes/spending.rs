//! Spending entry and summary routes.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tally_core::spending::{
    CreateSpendingEntryInput, SpendingEntry, SpendingError, SpendingService, SpendingSummary,
};
use tally_shared::types::format_amount;
use tracing::info;
use uuid::Uuid;

use crate::{AppState, error::spending_error_response};

/// Creates the spending routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/spending-entries",
            get(list_spending_entries).post(create_spending_entry),
        )
        .route("/spending-summary", get(get_spending_summary))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for recording a spending entry.
///
/// Every field is read as raw JSON so that missing, `null` or mistyped values
/// surface as validation errors instead of body rejections.
#[derive(Debug, Deserialize)]
pub struct CreateSpendingEntryRequest {
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(default)]
    pub date: Option<Value>,
    /// `"Beer"` or `"Gym"`.
    #[serde(default)]
    pub category: Option<Value>,
    /// Must be a JSON number greater than zero.
    #[serde(default)]
    pub amount: Option<Value>,
    /// Optional note; `null` and `""` are kept distinct.
    #[serde(default)]
    pub description: Option<Value>,
}

impl CreateSpendingEntryRequest {
    /// Checks the JSON shape of each field, in validation order.
    fn into_input(self) -> Result<CreateSpendingEntryInput, SpendingError> {
        let amount = SpendingService::validate_amount(parse_amount(self.amount.as_ref())?)?;
        let category = text_field(self.category).map_err(SpendingError::InvalidCategory)?;
        let date = text_field(self.date).map_err(SpendingError::InvalidDate)?;
        let description = match self.description {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text),
            Some(_) => return Err(SpendingError::InvalidDescription),
        };

        Ok(CreateSpendingEntryInput {
            date,
            category,
            amount,
            description,
        })
    }
}

/// A spending entry as returned by the API.
#[derive(Debug, Serialize)]
pub struct SpendingEntryResponse {
    /// Entry ID.
    pub id: Uuid,
    /// Expense date (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Beer or Gym.
    pub category: &'static str,
    /// Amount spent.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Optional note.
    pub description: Option<String>,
    /// When the entry was recorded.
    pub created_at: DateTime<Utc>,
}

impl From<SpendingEntry> for SpendingEntryResponse {
    fn from(entry: SpendingEntry) -> Self {
        Self {
            id: entry.id.into_inner(),
            date: entry.date,
            category: entry.category.as_str(),
            amount: entry.amount,
            description: entry.description,
            created_at: entry.created_at,
        }
    }
}

/// The Beer vs Gym dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingSummaryResponse {
    /// Total spent on beer.
    #[serde(with = "rust_decimal::serde::float")]
    pub beer_total: Decimal,
    /// Total spent on the gym.
    #[serde(with = "rust_decimal::serde::float")]
    pub gym_total: Decimal,
    /// Sum of both totals.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spending: Decimal,
    /// Derived label.
    pub personality_type: &'static str,
}

impl From<SpendingSummary> for SpendingSummaryResponse {
    fn from(summary: SpendingSummary) -> Self {
        Self {
            beer_total: summary.beer_total,
            gym_total: summary.gym_total,
            total_spending: summary.total_spending,
            personality_type: summary.personality_type.as_str(),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Reads a JSON number as an exact decimal.
///
/// The number's textual form is parsed, so `7.5` becomes exactly `7.5`.
/// Strings, booleans, `null` and missing values are rejected.
fn parse_amount(value: Option<&Value>) -> Result<Decimal, SpendingError> {
    let Some(Value::Number(number)) = value else {
        return Err(SpendingError::AmountNotNumeric);
    };

    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| SpendingError::AmountNotNumeric)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// Reads a required string field. Anything else is returned as its JSON text
/// for the error message.
fn text_field(value: Option<Value>) -> Result<String, String> {
    match value {
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(other.to_string()),
        None => Err(Value::Null.to_string()),
    }
}

/// POST `/spending-entries` - Record a spending entry.
async fn create_spending_entry(
    State(state): State<AppState>,
    Json(payload): Json<CreateSpendingEntryRequest>,
) -> impl IntoResponse {
    let input = match payload.into_input() {
        Ok(input) => input,
        Err(e) => return spending_error_response(e),
    };

    match SpendingService::create_entry(state.entries.as_ref(), input).await {
        Ok(entry) => {
            info!(
                entry_id = %entry.id,
                category = %entry.category,
                amount = %format_amount(entry.amount),
                date = %entry.date,
                "Spending entry created"
            );
            (
                StatusCode::CREATED,
                Json(SpendingEntryResponse::from(entry)),
            )
                .into_response()
        }
        Err(e) => spending_error_response(e),
    }
}

/// GET `/spending-entries` - List all entries, most recent date first.
async fn list_spending_entries(State(state): State<AppState>) -> impl IntoResponse {
    match SpendingService::list_entries(state.entries.as_ref()).await {
        Ok(entries) => {
            let response: Vec<SpendingEntryResponse> =
                entries.into_iter().map(SpendingEntryResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => spending_error_response(e),
    }
}

/// GET `/spending-summary` - Per-category totals and personality type.
async fn get_spending_summary(State(state): State<AppState>) -> impl IntoResponse {
    match SpendingService::summary(state.entries.as_ref()).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(SpendingSummaryResponse::from(summary)),
        )
            .into_response(),
        Err(e) => spending_error_response(e),
    }
}
