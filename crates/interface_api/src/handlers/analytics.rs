//! Analytics handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};

use core_kernel::CustomerNumber;
use domain_analytics::{CustomerAnalytics, CustomerSnapshot};

use crate::dto::analytics::{AnalyticsResponse, AsOfQuery};
use crate::i18n::ReasonFormatter;
use crate::{error::ApiError, AppState};

/// Analytics for a stored customer
pub async fn customer_analytics(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AsOfQuery>,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let now = reference_date(&state, &query);
    let analytics = state
        .service
        .customer_analytics(&CustomerNumber::new(id), now)
        .await?;
    respond(analytics)
}

/// Analytics for a snapshot posted in the body
pub async fn analyze_snapshot(
    State(state): State<AppState>,
    Query(query): Query<AsOfQuery>,
    Json(snapshot): Json<CustomerSnapshot>,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let now = reference_date(&state, &query);
    respond(state.service.analyze_snapshot(&snapshot, now))
}

fn reference_date(state: &AppState, query: &AsOfQuery) -> NaiveDate {
    query
        .as_of
        .unwrap_or_else(|| state.config.timezone.today(Utc::now()))
}

fn respond(analytics: CustomerAnalytics) -> Result<Json<AnalyticsResponse>, ApiError> {
    let formatter = ReasonFormatter::norwegian().map_err(|e| ApiError::Internal(e.to_string()))?;
    let explanations = formatter.format_all(&analytics.risk.reasons);
    Ok(Json(AnalyticsResponse {
        analytics,
        explanations,
    }))
}
