use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use service_core::error::AppError;
use validator::Validate;

use super::reminders::owner_filter;
use crate::dtos::records::VitalsQuery;
use crate::dtos::StatusResponse;
use crate::models::Vital;
use crate::services::collections;
use crate::startup::AppState;

#[tracing::instrument(skip(state, vital))]
pub async fn record_vital(
    State(state): State<AppState>,
    Json(mut vital): Json<Vital>,
) -> Result<Json<StatusResponse>, AppError> {
    vital.validate()?;
    vital.recorded_at.get_or_insert_with(Utc::now);

    state
        .store
        .insert_record(collections::VITAL, &vital)
        .await?;

    Ok(Json(StatusResponse::new("recorded")))
}

/// Up to `limit` readings. A `limit` of zero or less returns every match.
#[tracing::instrument(skip(state))]
pub async fn list_vitals(
    State(state): State<AppState>,
    Query(query): Query<VitalsQuery>,
) -> Result<Json<Vec<Vital>>, AppError> {
    let vitals = state
        .store
        .find_records(collections::VITAL, owner_filter(query.email), query.limit)
        .await?;

    Ok(Json(vitals))
}
