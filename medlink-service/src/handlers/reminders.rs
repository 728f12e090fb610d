use axum::{
    extract::{Query, State},
    Json,
};
use mongodb::bson::{doc, Document};
use service_core::error::AppError;
use validator::Validate;

use crate::dtos::records::{OwnerQuery, REMINDER_LIST_LIMIT};
use crate::dtos::StatusResponse;
use crate::middleware::Caller;
use crate::models::Reminder;
use crate::services::collections;
use crate::startup::AppState;

/// Store a reminder. A bearer token is optional and only logged; it is not
/// checked against `user_email`.
#[tracing::instrument(skip(state, caller, reminder), fields(caller = %caller))]
pub async fn create_reminder(
    State(state): State<AppState>,
    caller: Caller,
    Json(reminder): Json<Reminder>,
) -> Result<Json<StatusResponse>, AppError> {
    reminder.validate()?;

    if caller.email().is_some_and(|email| email != reminder.user_email) {
        tracing::debug!(owner = %reminder.user_email, "Reminder owner differs from token identity");
    }

    let id = state
        .store
        .insert_record(collections::REMINDER, &reminder)
        .await?;

    tracing::info!(reminder_id = %id, "Reminder created");

    Ok(Json(StatusResponse::new("created")))
}

/// Equality filter on `user_email`. A missing or blank email matches everyone.
pub(crate) fn owner_filter(email: Option<String>) -> Document {
    match email {
        Some(email) if !email.is_empty() => doc! { "user_email": email },
        _ => doc! {},
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_reminders(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<Reminder>>, AppError> {
    let reminders = state
        .store
        .find_records(
            collections::REMINDER,
            owner_filter(query.email),
            REMINDER_LIST_LIMIT,
        )
        .await?;

    Ok(Json(reminders))
}
