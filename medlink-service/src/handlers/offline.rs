use axum::{extract::State, Json};
use chrono::Utc;
use service_core::error::AppError;

use crate::dtos::records::OfflineQueuedResponse;
use crate::models::OfflineMessage;
use crate::services::collections;
use crate::startup::AppState;

/// Queue a message for an SMS reply. Nothing in this service drains the queue.
#[tracing::instrument(skip(state, message))]
pub async fn queue_offline_message(
    State(state): State<AppState>,
    Json(mut message): Json<OfflineMessage>,
) -> Result<Json<OfflineQueuedResponse>, AppError> {
    message.created_at.get_or_insert_with(Utc::now);

    state
        .store
        .insert_record(collections::OFFLINE_MESSAGE, &message)
        .await?;

    Ok(Json(OfflineQueuedResponse {
        status: "queued",
        info: "A doctor will reply via SMS soon.",
    }))
}
