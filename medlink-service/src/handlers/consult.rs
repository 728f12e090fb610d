use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::dtos::consult::{
    ChatMessageRequest, ChatMessageResponse, EndConsultRequest, EndConsultResponse,
    StartConsultRequest, StartConsultResponse,
};
use crate::models::{Consultation, Message};
use crate::services::collections;
use crate::startup::AppState;

#[tracing::instrument(skip(state, request), fields(doctor = %request.doctor_name))]
pub async fn start_consult(
    State(state): State<AppState>,
    Json(request): Json<StartConsultRequest>,
) -> Result<Json<StartConsultResponse>, AppError> {
    let consultation = Consultation::start(request.user_email, request.doctor_name);
    let consultation_id = state
        .store
        .insert_record(collections::CONSULTATION, &consultation)
        .await?;

    tracing::info!(consultation_id = %consultation_id, "Consultation started");

    Ok(Json(StartConsultResponse {
        consultation_id,
        status: "started",
    }))
}

/// Append a chat line. Unknown sender roles are stored as "user".
#[tracing::instrument(skip(state, request), fields(consultation_id = %request.consultation_id))]
pub async fn post_message(
    State(state): State<AppState>,
    Json(request): Json<ChatMessageRequest>,
) -> Result<Json<ChatMessageResponse>, AppError> {
    let message = Message::new(request.consultation_id, &request.sender, request.text);
    if message.sender.as_str() != request.sender {
        tracing::debug!(requested = %request.sender, stored = %message.sender, "Coerced sender role");
    }

    let message_id = state
        .store
        .insert_record(collections::MESSAGE, &message)
        .await?;

    Ok(Json(ChatMessageResponse { message_id }))
}

/// Acknowledge the end of a consultation. The stored consultation keeps no
/// end time or rating.
#[tracing::instrument(skip(request), fields(consultation_id = %request.consultation_id))]
pub async fn end_consult(Json(request): Json<EndConsultRequest>) -> Json<EndConsultResponse> {
    tracing::info!(rating = ?request.rating, "Consultation ended");

    Json(EndConsultResponse {
        consultation_id: request.consultation_id,
        status: "ended",
        rating: request.rating,
    })
}
