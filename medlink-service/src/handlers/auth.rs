use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::dtos::auth::{LoginRequest, TokenResponse};
use crate::startup::AppState;

const GUEST_EMAIL: &str = "guest@medlink.ai";
const GUEST_NAME: &str = "Guest";

/// Demo login: every email/password pair gets a token.
#[tracing::instrument(skip(state, request), fields(email = %request.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let display_name = request.name.as_deref().unwrap_or("User");
    let token = state.tokens.issue(&request.email, display_name)?;

    tracing::info!("Issued demo login token");

    Ok(Json(TokenResponse::bearer(
        token,
        request.name,
        Some(request.email),
    )))
}

#[tracing::instrument(skip(state))]
pub async fn guest_login(State(state): State<AppState>) -> Result<Json<TokenResponse>, AppError> {
    let token = state.tokens.issue(GUEST_EMAIL, GUEST_NAME)?;

    Ok(Json(TokenResponse::bearer(
        token,
        Some(GUEST_NAME.to_string()),
        Some(GUEST_EMAIL.to_string()),
    )))
}
