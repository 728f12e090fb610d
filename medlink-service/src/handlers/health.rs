use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;
use service_core::error::AppError;

use crate::config::StoreBackend;
use crate::startup::AppState;

const DIAGNOSTIC_COLLECTIONS: usize = 10;
const DIAGNOSTIC_ERROR_CHARS: usize = 80;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "app": "MedLink AI",
        "status": "ok"
    }))
}

#[derive(Debug, Serialize)]
pub struct StoreDiagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn truncate(message: &str) -> String {
    message.chars().take(DIAGNOSTIC_ERROR_CHARS).collect()
}

struct StoreStatus {
    database: String,
    connection_status: String,
    collections: Vec<String>,
}

fn store_status(backend: &str, listing: Result<Vec<String>, AppError>) -> StoreStatus {
    match listing {
        Ok(collections) => StoreStatus {
            database: "Connected & Working".to_string(),
            connection_status: format!("Connected ({})", backend),
            collections,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Store diagnostic failed");
            StoreStatus {
                database: format!("Connected but Error: {}", truncate(&e.to_string())),
                connection_status: format!("Not Connected ({})", backend),
                collections: Vec::new(),
            }
        }
    }
}

/// Connectivity report for the document store. Store failures are folded
/// into the report instead of failing the request.
#[tracing::instrument(skip(state))]
pub async fn store_diagnostics(State(state): State<AppState>) -> Json<StoreDiagnostics> {
    let store = &state.store;

    let database_url = match state.config.store.backend {
        StoreBackend::Mongo if !state.config.store.uri.is_empty() => "Set",
        _ => "Not Set",
    };

    let status = store_status(
        store.backend_name(),
        store.list_collections(DIAGNOSTIC_COLLECTIONS).await,
    );

    Json(StoreDiagnostics {
        backend: "Running".to_string(),
        database: status.database,
        database_url: database_url.to_string(),
        database_name: store.database_name().to_string(),
        connection_status: status.connection_status,
        collections: status.collections,
    })
}

/// Liveness probe; reports unhealthy when the store does not answer a ping.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": state.config.service_name,
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "service": state.config.service_name,
                "error": e.to_string()
            })),
        ),
    }
}

pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
