use axum::Json;

use crate::dtos::symptoms::{SymptomRequest, SymptomResponse};
use crate::services::{record_symptom_analysis, symptoms};

#[tracing::instrument(skip(request))]
pub async fn analyze_symptoms(Json(request): Json<SymptomRequest>) -> Json<SymptomResponse> {
    let possible_causes = symptoms::analyze(&request.text);
    let matched = possible_causes != symptoms::FALLBACK_CAUSES;

    record_symptom_analysis(matched);
    tracing::debug!(causes = ?possible_causes, matched, "Symptoms analyzed");

    Json(SymptomResponse { possible_causes })
}
