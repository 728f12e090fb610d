use axum::Json;

use crate::models::Prescription;

pub async fn sample_prescription() -> Json<Prescription> {
    Json(Prescription::sample())
}
