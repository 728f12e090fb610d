use axum::Json;

use crate::models::Doctor;

pub async fn list_doctors() -> Json<Vec<Doctor>> {
    Json(Doctor::seeded())
}
