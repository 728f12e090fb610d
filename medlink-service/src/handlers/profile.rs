use axum::{extract::Query, Json};

use crate::dtos::profile::{ProfileQuery, ProfileResponse, ProfileUpdate, ProfileUpdateResponse};

/// Mock profile; the store is not consulted.
pub async fn get_profile(Query(query): Query<ProfileQuery>) -> Json<ProfileResponse> {
    Json(ProfileResponse::mock(query.email))
}

/// Echo back the supplied fields. Nothing is persisted.
pub async fn update_profile(Json(update): Json<ProfileUpdate>) -> Json<ProfileUpdateResponse> {
    Json(ProfileUpdateResponse {
        status: "updated",
        profile: update,
    })
}
