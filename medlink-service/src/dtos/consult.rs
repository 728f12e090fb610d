use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct StartConsultRequest {
    pub user_email: String,
    pub doctor_name: String,
}

#[derive(Debug, Serialize)]
pub struct StartConsultResponse {
    pub consultation_id: String,
    pub status: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    pub consultation_id: String,
    /// Free text; coerced to a sender role before storage.
    pub sender: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub message_id: String,
}

#[derive(Debug, Deserialize)]
pub struct EndConsultRequest {
    pub consultation_id: String,
    #[serde(default)]
    pub rating: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct EndConsultResponse {
    pub consultation_id: String,
    pub status: &'static str,
    pub rating: Option<i32>,
}
