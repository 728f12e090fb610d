use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SymptomRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SymptomResponse {
    pub possible_causes: Vec<&'static str>,
}
