use serde::{Deserialize, Serialize};

/// Demo login. Any email is accepted and the password is never checked.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(default = "default_display_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

pub fn default_display_name() -> Option<String> {
    Some("User".to_string())
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl TokenResponse {
    pub fn bearer(access_token: String, name: Option<String>, email: Option<String>) -> Self {
        Self {
            access_token,
            token_type: "bearer",
            name,
            email,
        }
    }
}
