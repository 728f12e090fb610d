use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// App user profile. Nothing persists these yet; profile endpoints are mocked.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[validate(range(min = 0, max = 120))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "default_language")]
    pub language: Option<String>,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub medical_history: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_language() -> Option<String> {
    Some("English".to_string())
}
