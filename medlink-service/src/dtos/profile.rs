use serde::{Deserialize, Serialize};

pub const DEMO_EMAIL: &str = "sandhya@example.com";

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    #[serde(default = "default_email")]
    pub email: String,
}

fn default_email() -> String {
    DEMO_EMAIL.to_string()
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: String,
    pub language: String,
    pub dark_mode: bool,
    pub medical_history: Vec<String>,
}

impl ProfileResponse {
    /// Canned profile for the demo user, addressed to `email`.
    pub fn mock(email: String) -> Self {
        Self {
            name: "Sandhya".to_string(),
            email,
            age: 28,
            gender: "Female".to_string(),
            language: "English".to_string(),
            dark_mode: false,
            medical_history: vec![
                "Consultation - 2024-05-10".to_string(),
                "Typhoid (2019)".to_string(),
            ],
        }
    }
}

/// Partial profile; only the fields present are echoed back.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ProfileUpdateResponse {
    pub status: &'static str,
    pub profile: ProfileUpdate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_echo_drops_null_fields() {
        let update: ProfileUpdate =
            serde_json::from_value(json!({"name": "Asha", "age": null, "dark_mode": true}))
                .unwrap();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"name": "Asha", "dark_mode": true})
        );
    }
}
