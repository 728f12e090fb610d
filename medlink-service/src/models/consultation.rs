use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A consultation session. `ended_at` and `rating` exist on the record but
/// nothing writes them after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_email: String,
    pub doctor_name: String,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
}

impl Consultation {
    pub fn start(user_email: String, doctor_name: String) -> Self {
        Self {
            id: None,
            user_email,
            doctor_name,
            started_at: Utc::now(),
            ended_at: None,
            rating: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    User,
    Doctor,
}

impl SenderRole {
    /// Anything other than an exact "doctor" or "user" is treated as the user.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "doctor" => SenderRole::Doctor,
            _ => SenderRole::User,
        }
    }
}

impl SenderRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SenderRole::User => "user",
            SenderRole::Doctor => "doctor",
        }
    }
}

impl std::fmt::Display for SenderRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chat line within a consultation. The consultation id is not checked
/// against stored consultations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub consultation_id: String,
    pub sender: SenderRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn new(consultation_id: String, sender: &str, text: String) -> Self {
        Self {
            id: None,
            consultation_id,
            sender: SenderRole::coerce(sender),
            text,
            sent_at: Utc::now(),
        }
    }
}
