use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message left while offline, to be answered by SMS outside this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflineMessage {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
