use serde::{Deserialize, Serialize};

pub const REMINDER_LIST_LIMIT: i64 = 100;

/// Optional owner filter for list endpoints.
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VitalsQuery {
    pub email: Option<String>,
    #[serde(default = "default_vitals_limit")]
    pub limit: i64,
}

fn default_vitals_limit() -> i64 {
    20
}

#[derive(Debug, Serialize)]
pub struct OfflineQueuedResponse {
    pub status: &'static str,
    pub info: &'static str,
}
