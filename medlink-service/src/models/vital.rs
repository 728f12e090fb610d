use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single vitals reading. Each field is range-checked on its own; there is
/// no cross-field check such as systolic above diastolic.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Vital {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_email: String,
    #[validate(range(min = 20, max = 220))]
    pub heart_rate: i32,
    #[validate(range(min = 60, max = 220))]
    pub bp_systolic: i32,
    #[validate(range(min = 40, max = 140))]
    pub bp_diastolic: i32,
    #[validate(range(min = 50, max = 100))]
    pub spo2: i32,
    #[validate(range(min = 30.0, max = 45.0))]
    pub temperature_c: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}
