use serde::{Deserialize, Serialize};
use validator::Validate;

/// A medicine reminder. Stored as submitted; never updated, expired or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Reminder {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_email: String,
    pub medicine_name: String,
    /// 24h time of day, e.g. "08:30". Not parsed.
    pub time: String,
    #[validate(range(min = 1, max = 365))]
    pub duration_days: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(duration_days: i32) -> Reminder {
        Reminder {
            id: None,
            user_email: "sandhya@example.com".to_string(),
            medicine_name: "Paracetamol 500mg".to_string(),
            time: "08:30".to_string(),
            duration_days,
            notes: None,
        }
    }

    #[test]
    fn accepts_duration_within_a_year() {
        assert!(reminder(1).validate().is_ok());
        assert!(reminder(365).validate().is_ok());
    }

    #[test]
    fn rejects_zero_days() {
        let errors = reminder(0).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("duration_days"));
    }

    #[test]
    fn rejects_more_than_a_year() {
        assert!(reminder(366).validate().is_err());
    }
}
