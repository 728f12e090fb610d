use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
    pub timing: String,
}

impl Medicine {
    fn new(name: &str, dosage: &str, timing: &str) -> Self {
        Self {
            name: name.to_string(),
            dosage: dosage.to_string(),
            timing: timing.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub user_email: String,
    pub doctor_name: String,
    pub date: DateTime<Utc>,
    pub diagnosis: String,
    pub medicines: Vec<Medicine>,
    pub notes: Option<String>,
}

impl Prescription {
    /// Demo prescription, dated now.
    pub fn sample() -> Self {
        Self {
            user_email: "sandhya@example.com".to_string(),
            doctor_name: "Dr. Neha Kapoor".to_string(),
            date: Utc::now(),
            diagnosis: "Viral Fever".to_string(),
            medicines: vec![
                Medicine::new("Paracetamol 500mg", "1 tablet", "Every 6 hours"),
                Medicine::new("ORS", "200ml", "After each loose stool"),
            ],
            notes: Some("Hydrate well and rest for 2-3 days.".to_string()),
        }
    }
}
