use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DoctorStatus {
    #[default]
    Available,
    Busy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub status: DoctorStatus,
    #[serde(default = "default_rating")]
    pub rating: f64,
}

fn default_rating() -> f64 {
    4.8
}

impl Doctor {
    fn new(name: &str, specialty: &str, status: DoctorStatus, rating: f64) -> Self {
        Self {
            name: name.to_string(),
            specialty: specialty.to_string(),
            status,
            rating,
        }
    }

    /// The fixed roster shown by the app.
    pub fn seeded() -> Vec<Doctor> {
        vec![
            Doctor::new(
                "Dr. Neha Kapoor",
                "General Physician",
                DoctorStatus::Available,
                4.9,
            ),
            Doctor::new("Dr. Arjun Mehta", "Cardiologist", DoctorStatus::Busy, 4.7),
            Doctor::new(
                "Dr. Ishita Rao",
                "Pediatrician",
                DoctorStatus::Available,
                4.8,
            ),
        ]
    }
}
