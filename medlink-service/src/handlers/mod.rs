pub mod auth;
pub mod consult;
pub mod doctors;
pub mod health;
pub mod metrics;
pub mod offline;
pub mod prescriptions;
pub mod profile;
pub mod reminders;
pub mod symptoms;
pub mod vitals;

pub use auth::{guest_login, login};
pub use consult::{end_consult, post_message, start_consult};
pub use doctors::list_doctors;
pub use health::{health_check, readiness_check, root, store_diagnostics};
pub use metrics::metrics;
pub use offline::queue_offline_message;
pub use prescriptions::sample_prescription;
pub use profile::{get_profile, update_profile};
pub use reminders::{create_reminder, list_reminders};
pub use symptoms::analyze_symptoms;
pub use vitals::{list_vitals, record_vital};
