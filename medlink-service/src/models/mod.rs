pub mod consultation;
pub mod doctor;
pub mod offline_message;
pub mod prescription;
pub mod reminder;
pub mod user;
pub mod vital;

pub use consultation::{Consultation, Message, SenderRole};
pub use doctor::{Doctor, DoctorStatus};
pub use offline_message::OfflineMessage;
pub use prescription::{Medicine, Prescription};
pub use reminder::Reminder;
pub use user::{Gender, User};
pub use vital::Vital;
