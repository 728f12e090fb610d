pub mod auth;
pub mod consult;
pub mod profile;
pub mod records;
pub mod symptoms;

use serde::Serialize;

/// Bare `{ "status": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn new(status: &'static str) -> Self {
        Self { status }
    }
}
