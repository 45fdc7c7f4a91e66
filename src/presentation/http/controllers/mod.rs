// src/presentation/http/controllers/mod.rs
pub mod categories;
pub mod posts;
pub mod uploads;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Acknowledgement returned by delete endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
