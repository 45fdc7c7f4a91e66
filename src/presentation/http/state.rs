// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Origins allowed by CORS; empty allows any origin.
    pub allowed_origins: Arc<[String]>,
    /// Body limit for the image upload route, in bytes.
    pub max_upload_bytes: usize,
}
