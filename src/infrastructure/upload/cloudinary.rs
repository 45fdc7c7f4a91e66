// src/infrastructure/upload/cloudinary.rs
use crate::application::ports::time::Clock;
use crate::application::{ApplicationResult, error::ApplicationError, ports::upload::ImageUploader};
use crate::domain::media::ImageData;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::sync::Arc;

const UPLOAD_FOLDER: &str = "blog_images";

#[derive(Clone)]
pub struct CloudinarySettings {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for CloudinarySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinarySettings")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl CloudinarySettings {
    pub fn upload_url(&self) -> String {
        // Cloud names are lowercase on Cloudinary's side.
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name.to_lowercase()
        )
    }

    /// Signs the sorted upload parameters with the API secret (SHA-256).
    pub fn sign(&self, timestamp: i64) -> String {
        let to_sign = format!("folder={UPLOAD_FOLDER}&timestamp={timestamp}{}", self.api_secret);
        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

pub struct CloudinaryUploader {
    settings: CloudinarySettings,
    client: reqwest::Client,
    clock: Arc<dyn Clock>,
}

impl CloudinaryUploader {
    pub fn new(settings: CloudinarySettings, clock: Arc<dyn Clock>) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
            clock,
        }
    }
}

#[async_trait]
impl ImageUploader for CloudinaryUploader {
    async fn upload(&self, image: &ImageData) -> ApplicationResult<String> {
        let timestamp = self.clock.now().timestamp();
        let signature = self.settings.sign(timestamp);

        let mut file = Part::bytes(image.bytes().to_vec()).file_name("upload");
        if let Some(mime) = image.mime_type() {
            file = file.mime_str(mime).map_err(|err| {
                ApplicationError::validation(format!("invalid mime type: {err}"))
            })?;
        }

        let form = Form::new()
            .part("file", file)
            .text("api_key", self.settings.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("folder", UPLOAD_FOLDER)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let response = self
            .client
            .post(self.settings.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                ApplicationError::infrastructure(format!("cloudinary request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApplicationError::infrastructure(format!(
                "cloudinary rejected upload ({status}): {message}"
            )));
        }

        let body: UploadResponse = response.json().await.map_err(|err| {
            ApplicationError::infrastructure(format!("unexpected cloudinary response: {err}"))
        })?;

        Ok(body.secure_url)
    }
}
