// src/application/ports/upload.rs
use crate::application::ApplicationResult;
use crate::domain::media::ImageData;
use async_trait::async_trait;

/// External object storage / CDN that hosts post images.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Stores the image and returns its public URL.
    async fn upload(&self, image: &ImageData) -> ApplicationResult<String>;
}
