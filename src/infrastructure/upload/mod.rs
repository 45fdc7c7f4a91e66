mod cloudinary;

pub use cloudinary::{CloudinarySettings, CloudinaryUploader};

use crate::application::{ApplicationResult, error::ApplicationError, ports::upload::ImageUploader};
use crate::domain::media::ImageData;
use async_trait::async_trait;

/// Stand-in used when no image host is configured; every upload fails.
#[derive(Default, Clone)]
pub struct UnconfiguredUploader;

#[async_trait]
impl ImageUploader for UnconfiguredUploader {
    async fn upload(&self, _image: &ImageData) -> ApplicationResult<String> {
        Err(ApplicationError::infrastructure("image host is not configured"))
    }
}
