// src/application/commands/uploads/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::UploadedImageDto,
        error::{ApplicationError, ApplicationResult},
        ports::upload::ImageUploader,
    },
    domain::media::ImageData,
};

pub struct UploadImageCommand {
    /// Data URL (`data:image/png;base64,...`) or bare base64 payload.
    pub base64: String,
}

pub struct UploadCommandService {
    uploader: Arc<dyn ImageUploader>,
    fallback_to_data_url: bool,
}

impl UploadCommandService {
    /// With `fallback_to_data_url` set, uploader failures are swallowed and the
    /// image is returned inline as a `data:` URL. Never enable it in
    /// production.
    pub fn new(uploader: Arc<dyn ImageUploader>, fallback_to_data_url: bool) -> Self {
        Self {
            uploader,
            fallback_to_data_url,
        }
    }

    pub async fn upload_image(
        &self,
        command: UploadImageCommand,
    ) -> ApplicationResult<UploadedImageDto> {
        let image = ImageData::parse(&command.base64)?;

        match self.uploader.upload(&image).await {
            Ok(url) => {
                tracing::info!(bytes = image.bytes().len(), "image uploaded");
                Ok(UploadedImageDto { url })
            }
            Err(err) if self.fallback_to_data_url => {
                tracing::warn!(error = %err, "image upload failed, returning data url fallback");
                Ok(UploadedImageDto {
                    url: image.to_data_url(),
                })
            }
            Err(err) => {
                tracing::error!(error = %err, "image upload failed");
                Err(ApplicationError::infrastructure(format!(
                    "image upload failed: {err}"
                )))
            }
        }
    }
}
