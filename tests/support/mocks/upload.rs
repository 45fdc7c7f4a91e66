// tests/support/mocks/upload.rs
use async_trait::async_trait;
use shiori::application::{
    ApplicationResult, error::ApplicationError, ports::upload::ImageUploader,
};
use shiori::domain::media::ImageData;

/// 常に同じ URL を返すアップローダ
pub struct StaticUploader(pub &'static str);

#[async_trait]
impl ImageUploader for StaticUploader {
    async fn upload(&self, _image: &ImageData) -> ApplicationResult<String> {
        Ok(self.0.to_string())
    }
}

/// 常に失敗するアップローダ
pub struct FailingUploader;

#[async_trait]
impl ImageUploader for FailingUploader {
    async fn upload(&self, _image: &ImageData) -> ApplicationResult<String> {
        Err(ApplicationError::infrastructure("image host unreachable"))
    }
}
