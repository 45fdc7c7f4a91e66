use shiori::application::commands::uploads::{UploadCommandService, UploadImageCommand};
use shiori::application::error::ApplicationError;
use shiori::domain::errors::DomainError;
use shiori::domain::post::ImageUrl;
use std::sync::Arc;

mod support;

const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgo=";

#[tokio::test]
async fn successful_upload_returns_host_url() {
    let service = UploadCommandService::new(
        Arc::new(support::StaticUploader("https://cdn.example.com/x.png")),
        false,
    );

    let uploaded = service
        .upload_image(UploadImageCommand {
            base64: PNG_DATA_URL.into(),
        })
        .await
        .unwrap();

    assert_eq!(uploaded.url, "https://cdn.example.com/x.png");
}

#[tokio::test]
async fn bare_base64_is_accepted() {
    let service = UploadCommandService::new(
        Arc::new(support::StaticUploader("https://cdn.example.com/y.png")),
        false,
    );

    let uploaded = service
        .upload_image(UploadImageCommand {
            base64: "iVBORw0KGgo=".into(),
        })
        .await
        .unwrap();

    assert_eq!(uploaded.url, "https://cdn.example.com/y.png");
}

#[tokio::test]
async fn failure_echoes_input_when_fallback_is_enabled() {
    let service = UploadCommandService::new(Arc::new(support::FailingUploader), true);

    let uploaded = service
        .upload_image(UploadImageCommand {
            base64: PNG_DATA_URL.into(),
        })
        .await
        .unwrap();

    assert_eq!(uploaded.url, PNG_DATA_URL);
}

#[tokio::test]
async fn fallback_for_bare_base64_is_a_usable_image_url() {
    let service = UploadCommandService::new(Arc::new(support::FailingUploader), true);

    let uploaded = service
        .upload_image(UploadImageCommand {
            base64: "iVBORw0KGgo=".into(),
        })
        .await
        .unwrap();

    assert_eq!(uploaded.url, PNG_DATA_URL);
    assert!(ImageUrl::new(uploaded.url).is_ok());
}

#[tokio::test]
async fn failure_surfaces_as_infrastructure_error_without_fallback() {
    let service = UploadCommandService::new(Arc::new(support::FailingUploader), false);

    let err = service
        .upload_image(UploadImageCommand {
            base64: PNG_DATA_URL.into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Infrastructure(_)));
}

#[tokio::test]
async fn malformed_payload_is_rejected_before_uploading() {
    let service = UploadCommandService::new(
        Arc::new(support::StaticUploader("https://cdn.example.com/z.png")),
        true,
    );

    let err = service
        .upload_image(UploadImageCommand {
            base64: "data:text/plain;base64,aGVsbG8=".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}
