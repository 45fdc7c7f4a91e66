// src/presentation/http/controllers/uploads.rs
use crate::application::{commands::uploads::UploadImageCommand, dto::UploadedImageDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadImageRequest {
    /// `data:image/<type>;base64,<payload>` or a bare base64 payload.
    pub base64: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/uploads/images",
    request_body = UploadImageRequest,
    responses(
        (status = 200, description = "Public URL of the stored image.", body = UploadedImageDto),
        (status = 400, description = "Payload is not a base64 image.", body = ErrorResponse),
        (status = 500, description = "Image host rejected the upload.", body = ErrorResponse)
    ),
    tag = "Uploads"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<UploadImageRequest>,
) -> HttpResult<Json<UploadedImageDto>> {
    state
        .services
        .upload_commands
        .upload_image(UploadImageCommand {
            base64: payload.base64,
        })
        .await
        .into_http()
        .map(Json)
}
