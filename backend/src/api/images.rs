//! Image upload handler.
//!
//! The body is buffered up to the configured limit and then parsed as
//! `multipart/form-data`. Only the `image` field is inspected; its bytes are
//! counted and discarded.

use actix_web::http::header;
use actix_web::{HttpRequest, post, web};
use futures_util::{StreamExt, stream};
use serde::Deserialize;
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::api::state::AppState;
use crate::domain::{FieldError, ImageMetadata, ValidationErrors};
use crate::models::{ApiResult, Error};

/// Multipart field carrying the upload.
pub const IMAGE_FIELD: &str = "image";

/// Failures while reading an upload.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("request body exceeds the {limit} byte limit")]
    TooLarge { limit: usize },
    #[error("request is not multipart/form-data: {0}")]
    Boundary(#[source] multer::Error),
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] multer::Error),
    #[error("failed to read request body: {0}")]
    Payload(#[from] actix_web::error::PayloadError),
    #[error("missing multipart field `image`")]
    MissingImage,
}

impl From<UploadError> for Error {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::TooLarge { limit } => {
                warn!(limit, "upload rejected for size");
                Error::payload_too_large(limit)
            }
            UploadError::MissingImage => {
                ValidationErrors::from(FieldError::missing(IMAGE_FIELD)).into()
            }
            other => {
                debug!(error = %other, "upload body rejected");
                Error::malformed_body(other.to_string())
            }
        }
    }
}

/// Multipart request body documented for `POST /post-image`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ImageUpload {
    /// File contents.
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

/// Report the name, type and size of an uploaded image.
#[utoipa::path(
    post,
    path = "/post-image",
    request_body(content = ImageUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload metadata", body = ImageMetadata),
        (status = 400, description = "Invalid request", body = Error),
        (status = 413, description = "Upload too large", body = Error)
    ),
    tags = ["images"],
    operation_id = "postImage"
)]
#[post("/post-image")]
pub async fn post_image(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> ApiResult<web::Json<ImageMetadata>> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let boundary = multer::parse_boundary(content_type).map_err(UploadError::Boundary)?;
    let body = buffer(payload, state.max_upload_bytes).await?;
    let metadata = read_image(body, boundary).await?;
    debug!(
        filename = ?metadata.filename,
        content_type = ?metadata.content_type,
        size_kb = metadata.size_kb,
        "image received"
    );
    Ok(web::Json(metadata))
}

async fn buffer(mut payload: web::Payload, limit: usize) -> Result<web::Bytes, UploadError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        if body.len() + chunk.len() > limit {
            return Err(UploadError::TooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

// `web::Payload` is not `Send`, so multer reads from the buffered copy.
async fn read_image(body: web::Bytes, boundary: String) -> Result<ImageMetadata, UploadError> {
    let source = stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(source, boundary);
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let filename = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(mime::Mime::to_string);
        let bytes = field.bytes().await?;
        return Ok(ImageMetadata::new(filename, content_type, bytes.len()));
    }
    Err(UploadError::MissingImage)
}
