//! Asset upload handlers: sprites and audio

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    Json,
};
use tracing::debug;

use super::AppState;
use crate::http::error::ApiError;
use crate::http::types::CreatedResponse;
use crate::types::{AssetDocument, AssetKind};

/// Name of the multipart field carrying the uploaded file. Other fields
/// are treated as optional metadata and ignored.
const FILE_FIELD: &str = "file";

/// Fallback content type for uploads that declare none.
const OCTET_STREAM: &str = "application/octet-stream";

/// One file part extracted from a multipart request.
struct FilePart {
    filename: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// Sprite upload endpoint
pub async fn upload_sprite(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    store_upload(state, AssetKind::Sprite, multipart).await
}

/// Audio upload endpoint
pub async fn upload_audio(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    store_upload(state, AssetKind::Audio, multipart).await
}

async fn store_upload(
    state: AppState,
    kind: AssetKind,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let multipart = multipart.map_err(|e| ApiError::Validation(e.body_text()))?;
    let part = read_file_part(multipart, state.max_upload_bytes).await?;
    check_content_scope(kind, part.content_type.as_deref())?;

    debug!(
        filename = %part.filename,
        size = part.bytes.len(),
        collection = kind.collection(),
        "storing upload"
    );

    let document = AssetDocument::new(
        part.filename,
        part.content_type.unwrap_or_else(|| OCTET_STREAM.to_string()),
        part.bytes,
    );
    let id = state.store.insert_asset(kind, &document).await?;

    Ok(Json(CreatedResponse {
        message: format!("{} uploaded", kind.label()),
        id: id.to_hex(),
    }))
}

/// Pull the `file` part out of the multipart stream.
///
/// A request without that part, or with an empty one, is a validation
/// error; nothing is persisted.
async fn read_file_part(mut multipart: Multipart, limit: usize) -> Result<FilePart, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("unnamed").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        if bytes.is_empty() {
            return Err(ApiError::Validation("uploaded file is empty".to_string()));
        }
        if bytes.len() > limit {
            return Err(ApiError::PayloadTooLarge {
                size: bytes.len(),
                limit,
            });
        }

        return Ok(FilePart {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(ApiError::Validation(format!(
        "multipart request is missing a '{FILE_FIELD}' part"
    )))
}

/// Reject uploads whose declared content type falls outside the
/// endpoint's scope. Undeclared content types are accepted.
fn check_content_scope(kind: AssetKind, content_type: Option<&str>) -> Result<(), ApiError> {
    match content_type {
        Some(ct) if !ct.starts_with(kind.content_scope()) => Err(ApiError::Validation(format!(
            "content type '{}' is not accepted here; expected {}*",
            ct,
            kind.content_scope()
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_scope_accepts_image_types() {
        check_content_scope(AssetKind::Sprite, Some("image/png")).unwrap();
        check_content_scope(AssetKind::Sprite, Some("image/gif")).unwrap();
    }

    #[test]
    fn sprite_scope_rejects_non_image_types() {
        assert!(check_content_scope(AssetKind::Sprite, Some("audio/ogg")).is_err());
        assert!(check_content_scope(AssetKind::Sprite, Some("text/plain")).is_err());
    }

    #[test]
    fn audio_scope_rejects_image_types() {
        check_content_scope(AssetKind::Audio, Some("audio/mpeg")).unwrap();
        assert!(check_content_scope(AssetKind::Audio, Some("image/png")).is_err());
    }

    #[test]
    fn undeclared_content_type_is_accepted() {
        check_content_scope(AssetKind::Sprite, None).unwrap();
        check_content_scope(AssetKind::Audio, None).unwrap();
    }
}
