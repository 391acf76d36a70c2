//! Buffering of incoming multipart files for forwarding upstream.

use reqwest::multipart::Part;

use crate::error::ApiError;

/// One uploaded file from an admin form, buffered for forwarding.
pub(crate) struct FilePart {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

pub(crate) async fn read_file(
    field: axum::extract::multipart::Field<'_>,
) -> Result<FilePart, ApiError> {
    let file_name = field.file_name().unwrap_or("upload").to_string();
    let content_type = field.content_type().map(String::from);
    let bytes = field
        .bytes()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Falha ao ler arquivo enviado: {e}")))?;
    Ok(FilePart {
        file_name,
        content_type,
        bytes: bytes.to_vec(),
    })
}

pub(crate) fn forward_part(file: FilePart) -> Result<Part, ApiError> {
    let mut part = Part::bytes(file.bytes).file_name(file.file_name);
    if let Some(content_type) = file.content_type {
        part = part.mime_str(&content_type)?;
    }
    Ok(part)
}
