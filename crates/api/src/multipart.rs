//! Multipart form parsing shared by the upload and settings handlers.

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::error::{AppError, AppResult};

/// An in-memory uploaded file from a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Text fields plus at most one file from a multipart request.
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

impl MultipartForm {
    /// A text field's value, with empty strings treated as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .filter(|v| !v.is_empty())
            .cloned()
    }

    /// Whether a boolean-ish flag field is set (`true`, `1`, `yes`).
    pub fn flag(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .is_some_and(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
    }
}

/// Drain a multipart request, collecting text fields and the file uploaded
/// under `file_field`. Files under other field names are ignored.
pub async fn parse_multipart(
    mut multipart: Multipart,
    file_field: &str,
) -> AppResult<MultipartForm> {
    let mut form = MultipartForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if let Some(filename) = field.file_name().map(str::to_string) {
            if name == file_field && !filename.is_empty() {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read file: {e}")))?;
                form.file = Some(UploadedFile {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read field '{name}': {e}")))?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}
