//! Media classification and upload validation rules.
//!
//! Object keys follow `{category}/{uuid}{ext}`. Validation limits apply to the
//! buffered upload path only; presigned uploads trust the client-declared
//! content type.

use uuid::Uuid;

use crate::error::CoreError;

/// Validation rule for an uploaded file: size ceiling plus a MIME allowlist.
#[derive(Debug, Clone, Copy)]
pub struct FileValidationOptions {
    pub max_bytes: usize,
    pub allowed_mime_types: &'static [&'static str],
}

/// Images only, used for company logos.
pub const IMAGE_FILE_VALIDATION: FileValidationOptions = FileValidationOptions {
    max_bytes: 10 * 1024 * 1024,
    allowed_mime_types: &[
        "image/jpeg",
        "image/png",
        "image/gif",
        "image/webp",
        "image/svg+xml",
    ],
};

/// Videos only.
pub const VIDEO_FILE_VALIDATION: FileValidationOptions = FileValidationOptions {
    max_bytes: 500 * 1024 * 1024,
    allowed_mime_types: &["video/mp4", "video/webm", "video/ogg", "video/quicktime"],
};

/// Combined rule for slide media uploads (images or videos).
pub const MEDIA_FILE_VALIDATION: FileValidationOptions = FileValidationOptions {
    max_bytes: 500 * 1024 * 1024,
    allowed_mime_types: &[
        "image/jpeg",
        "image/png",
        "image/gif",
        "image/webp",
        "image/svg+xml",
        "video/mp4",
        "video/webm",
        "video/ogg",
        "video/quicktime",
    ],
};

/// Check an uploaded file against a validation rule.
pub fn validate_file(
    size: usize,
    mime_type: &str,
    options: &FileValidationOptions,
) -> Result<(), CoreError> {
    if size > options.max_bytes {
        let max_mb = options.max_bytes as f64 / (1024.0 * 1024.0);
        return Err(CoreError::Validation(format!(
            "File size exceeds maximum allowed size of {max_mb:.2}MB"
        )));
    }

    if !options.allowed_mime_types.contains(&mime_type) {
        return Err(CoreError::Validation(format!(
            "File type '{}' is not allowed. Allowed types: {}",
            mime_type,
            options.allowed_mime_types.join(", ")
        )));
    }

    Ok(())
}

pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

pub fn is_video_mime(mime_type: &str) -> bool {
    mime_type.starts_with("video/")
}

/// File extension including the leading dot, or an empty string.
pub fn file_extension(filename: &str) -> &str {
    filename.rfind('.').map_or("", |idx| &filename[idx..])
}

/// Generate a collision-free object key: `{category}/{uuid}{ext}`.
pub fn object_key(category: &str, filename: &str) -> String {
    format!(
        "{}/{}{}",
        category.trim_matches('/'),
        Uuid::new_v4(),
        file_extension(filename)
    )
}
