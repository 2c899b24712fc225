//! Avatar image encoding as `data:` URLs.

#[cfg(test)]
#[path = "data_url_test.rs"]
mod tests;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Largest avatar accepted, in bytes.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("Please choose an image file.")]
    NotAnImage,
    #[error("Image must be smaller than 2 MB.")]
    TooLarge,
}

/// Encode raw file bytes as a base64 `data:` URL after checking type and size.
///
/// # Errors
///
/// Returns [`ImageError::NotAnImage`] for non-`image/*` MIME types and
/// [`ImageError::TooLarge`] above [`MAX_IMAGE_BYTES`].
pub fn image_data_url(mime: &str, bytes: &[u8]) -> Result<String, ImageError> {
    check_image(mime, bytes.len())?;
    let mime = mime.trim().to_ascii_lowercase();
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Type and size check run before a file is read.
///
/// # Errors
///
/// Same as [`image_data_url`].
pub fn check_image(mime: &str, len: usize) -> Result<(), ImageError> {
    if !mime.trim().to_ascii_lowercase().starts_with("image/") {
        return Err(ImageError::NotAnImage);
    }
    if len > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge);
    }
    Ok(())
}

/// [`check_image`] for a browser `File`, whose size is a JS number.
///
/// # Errors
///
/// Same as [`image_data_url`]; a size that is not a finite count within
/// the limit is [`ImageError::TooLarge`].
#[allow(clippy::cast_precision_loss)]
pub fn check_file_image(mime: &str, size: f64) -> Result<(), ImageError> {
    check_image(mime, 0)?;
    if size.is_nan() || size > MAX_IMAGE_BYTES as f64 {
        return Err(ImageError::TooLarge);
    }
    Ok(())
}

/// Whether `value` is a base64 image data URL (what the avatar field stores).
#[must_use]
pub fn is_image_data_url(value: &str) -> bool {
    value
        .strip_prefix("data:image/")
        .and_then(|rest| rest.split_once(";base64,"))
        .is_some_and(|(subtype, payload)| !subtype.is_empty() && STANDARD.decode(payload).is_ok())
}
