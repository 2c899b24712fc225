//! QR code rendering for the share page.
//!
//! The payload is the `platform: link` text built by
//! [`profile::share::qr_payload`]; this module only turns it into SVG or PNG.

#[cfg(test)]
#[path = "qr_test.rs"]
mod tests;

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::QrCode;
use qrcode::render::svg;

/// Minimum rendered edge in pixels.
pub const MIN_DIMENSION: u32 = 256;

#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("nothing to encode")]
    Empty,
    #[error("qr encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("png encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

fn encode(payload: &str) -> Result<QrCode, QrError> {
    if payload.trim().is_empty() {
        return Err(QrError::Empty);
    }
    Ok(QrCode::new(payload.as_bytes())?)
}

/// Render `payload` as a standalone SVG document.
///
/// # Errors
///
/// Returns [`QrError::Empty`] for a blank payload or [`QrError::Encode`]
/// when the payload exceeds QR capacity.
pub fn render_svg(payload: &str) -> Result<String, QrError> {
    let code = encode(payload)?;
    Ok(code
        .render::<svg::Color<'_>>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

/// Render `payload` as PNG bytes.
///
/// # Errors
///
/// Same as [`render_svg`], plus [`QrError::Png`] if image encoding fails.
pub fn render_png(payload: &str) -> Result<Vec<u8>, QrError> {
    let code = encode(payload)?;
    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .build();
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
