//! Reading an avatar file from an `<input type="file">`.

#[cfg(feature = "hydrate")]
use profile::data_url::{check_file_image, image_data_url};

/// Read the first selected file as an image `data:` URL.
///
/// Type and size are checked before the bytes are read, so an oversized
/// file is rejected without loading it.
///
/// # Errors
///
/// Returns the user-facing message for a rejected or unreadable file.
#[cfg(feature = "hydrate")]
pub async fn read_image(file: web_sys::File) -> Result<String, String> {
    let mime = file.type_();
    check_file_image(&mime, file.size()).map_err(|e| e.to_string())?;

    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Could not read the selected file.".to_owned())?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    image_data_url(&mime, &bytes).map_err(|e| e.to_string())
}

/// First file of a file input, if any.
#[cfg(feature = "hydrate")]
pub fn first_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|files| files.get(0))
}
