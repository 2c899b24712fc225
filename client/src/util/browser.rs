//! Clipboard, download and location glue.
//!
//! Every helper is a no-op (or an `Err`) during SSR; the real work only
//! happens after hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

pub const QR_PNG_PATH: &str = "/api/qrcode.png";
pub const QR_DOWNLOAD_NAME: &str = "devlinks-qrcode.png";

#[cfg(not(feature = "hydrate"))]
const NO_BROWSER: &str = "not available on server";

/// `window.location.origin`, or empty on the server.
pub fn origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns a message when the Clipboard API is missing or the write is refused.
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or("no window")?;
        let clipboard = window.navigator().clipboard().ok_or_else(|| clipboard_failed_message("text"))?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|_| clipboard_failed_message("text"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(NO_BROWSER.to_owned())
    }
}

/// Fetch a PNG and place it on the clipboard as an image.
///
/// # Errors
///
/// Returns a message when the fetch fails or the browser rejects the write.
pub async fn copy_png(url: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(clipboard_failed_message("image"));
        }
        let bytes = resp.binary().await.map_err(|e| e.to_string())?;

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|_| clipboard_failed_message("image"))?;

        let record = js_sys::Object::new();
        js_sys::Reflect::set(&record, &"image/png".into(), &js_sys::Promise::resolve(&blob))
            .map_err(|_| clipboard_failed_message("image"))?;
        let item = web_sys::ClipboardItem::new_with_record_from_str_to_blob_promise(&record)
            .map_err(|_| clipboard_failed_message("image"))?;

        let window = web_sys::window().ok_or("no window")?;
        let clipboard = window.navigator().clipboard().ok_or_else(|| clipboard_failed_message("image"))?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write(&js_sys::Array::of1(&item)))
            .await
            .map(|_| ())
            .map_err(|_| clipboard_failed_message("image"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(NO_BROWSER.to_owned())
    }
}

/// Start a download of `url` by clicking a temporary anchor.
pub fn download(url: &str, filename: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(anchor) = document.create_element("a") else {
            return;
        };
        let Ok(anchor) = anchor.dyn_into::<web_sys::HtmlAnchorElement>() else {
            return;
        };
        anchor.set_href(url);
        anchor.set_download(filename);
        anchor.click();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, filename);
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn clipboard_failed_message(what: &str) -> String {
    format!("Could not copy {what} to the clipboard.")
}
