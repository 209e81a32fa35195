//! Browser Helpers
//!
//! File reading for uploads and the save-as prompt for downloads.

use docutrack_core::{Download, UploadFile};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FileList, HtmlAnchorElement, Url};

/// Read one picked or dropped file into memory
pub async fn read_file(file: &File) -> Result<UploadFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let content_type = Some(file.type_()).filter(|t| !t.is_empty());
    Ok(UploadFile::new(file.name(), content_type, bytes))
}

/// Read every file in a list; unreadable files are logged and skipped
pub async fn read_files(list: FileList) -> Vec<UploadFile> {
    let mut files = Vec::new();
    for i in 0..list.length() {
        let Some(file) = list.get(i) else { continue };
        match read_file(&file).await {
            Ok(upload) => files.push(upload),
            Err(e) => log::error!("Error reading {}: {:?}", file.name(), e),
        }
    }
    files
}

/// Offer downloaded bytes to the user through a temporary object URL
///
/// The link is attached to the body for the click, since some browsers ignore
/// clicks on detached anchors. The URL is revoked once the click has been handled.
pub fn save_as(download: &Download) -> Result<(), JsValue> {
    let bytes = js_sys::Uint8Array::from(download.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let blob = Blob::new_with_u8_array_sequence(&parts)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(&download.filename);
    anchor.style().set_property("display", "none")?;

    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    Timeout::new(0, move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("Error revoking download URL: {:?}", e);
        }
    })
    .forget();
    Ok(())
}
