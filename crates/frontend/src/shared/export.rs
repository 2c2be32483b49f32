/// Browser/desktop delivery for the export builders in
/// `contracts::shared::export`.
///
/// On the desktop host the native save dialog is preferred; in the browser
/// the file goes out as a Blob behind a temporary anchor.
use contracts::shared::export::{to_csv, to_json, TableExport};
use leptos::task::spawn_local;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::system::host_bridge;

/// Export rows as CSV, in the order given (the current view).
pub fn export_csv<T: TableExport>(rows: &[T], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Nothing to export".to_string());
    }
    deliver(to_csv(rows), filename, "text/csv;charset=utf-8;")
}

/// Export rows as JSON, exactly as held in memory.
pub fn export_json<T: TableExport + Serialize>(rows: &[T], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Nothing to export".to_string());
    }
    let json = to_json(rows).map_err(|e| format!("serialize failed: {}", e))?;
    deliver(json, filename, "application/json")
}

fn deliver(contents: String, filename: &str, mime: &str) -> Result<(), String> {
    if host_bridge::available() {
        let filename = filename.to_string();
        spawn_local(async move {
            match host_bridge::save_text_file(&filename, &contents).await {
                Ok(saved) => {
                    if saved {
                        host_bridge::notify("Export complete", &filename);
                    }
                }
                Err(e) => log::error!("host export failed: {}", e),
            }
        });
        return Ok(());
    }
    download_blob(&contents, filename, mime)
}

fn download_blob(contents: &str, filename: &str, mime: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(contents));
    let properties = BlobPropertyBag::new();
    properties.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}
