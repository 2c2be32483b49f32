//! Bindings to the desktop wrapper's bridged API.
//!
//! The wrapper publishes `window.hostBridge` with a handful of methods
//! (version info, native save dialog, desktop notifications, menu events).
//! In a plain browser the global is absent and every call degrades to a
//! no-op, so nothing else in the app needs to know which host it runs in.

use js_sys::{Function, Promise, Reflect};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, Deserialize)]
pub struct HostInfo {
    pub version: String,
    pub platform: String,
}

fn bridge() -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("hostBridge")).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

pub fn available() -> bool {
    bridge().is_some()
}

fn call0(target: &JsValue, method: &str) -> Option<JsValue> {
    let f: Function = Reflect::get(target, &JsValue::from_str(method))
        .ok()?
        .dyn_into()
        .ok()?;
    f.call0(target).ok()
}

fn call2(target: &JsValue, method: &str, a: &JsValue, b: &JsValue) -> Option<JsValue> {
    let f: Function = Reflect::get(target, &JsValue::from_str(method))
        .ok()?
        .dyn_into()
        .ok()?;
    f.call2(target, a, b).ok()
}

/// Version and platform of the desktop host. `None` in the browser.
pub async fn host_info() -> Option<HostInfo> {
    let bridge = bridge()?;
    let promise: Promise = call0(&bridge, "hostInfo")?.dyn_into().ok()?;
    let value = JsFuture::from(promise).await.ok()?;
    serde_wasm_bindgen::from_value(value).ok()
}

/// Open the native save dialog with prefilled contents. Resolves to `false`
/// when the user cancels; `Err` when no bridge is present.
pub async fn save_text_file(suggested_name: &str, contents: &str) -> Result<bool, String> {
    let bridge = bridge().ok_or_else(|| "host bridge not available".to_string())?;
    let promise: Promise = call2(
        &bridge,
        "saveTextFile",
        &JsValue::from_str(suggested_name),
        &JsValue::from_str(contents),
    )
    .ok_or_else(|| "saveTextFile is not a function".to_string())?
    .dyn_into()
    .map_err(|_| "saveTextFile did not return a promise".to_string())?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(value.as_bool().unwrap_or(false))
}

/// Fire a desktop notification. Silently a no-op in the browser.
pub fn notify(title: &str, body: &str) {
    if let Some(bridge) = bridge() {
        let _ = call2(
            &bridge,
            "notify",
            &JsValue::from_str(title),
            &JsValue::from_str(body),
        );
    }
}

/// Register a callback for menu-triggered events ("export", "refresh", ...).
/// The closure stays alive for the lifetime of the page.
pub fn on_menu_event(callback: impl Fn(String) + 'static) {
    let Some(bridge) = bridge() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |event: JsValue| {
        if let Some(name) = event.as_string() {
            callback(name);
        }
    }) as Box<dyn Fn(JsValue)>);
    let Ok(value) = Reflect::get(&bridge, &JsValue::from_str("onMenuEvent")) else {
        return;
    };
    if let Ok(f) = value.dyn_into::<Function>() {
        let _ = f.call1(&bridge, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
