//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod todo;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Whether the page runs inside a Tauri webview
pub fn is_tauri() -> bool {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::has(&window, &JsValue::from_str("__TAURI__")).ok())
        .unwrap_or(false)
}

// Re-export all public items
pub use todo::*;
