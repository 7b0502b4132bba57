//! Host container handshake
//!
//! When embedded in a container app that exposes `window.Telegram.WebApp`,
//! tell it the game is ready and ask for the full viewport.

use wasm_bindgen::{JsCast, JsValue};

fn lookup(target: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn call(target: &JsValue, method: &str) -> bool {
    lookup(target, method)
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .map(|f| f.call0(target).is_ok())
        .unwrap_or(false)
}

/// Signal `ready()` then `expand()`; silently does nothing without a host
pub fn signal_ready() {
    let Some(window) = web_sys::window() else { return };
    let Some(web_app) = lookup(&window, "Telegram").and_then(|t| lookup(&t, "WebApp")) else {
        return;
    };

    let ready = call(&web_app, "ready");
    let expand = call(&web_app, "expand");
    log::info!("Host handshake: ready={} expand={}", ready, expand);
}
