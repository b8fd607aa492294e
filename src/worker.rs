use gloo::console;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Window;

use crate::capabilities::Capabilities;
use crate::dom;
use folio_core::BehaviorConfig;

/// Registers the configured background worker script, if there is one and
/// the browser supports it.
pub fn register(window: &Window, capabilities: Capabilities, config: &BehaviorConfig) {
    if !capabilities.background_workers {
        return;
    }
    let Some(script) = config.service_worker.clone() else {
        return;
    };
    let container = window.navigator().service_worker();
    spawn_local(async move {
        match JsFuture::from(container.register(&script)).await {
            Ok(_) => console::log!("background worker registered", script),
            Err(err) => console::warn!(
                "background worker registration failed",
                script,
                dom::js_err(&err)
            ),
        }
    });
}
