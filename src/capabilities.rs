use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Optional browser mechanisms the behaviors may use. Detected once at boot
/// and handed to each behavior instead of being probed from globals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub observe_visibility: bool,
    pub background_workers: bool,
}

impl Capabilities {
    pub fn detect(window: &Window) -> Self {
        let observe_visibility =
            Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        let background_workers =
            Reflect::has(&window.navigator(), &JsValue::from_str("serviceWorker"))
                .unwrap_or(false);
        Self {
            observe_visibility,
            background_workers,
        }
    }
}
