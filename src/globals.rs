use std::cell::RefCell;

use gloo::timers::callback::Timeout;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::dom;
use folio_core::Breakpoint;

/// Delays an action until `wait_ms` have passed without another call.
/// Each call cancels the previously scheduled action.
pub struct Debouncer {
    wait_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn call<F: FnOnce() + 'static>(&self, action: F) {
        let timeout = Timeout::new(self.wait_ms, action);
        *self.pending.borrow_mut() = Some(timeout);
    }

    pub fn cancel(&self) {
        // Dropping the handle clears the timer.
        self.pending.borrow_mut().take();
    }
}

pub fn current_breakpoint() -> Breakpoint {
    let width = web_sys::window()
        .map(|window| dom::viewport_width(&window))
        .unwrap_or(f64::INFINITY);
    Breakpoint::from_width(width)
}

#[wasm_bindgen(js_name = getBreakpoint)]
pub fn get_breakpoint() -> String {
    current_breakpoint().as_str().to_string()
}

/// Wraps `func` so it only runs after `wait_ms` of quiet. Up to three
/// arguments from the most recent call are forwarded.
#[wasm_bindgen]
pub fn debounce(func: Function, wait_ms: u32) -> Function {
    let debouncer = Debouncer::new(wait_ms);
    let wrapper = Closure::wrap(Box::new(move |a: JsValue, b: JsValue, c: JsValue| {
        let func = func.clone();
        let args = forwarded_args([a, b, c]);
        debouncer.call(move || {
            let _ = func.apply(&JsValue::NULL, &args);
        });
    }) as Box<dyn FnMut(JsValue, JsValue, JsValue)>);
    wrapper.into_js_value().unchecked_into()
}

fn forwarded_args(values: [JsValue; 3]) -> Array {
    let used = values
        .iter()
        .rposition(|value| !value.is_undefined())
        .map(|last| last + 1)
        .unwrap_or(0);
    values.into_iter().take(used).collect()
}

/// Publishes `getBreakpoint` and `debounce` on `window[namespace]`.
pub fn install(window: &Window, namespace: &str) -> Result<(), JsValue> {
    let utils = Object::new();
    let breakpoint = Closure::wrap(Box::new(get_breakpoint) as Box<dyn Fn() -> String>);
    Reflect::set(
        &utils,
        &JsValue::from_str("getBreakpoint"),
        &breakpoint.into_js_value(),
    )?;
    let debounce_fn = Closure::wrap(Box::new(|func: JsValue, wait: JsValue| -> JsValue {
        let Ok(func) = func.dyn_into::<Function>() else {
            return JsValue::UNDEFINED;
        };
        let wait_ms = wait.as_f64().unwrap_or(0.0).max(0.0).min(f64::from(u32::MAX)) as u32;
        debounce(func, wait_ms).into()
    }) as Box<dyn Fn(JsValue, JsValue) -> JsValue>);
    Reflect::set(
        &utils,
        &JsValue::from_str("debounce"),
        &debounce_fn.into_js_value(),
    )?;
    Reflect::set(window, &JsValue::from_str(namespace), &utils)?;
    Ok(())
}
