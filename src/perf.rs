use gloo::console;
use gloo::events::EventListener;
use web_sys::Window;

use folio_core::{BehaviorConfig, LoadReport};

/// Reports how long the page took to load, once the `load` event fires.
pub fn install(window: &Window, config: &BehaviorConfig) -> Option<EventListener> {
    let budget_ms = config.load_warning_ms;
    let already_loaded = window
        .document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false);
    if already_loaded {
        report(window, budget_ms);
        return None;
    }
    let window_for_load = window.clone();
    Some(EventListener::once(window, "load", move |_event| {
        report(&window_for_load, budget_ms);
    }))
}

fn report(window: &Window, budget_ms: f64) {
    let Some(performance) = window.performance() else {
        return;
    };
    let report = LoadReport::new(performance.now(), budget_ms);
    let load_ms = report.rounded_ms() as f64;
    if report.is_slow() {
        console::warn!("page load is slow (ms)", load_ms, "budget", budget_ms);
    } else {
        console::log!("page loaded (ms)", load_ms);
    }
}
