use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsValue;
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;
use folio_core::{fragment_target, AnchorTarget, BehaviorConfig};

pub fn install(scope: &Element, config: &BehaviorConfig) -> Result<Vec<EventListener>, JsValue> {
    let Some(document) = scope.owner_document() else {
        return Ok(Vec::new());
    };
    let links = dom::query_all(scope, &config.anchor_selector)?;
    let mut listeners = Vec::with_capacity(links.len());
    for link in links {
        let document = document.clone();
        let link_for_click = link.clone();
        let listener = EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let href = link_for_click.get_attribute("href").unwrap_or_default();
                let AnchorTarget::Id(id) = fragment_target(&href) else {
                    return;
                };
                let Some(target) = document.get_element_by_id(&decode_fragment(&id)) else {
                    return;
                };
                event.prevent_default();
                smooth_scroll_to(&target);
            },
        );
        listeners.push(listener);
    }
    Ok(listeners)
}

pub fn smooth_scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

fn decode_fragment(value: &str) -> String {
    js_sys::decode_uri_component(value)
        .ok()
        .and_then(|decoded| decoded.as_string())
        .unwrap_or_else(|| value.to_string())
}
