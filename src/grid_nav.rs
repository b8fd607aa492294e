use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, KeyboardEvent};

use crate::dom;
use folio_core::{grid_key_action, is_escape, BehaviorConfig, GridAction};

pub fn install(scope: &Element, config: &BehaviorConfig) -> Result<Vec<EventListener>, JsValue> {
    let items = Rc::new(dom::query_all_html(scope, &config.grid_item_selector)?);
    let mut listeners = Vec::with_capacity(items.len() + 1);
    for (index, item) in items.iter().enumerate() {
        let link = dom::query_html(item, &config.grid_link_selector)?;
        item.set_tab_index(0);
        let items = items.clone();
        let listener = EventListener::new_with_options(
            item,
            "keydown",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                match grid_key_action(&event.key(), index, items.len()) {
                    GridAction::Activate => {
                        let Some(link) = link.as_ref() else {
                            return;
                        };
                        event.prevent_default();
                        link.click();
                    }
                    GridAction::Focus(next) => {
                        event.prevent_default();
                        if let Some(next) = items.get(next) {
                            let _ = next.focus();
                        }
                    }
                    GridAction::Stay => event.prevent_default(),
                    GridAction::Ignore => {}
                }
            },
        );
        listeners.push(listener);
    }
    if let Some(listener) = escape_listener(scope, config)? {
        listeners.push(listener);
    }
    Ok(listeners)
}

/// Escape anywhere under `scope` follows the page's back link.
fn escape_listener(
    scope: &Element,
    config: &BehaviorConfig,
) -> Result<Option<EventListener>, JsValue> {
    let Some(back_link) = dom::query_html(scope, &config.back_link_selector)? else {
        return Ok(None);
    };
    Ok(Some(EventListener::new(scope, "keydown", move |event: &Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if is_escape(&event.key()) {
            back_link.click();
        }
    })))
}

