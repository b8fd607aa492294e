use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, TouchEvent};

use crate::dom;
use folio_core::{activation_key, BehaviorConfig, TapGesture};

const ACTIVE_OPTIONS: EventListenerOptions = EventListenerOptions {
    phase: EventListenerPhase::Bubble,
    passive: false,
};

/// Makes each project card behave like its link for keyboard and touch users.
/// Cards without a link are skipped.
pub fn install(scope: &Element, config: &BehaviorConfig) -> Result<Vec<EventListener>, JsValue> {
    let cards = dom::query_all_html(scope, &config.card_selector)?;
    let mut listeners = Vec::with_capacity(cards.len() * 4);
    for card in cards {
        let Some(link) = dom::query_html(&card, &config.card_link_selector)? else {
            continue;
        };
        card.set_tab_index(0);
        listeners.push(activation_key_listener(&card, link.clone()));
        listeners.extend(touch_listeners(&card, link, TapGesture::from_config(config)));
    }
    Ok(listeners)
}

pub(crate) fn activation_key_listener(target: &HtmlElement, link: HtmlElement) -> EventListener {
    EventListener::new_with_options(target, "keydown", ACTIVE_OPTIONS, move |event: &Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if !activation_key(&event.key()) {
            return;
        }
        event.prevent_default();
        link.click();
    })
}

fn touch_listeners(
    card: &HtmlElement,
    link: HtmlElement,
    gesture: TapGesture,
) -> [EventListener; 3] {
    let gesture = Rc::new(RefCell::new(gesture));

    let start_gesture = gesture.clone();
    let start = EventListener::new(card, "touchstart", move |event: &Event| {
        let Some(y) = first_touch_y(event) else {
            return;
        };
        start_gesture.borrow_mut().start(y, event.time_stamp());
    });

    let move_gesture = gesture.clone();
    let moved = EventListener::new(card, "touchmove", move |event: &Event| {
        let Some(y) = first_touch_y(event) else {
            return;
        };
        move_gesture.borrow_mut().moved(y);
    });

    let end = EventListener::new_with_options(
        card,
        "touchend",
        ACTIVE_OPTIONS,
        move |event: &Event| {
            let outcome = gesture.borrow_mut().end(event.time_stamp());
            if outcome.activates() {
                event.prevent_default();
                link.click();
            }
        },
    );

    [start, moved, end]
}

fn first_touch_y(event: &Event) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event.touches().get(0)?;
    Some(f64::from(touch.client_y()))
}
