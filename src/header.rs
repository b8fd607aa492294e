use std::cell::RefCell;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, Window};

use crate::dom;
use folio_core::{BehaviorConfig, HeaderScroller, HeaderVisibility};

/// Hides the header while scrolling down on narrow viewports. No header, no
/// listener.
pub fn install(
    window: &Window,
    scope: &Element,
    config: &BehaviorConfig,
) -> Result<Option<EventListener>, JsValue> {
    let Some(header) = dom::query_html(scope, &config.header_selector)? else {
        return Ok(None);
    };
    let scroller = RefCell::new(HeaderScroller::from_config(config));
    let window_for_scroll = window.clone();
    let listener = EventListener::new(window, "scroll", move |_event| {
        let offset = window_for_scroll.scroll_y().unwrap_or(0.0);
        let width = dom::viewport_width(&window_for_scroll);
        apply_scroll(&header, &mut scroller.borrow_mut(), offset, width);
    });
    Ok(Some(listener))
}

pub fn apply_scroll(
    header: &HtmlElement,
    scroller: &mut HeaderScroller,
    offset: f64,
    viewport_width: f64,
) -> HeaderVisibility {
    let visibility = scroller.on_scroll(offset, viewport_width);
    let _ = header
        .style()
        .set_property("transform", visibility.transform());
    visibility
}
