use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, Node};

use crate::dom;
use folio_core::{is_pdf_href, BehaviorConfig, PdfLabel, Placeholder};

pub fn install(scope: &Element, config: &BehaviorConfig) -> Result<Vec<EventListener>, JsValue> {
    let mut listeners = install_image_fallbacks(scope, config)?;
    listeners.extend(install_pdf_indicators(scope, config)?);
    Ok(listeners)
}

/// Swaps every image that fails to load for a placeholder block. The listener
/// fires once per image.
pub fn install_image_fallbacks(
    scope: &Element,
    config: &BehaviorConfig,
) -> Result<Vec<EventListener>, JsValue> {
    let images = dom::query_all_html(scope, &config.image_selector)?;
    let listeners = images
        .into_iter()
        .map(|image| {
            let class_name = config.placeholder_class.clone();
            let target = image.clone();
            EventListener::once(&target, "error", move |_event| {
                if let Err(err) = show_placeholder(&image, &class_name) {
                    gloo::console::warn!("image placeholder failed", dom::js_err(&err));
                }
            })
        })
        .collect();
    Ok(listeners)
}

pub fn show_placeholder(image: &HtmlElement, class_name: &str) -> Result<Element, JsValue> {
    let document = image
        .owner_document()
        .ok_or_else(|| JsValue::from_str("image has no document"))?;
    let placeholder_spec = Placeholder::standard();
    let placeholder = document.create_element("div")?;
    placeholder.set_class_name(class_name);
    placeholder.set_attribute("style", placeholder_spec.style)?;
    placeholder.set_text_content(Some(placeholder_spec.text));
    image.style().set_property("display", "none")?;
    if let Some(parent) = image.parent_node() {
        let before: &Node = image;
        parent.insert_before(&placeholder, Some(before))?;
    }
    Ok(placeholder)
}

struct PdfLink {
    link: Element,
    label: RefCell<PdfLabel>,
    restore: RefCell<Option<Timeout>>,
}

/// Shows "Loading..." on PDF links for a moment after they are clicked.
pub fn install_pdf_indicators(
    scope: &Element,
    config: &BehaviorConfig,
) -> Result<Vec<EventListener>, JsValue> {
    let links = dom::query_all(scope, &config.pdf_link_selector)?;
    let delay_ms = config.pdf_restore_ms;
    let mut listeners = Vec::with_capacity(links.len());
    for link in links {
        let href = link.get_attribute("href").unwrap_or_default();
        if !is_pdf_href(&href) {
            continue;
        }
        let state = Rc::new(PdfLink {
            link: link.clone(),
            label: RefCell::new(PdfLabel::new()),
            restore: RefCell::new(None),
        });
        let listener = EventListener::new(&link, "click", move |_event| {
            show_loading(&state, delay_ms);
        });
        listeners.push(listener);
    }
    Ok(listeners)
}

fn show_loading(state: &Rc<PdfLink>, delay_ms: u32) {
    let current = state.link.text_content().unwrap_or_default();
    let loading = state.label.borrow_mut().begin(&current);
    state.link.set_text_content(Some(loading));
    let weak: Weak<PdfLink> = Rc::downgrade(state);
    let timeout = Timeout::new(delay_ms, move || {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let original = state.label.borrow_mut().restore();
        if let Some(original) = original {
            state.link.set_text_content(Some(original.as_str()));
        }
    });
    // Replacing the handle cancels a restore still pending from an earlier click.
    *state.restore.borrow_mut() = Some(timeout);
}
