use std::cell::RefCell;

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Element, Window};

use crate::capabilities::Capabilities;
use crate::lazy_images::LazyImageLoader;
use crate::{
    anchors, cards, config, dom, fallback, globals, grid_nav, header, lazy_images, perf, worker,
};
use folio_core::BehaviorConfig;

thread_local! {
    static PAGE: RefCell<Option<PageBehaviors>> = RefCell::new(None);
}

/// Every listener and observer attached to one page. Dropping it detaches
/// them all.
pub struct PageBehaviors {
    listeners: Vec<EventListener>,
    lazy_images: Option<LazyImageLoader>,
}

impl PageBehaviors {
    /// Wires the six behaviors under `scope`. A behavior that cannot install
    /// is logged and skipped; the rest still run.
    pub fn install(
        window: &Window,
        scope: &Element,
        config: &BehaviorConfig,
        capabilities: Capabilities,
    ) -> Self {
        let mut behaviors = Self {
            listeners: Vec::new(),
            lazy_images: None,
        };
        match lazy_images::install(scope, config, capabilities) {
            Ok(loader) => behaviors.lazy_images = loader,
            Err(err) => install_failed("lazy images", &err),
        }
        match header::install(window, scope, config) {
            Ok(listener) => behaviors.listeners.extend(listener),
            Err(err) => install_failed("header", &err),
        }
        behaviors.extend("anchors", anchors::install(scope, config));
        behaviors.extend("cards", cards::install(scope, config));
        behaviors.extend("grid", grid_nav::install(scope, config));
        behaviors.extend("fallback", fallback::install(scope, config));
        behaviors
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn lazy_image_count(&self) -> usize {
        self.lazy_images
            .as_ref()
            .map(LazyImageLoader::observed)
            .unwrap_or(0)
    }

    fn extend(&mut self, name: &str, result: Result<Vec<EventListener>, JsValue>) {
        match result {
            Ok(listeners) => self.listeners.extend(listeners),
            Err(err) => install_failed(name, &err),
        }
    }
}

fn install_failed(name: &str, err: &JsValue) {
    console::warn!("behavior not installed", name, dom::js_err(err));
}

pub(crate) fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event| initialize()).forget();
    } else {
        initialize();
    }
}

fn initialize() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };
    let config = config::load_config(&document);
    let capabilities = Capabilities::detect(&window);
    if let Err(err) = globals::install(&window, &config.utils_namespace) {
        console::warn!("page utilities not published", dom::js_err(&err));
    }
    worker::register(&window, capabilities, &config);
    let mut page = PageBehaviors::install(&window, &root, &config, capabilities);
    page.listeners.extend(perf::install(&window, &config));
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(page);
    });
}
