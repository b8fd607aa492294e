use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use crate::capabilities::Capabilities;
use crate::dom;
use folio_core::{BehaviorConfig, LazyImage};

type ObserverCallback = dyn FnMut(js_sys::Array, IntersectionObserver);

/// Watches deferred images until each one scrolls into view.
pub struct LazyImageLoader {
    observer: IntersectionObserver,
    _callback: Closure<ObserverCallback>,
    observed: usize,
}

impl LazyImageLoader {
    pub fn observed(&self) -> usize {
        self.observed
    }
}

impl Drop for LazyImageLoader {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn install(
    scope: &Element,
    config: &BehaviorConfig,
    capabilities: Capabilities,
) -> Result<Option<LazyImageLoader>, JsValue> {
    if !capabilities.observe_visibility {
        return Ok(None);
    }
    let images = dom::query_all(scope, &config.lazy_image_selector())?;
    if images.is_empty() {
        return Ok(None);
    }
    let deferred_attr = config.deferred_src_attr.clone();
    let lazy_class = config.lazy_class.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                reveal(&target, &deferred_attr, &lazy_class);
                observer.unobserve(&target);
            }
        },
    ) as Box<ObserverCallback>);
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    for image in &images {
        observer.observe(image);
    }
    Ok(Some(LazyImageLoader {
        observer,
        _callback: callback,
        observed: images.len(),
    }))
}

/// Swaps the deferred source in. Returns false when the image was not pending.
pub fn reveal(image: &Element, deferred_attr: &str, lazy_class: &str) -> bool {
    let class_list = image.class_list();
    let mut state = LazyImage {
        deferred_src: image.get_attribute(deferred_attr),
        has_lazy_class: class_list.contains(lazy_class),
    };
    let Some(update) = state.reveal() else {
        return false;
    };
    let _ = image.set_attribute("src", &update.src);
    if update.remove_deferred_attr {
        let _ = image.remove_attribute(deferred_attr);
    }
    if update.remove_lazy_class {
        let _ = class_list.remove_1(lazy_class);
    }
    true
}
