use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

pub(crate) fn query_all(scope: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = scope.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        let Some(node) = list.item(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub(crate) fn query_all_html(scope: &Element, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(query_all(scope, selector)?
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub(crate) fn query_html(scope: &Element, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(scope
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok()))
}

pub(crate) fn viewport_width(window: &web_sys::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(f64::INFINITY)
}

/// Readable text for a thrown value: the message of an `Error`, a thrown
/// string as is, anything else through its debug form.
pub(crate) fn js_err(error: &JsValue) -> String {
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    error
        .as_string()
        .unwrap_or_else(|| format!("{error:?}"))
}
