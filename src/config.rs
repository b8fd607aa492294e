use gloo::console;
use web_sys::Document;

use folio_core::{BehaviorConfig, CONFIG_ATTR_PREFIX};

pub const CONFIG_SCRIPT_ID: &str = "folio-config";

/// Defaults, then the inline JSON block, then `data-folio-*` attributes on
/// `<html>`. Bad input is logged and skipped.
pub fn load_config(document: &Document) -> BehaviorConfig {
    let mut config = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| match BehaviorConfig::from_json(&raw) {
            Ok(config) => Some(config),
            Err(err) => {
                console::warn!("ignoring page config", err.to_string());
                None
            }
        })
        .unwrap_or_default();

    let Some(root) = document.document_element() else {
        return config;
    };
    for name in root.get_attribute_names().iter() {
        let Some(name) = name.as_string() else {
            continue;
        };
        if !name.starts_with(CONFIG_ATTR_PREFIX) {
            continue;
        }
        let value = root.get_attribute(&name).unwrap_or_default();
        let mut candidate = config.clone();
        match candidate
            .apply_override(&name, &value)
            .and_then(|()| candidate.validate())
        {
            Ok(()) => config = candidate,
            Err(err) => console::warn!("ignoring page config attribute", name, err.to_string()),
        }
    }
    config
}
