use std::fmt;

use serde::{Deserialize, Serialize};

pub const CONFIG_ATTR_PREFIX: &str = "data-folio-";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct BehaviorConfig {
    pub lazy_class: String,
    pub deferred_src_attr: String,
    pub header_selector: String,
    pub mobile_max_width: f64,
    pub header_hide_after: f64,
    pub anchor_selector: String,
    pub card_selector: String,
    pub card_link_selector: String,
    pub tap_max_duration_ms: f64,
    pub scroll_slop: f64,
    pub grid_item_selector: String,
    pub grid_link_selector: String,
    pub back_link_selector: String,
    pub image_selector: String,
    pub pdf_link_selector: String,
    pub pdf_restore_ms: u32,
    pub placeholder_class: String,
    pub load_warning_ms: f64,
    pub service_worker: Option<String>,
    pub utils_namespace: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            lazy_class: "lazy".to_string(),
            deferred_src_attr: "data-src".to_string(),
            header_selector: ".header".to_string(),
            mobile_max_width: 768.0,
            header_hide_after: 100.0,
            anchor_selector: "a[href^=\"#\"]".to_string(),
            card_selector: ".project-card".to_string(),
            card_link_selector: "a".to_string(),
            tap_max_duration_ms: 500.0,
            scroll_slop: 10.0,
            grid_item_selector: ".grid-item".to_string(),
            grid_link_selector: "a".to_string(),
            back_link_selector: ".back-link".to_string(),
            image_selector: "img".to_string(),
            pdf_link_selector: "a[href]".to_string(),
            pdf_restore_ms: 1000,
            placeholder_class: "image-placeholder".to_string(),
            load_warning_ms: 3000.0,
            service_worker: None,
            utils_namespace: "PortfolioUtils".to_string(),
        }
    }
}

impl BehaviorConfig {
    /// Selector matching images that still wait for their deferred source.
    pub fn lazy_image_selector(&self) -> String {
        format!("img.{}[{}]", self.lazy_class, self.deferred_src_attr)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: BehaviorConfig =
            serde_json::from_str(raw).map_err(|err| ConfigError::Json(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies one `data-folio-*` override. `key` is the attribute name with
    /// or without the prefix, e.g. `mobile-max-width`.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let key = key.trim();
        let key = key.strip_prefix(CONFIG_ATTR_PREFIX).unwrap_or(key);
        let value = value.trim();
        match key {
            "lazy-class" => self.lazy_class = text(key, value)?,
            "deferred-src-attr" => self.deferred_src_attr = text(key, value)?,
            "header-selector" => self.header_selector = text(key, value)?,
            "mobile-max-width" => self.mobile_max_width = number(key, value)?,
            "header-hide-after" => self.header_hide_after = number(key, value)?,
            "anchor-selector" => self.anchor_selector = text(key, value)?,
            "card-selector" => self.card_selector = text(key, value)?,
            "card-link-selector" => self.card_link_selector = text(key, value)?,
            "tap-max-duration-ms" => self.tap_max_duration_ms = number(key, value)?,
            "scroll-slop" => self.scroll_slop = number(key, value)?,
            "grid-item-selector" => self.grid_item_selector = text(key, value)?,
            "grid-link-selector" => self.grid_link_selector = text(key, value)?,
            "back-link-selector" => self.back_link_selector = text(key, value)?,
            "image-selector" => self.image_selector = text(key, value)?,
            "pdf-link-selector" => self.pdf_link_selector = text(key, value)?,
            "pdf-restore-ms" => {
                self.pdf_restore_ms = match value.parse::<u32>() {
                    Ok(parsed) if parsed > 0 => parsed,
                    _ => {
                        return Err(ConfigError::InvalidNumber {
                            key: key.to_string(),
                            value: value.to_string(),
                        })
                    }
                };
            }
            "placeholder-class" => self.placeholder_class = text(key, value)?,
            "load-warning-ms" => self.load_warning_ms = number(key, value)?,
            "service-worker" => {
                self.service_worker = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "utils-namespace" => self.utils_namespace = text(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("mobileMaxWidth", self.mobile_max_width),
            ("headerHideAfter", self.header_hide_after),
            ("tapMaxDurationMs", self.tap_max_duration_ms),
            ("scrollSlop", self.scroll_slop),
            ("loadWarningMs", self.load_warning_ms),
        ];
        for (field, value) in thresholds {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a finite, positive number",
                });
            }
        }
        if self.pdf_restore_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "pdfRestoreMs",
                reason: "must be a finite, positive number",
            });
        }
        let selectors = [
            ("lazyClass", &self.lazy_class),
            ("deferredSrcAttr", &self.deferred_src_attr),
            ("headerSelector", &self.header_selector),
            ("anchorSelector", &self.anchor_selector),
            ("cardSelector", &self.card_selector),
            ("cardLinkSelector", &self.card_link_selector),
            ("gridItemSelector", &self.grid_item_selector),
            ("gridLinkSelector", &self.grid_link_selector),
            ("backLinkSelector", &self.back_link_selector),
            ("imageSelector", &self.image_selector),
            ("pdfLinkSelector", &self.pdf_link_selector),
            ("placeholderClass", &self.placeholder_class),
            ("utilsNamespace", &self.utils_namespace),
        ];
        for (field, value) in selectors {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be empty",
                });
            }
        }
        Ok(())
    }
}

fn text(key: &str, value: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyValue(key.to_string()));
    }
    Ok(value.to_string())
}

fn number(key: &str, value: &str) -> Result<f64, ConfigError> {
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed > 0.0 => Ok(parsed),
        _ => Err(ConfigError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownKey(String),
    EmptyValue(String),
    InvalidNumber { key: String, value: String },
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    Json(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownKey(key) => write!(f, "unknown config key '{key}'"),
            ConfigError::EmptyValue(key) => write!(f, "config key '{key}' needs a value"),
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "config key '{key}' expects a positive number, got '{value}'")
            }
            ConfigError::Invalid { field, reason } => write!(f, "{field} {reason}"),
            ConfigError::Json(message) => write!(f, "invalid config json: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}
