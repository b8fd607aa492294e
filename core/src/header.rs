use crate::config::BehaviorConfig;

pub const HEADER_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const HEADER_HIDDEN_TRANSFORM: &str = "translateY(-100%)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVisibility {
    Shown,
    Hidden,
}

impl HeaderVisibility {
    pub fn transform(self) -> &'static str {
        match self {
            HeaderVisibility::Shown => HEADER_SHOWN_TRANSFORM,
            HeaderVisibility::Hidden => HEADER_HIDDEN_TRANSFORM,
        }
    }
}

/// Tracks the last scroll offset so the header can slide away while the user
/// scrolls down on narrow viewports.
#[derive(Clone, Debug)]
pub struct HeaderScroller {
    last_offset: f64,
    mobile_max_width: f64,
    hide_after: f64,
}

impl HeaderScroller {
    pub fn new(mobile_max_width: f64, hide_after: f64) -> Self {
        Self {
            last_offset: 0.0,
            mobile_max_width,
            hide_after,
        }
    }

    pub fn from_config(config: &BehaviorConfig) -> Self {
        Self::new(config.mobile_max_width, config.header_hide_after)
    }

    pub fn on_scroll(&mut self, offset: f64, viewport_width: f64) -> HeaderVisibility {
        let visibility = if viewport_width <= self.mobile_max_width
            && offset > self.last_offset
            && offset > self.hide_after
        {
            HeaderVisibility::Hidden
        } else {
            HeaderVisibility::Shown
        };
        self.last_offset = offset;
        visibility
    }
}
