pub mod anchor;
pub mod breakpoint;
pub mod config;
pub mod fallback;
pub mod gesture;
pub mod grid;
pub mod header;
pub mod lazy;
pub mod perf;

pub use anchor::{fragment_target, AnchorTarget};
pub use breakpoint::{Breakpoint, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};
pub use config::{BehaviorConfig, ConfigError, CONFIG_ATTR_PREFIX};
pub use fallback::{is_pdf_href, PdfLabel, Placeholder, PDF_LOADING_LABEL, PLACEHOLDER_TEXT};
pub use gesture::{activation_key, TapGesture, TapOutcome};
pub use grid::{grid_key_action, is_escape, GridAction};
pub use header::{HeaderScroller, HeaderVisibility};
pub use lazy::{LazyImage, LazyUpdate};
pub use perf::LoadReport;
