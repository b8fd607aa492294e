pub mod anchors;
pub mod boot;
pub mod capabilities;
pub mod cards;
pub mod config;
mod dom;
pub mod fallback;
pub mod globals;
pub mod grid_nav;
pub mod header;
pub mod lazy_images;
pub mod perf;
pub mod worker;

use wasm_bindgen::prelude::*;

pub use boot::PageBehaviors;
pub use capabilities::Capabilities;
pub use folio_core::{BehaviorConfig, Breakpoint};
pub use globals::{debounce, get_breakpoint, Debouncer};

#[wasm_bindgen(start)]
pub fn start() {
    boot::start();
}
