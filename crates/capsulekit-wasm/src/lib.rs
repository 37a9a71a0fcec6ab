//! Capsulekit WASM - WebAssembly bindings for Capsulekit
//!
//! This crate exposes the capsulekit-core crop math, asset catalog and
//! session store to the browser editor. Rendering and zipping stay in
//! JavaScript; this side decides what to draw and validates what comes back.
//!
//! # Module Structure
//!
//! - `geometry` - Crop rectangles, offset ranges and the canvas viewport
//! - `catalog` - Steam asset definitions
//! - `store` - Editor session state
//! - `export` - Collecting rendered PNGs for the archive
//! - `types` - WASM-compatible wrapper types
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSessionStore, set_log_level } from '@capsulekit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//! set_log_level('debug');
//!
//! const store = new JsSessionStore();
//! store.set_source_image('horizontal', img.width, img.height, dataUrl, file.name);
//! store.set_source_image('vertical', tall.width, tall.height, tallUrl, tallFile.name);
//! if (store.can_proceed_to_editor) store.complete_setup();
//! const plan = store.render_plan(store.current_asset_id);
//! ```

use capsulekit_core::config::EditorConfig;
use log::LevelFilter;
use wasm_bindgen::prelude::*;

mod catalog;
mod export;
mod geometry;
mod logger;
mod store;
mod types;

// Re-export public types
pub use catalog::{asset_definitions, asset_ids};
pub use export::JsExportBundle;
pub use geometry::{calculate_crop, get_max_offset, JsCanvasViewport};
pub use store::JsSessionStore;
pub use types::{JsCropResult, JsMaxOffset};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::init(LevelFilter::Info);
}

/// Change the console log level (`"off"`, `"error"` ... `"trace"`).
///
/// Returns false and leaves the level alone if the name is not recognized.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match logger::level_from_str(level) {
        Some(level) => {
            logger::init(level);
            true
        }
        None => false,
    }
}

/// Fill a partial `EditorConfig` object with defaults and validate it.
///
/// The result is the complete config, ready to pass its `zoom` and `export`
/// sections to `JsCanvasViewport.with_config` / `JsExportBundle.with_config`.
#[wasm_bindgen]
pub fn editor_config(partial: JsValue) -> Result<JsValue, JsValue> {
    let config: EditorConfig = serde_wasm_bindgen::from_value(partial).map_err(types::js_error)?;
    config.validate().map_err(types::js_error)?;
    serde_wasm_bindgen::to_value(&config).map_err(types::js_error)
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
