//! WASM bindings for crop geometry and the canvas viewport.
//!
//! The bindings use the validated core entry points, so a zero scale or a
//! non-positive dimension raises a JS exception instead of producing NaN
//! coordinates on the canvas.

use crate::types::{anchor_from_str, js_error, JsCropResult, JsMaxOffset};
use capsulekit_core::config::ZoomConfig;
use capsulekit_core::geometry::{
    try_calculate_crop, try_max_offset, CanvasViewport, CropRequest, Point,
};
use wasm_bindgen::prelude::*;

/// Compute the crop rectangle for an asset.
///
/// # Arguments
///
/// * `source_width`, `source_height` - Source image size in pixels
/// * `target_width`, `target_height` - Asset output size in pixels
/// * `anchor` - One of `"left-top"` ... `"right-bottom"`
/// * `scale` - Zoom factor (> 0)
/// * `offset_x`, `offset_y` - Pixel offset from the anchored position
///
/// # Example (TypeScript)
///
/// ```typescript
/// const crop = calculate_crop(img.width, img.height, 920, 430, 'center-middle', 1, 0, 0);
/// ctx.drawImage(img, crop.crop_x, crop.crop_y, crop.crop_width, crop.crop_height, 0, 0, 920, 430);
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn calculate_crop(
    source_width: f64,
    source_height: f64,
    target_width: f64,
    target_height: f64,
    anchor: &str,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
) -> Result<JsCropResult, JsValue> {
    let anchor = anchor_from_str(anchor).map_err(js_error)?;
    let request = CropRequest::new(source_width, source_height, target_width, target_height)
        .with_anchor(anchor)
        .with_scale(scale)
        .with_offset(offset_x, offset_y);

    try_calculate_crop(&request).map(JsCropResult::from).map_err(js_error)
}

/// Half-slack offset range for a centered crop, used to size sliders.
#[wasm_bindgen]
pub fn get_max_offset(
    source_width: f64,
    source_height: f64,
    target_width: f64,
    target_height: f64,
    scale: f64,
) -> Result<JsMaxOffset, JsValue> {
    let request = CropRequest::new(source_width, source_height, target_width, target_height)
        .with_scale(scale);

    try_max_offset(&request).map(JsMaxOffset::from).map_err(js_error)
}

/// Zoom/pan state of the editor canvas.
#[wasm_bindgen]
pub struct JsCanvasViewport {
    inner: CanvasViewport,
}

#[wasm_bindgen]
impl JsCanvasViewport {
    /// Create a viewport with the default zoom limits.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: CanvasViewport::default(),
        }
    }

    /// Create a viewport from a partial `ZoomConfig` object.
    pub fn with_config(config: JsValue) -> Result<JsCanvasViewport, JsValue> {
        let zoom: ZoomConfig = serde_wasm_bindgen::from_value(config).map_err(js_error)?;
        zoom.validate().map_err(js_error)?;
        Ok(Self {
            inner: CanvasViewport::new(zoom),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.scale()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.position().x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.position().y
    }

    /// Zoom one step around the pointer; positive `delta_y` zooms out.
    ///
    /// Pass the stage's live `stage.x()` / `stage.y()` so a drag since the
    /// last zoom is taken into account.
    pub fn handle_wheel(
        &mut self,
        pointer_x: f64,
        pointer_y: f64,
        stage_x: f64,
        stage_y: f64,
        delta_y: f64,
    ) {
        self.inner.handle_wheel(
            Point::new(pointer_x, pointer_y),
            Point::new(stage_x, stage_y),
            delta_y,
        );
    }

    /// Sync the stage position after a drag ends.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.inner.set_position(Point::new(x, y));
    }

    pub fn zoom_in(&mut self) {
        self.inner.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.inner.zoom_out();
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn fit_to_container(
        &mut self,
        container_width: f64,
        container_height: f64,
        asset_width: f64,
        asset_height: f64,
    ) {
        self.inner
            .fit_to_container(container_width, container_height, asset_width, asset_height);
    }
}

impl Default for JsCanvasViewport {
    fn default() -> Self {
        Self::new()
    }
}
