//! Session store WASM bindings.
//!
//! `JsSessionStore` wraps one core [`SessionStore`]. The front-end creates a
//! single instance when the editor loads and drops it on navigation away.
//! Asset state crosses the boundary as plain camelCase objects.

use crate::types::{js_error, orientation_from_str, JsCropResult, JsMaxOffset, RenderPlanJs};
use capsulekit_core::state::AssetStateUpdate;
use capsulekit_core::store::{SessionStore, SourceImage};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct JsSessionStore {
    inner: SessionStore,
}

#[wasm_bindgen]
impl JsSessionStore {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: SessionStore::new(),
        }
    }

    // ---- image slots -------------------------------------------------------

    /// Set the main source for `"horizontal"` or `"vertical"` assets.
    pub fn set_source_image(
        &mut self,
        orientation: &str,
        width: u32,
        height: u32,
        data_url: String,
        filename: String,
    ) -> Result<(), JsValue> {
        let orientation = orientation_from_str(orientation).map_err(js_error)?;
        self.inner
            .set_source_image(orientation, SourceImage::new(width, height, data_url, filename));
        Ok(())
    }

    /// Set the split-mode background for an orientation.
    pub fn set_background_image(
        &mut self,
        orientation: &str,
        width: u32,
        height: u32,
        data_url: String,
        filename: String,
    ) -> Result<(), JsValue> {
        let orientation = orientation_from_str(orientation).map_err(js_error)?;
        self.inner.set_background_image(
            orientation,
            Some(SourceImage::new(width, height, data_url, filename)),
        );
        Ok(())
    }

    pub fn clear_background_image(&mut self, orientation: &str) -> Result<(), JsValue> {
        let orientation = orientation_from_str(orientation).map_err(js_error)?;
        self.inner.set_background_image(orientation, None);
        Ok(())
    }

    pub fn set_logo_image(&mut self, width: u32, height: u32, data_url: String, filename: String) {
        self.inner
            .set_logo_image(Some(SourceImage::new(width, height, data_url, filename)));
    }

    pub fn clear_logo_image(&mut self) {
        self.inner.set_logo_image(None);
    }

    pub fn toggle_split_mode(&mut self, enabled: bool) {
        self.inner.toggle_split_mode(enabled);
    }

    #[wasm_bindgen(getter)]
    pub fn split_mode(&self) -> bool {
        self.inner.split_mode()
    }

    // ---- asset state -------------------------------------------------------

    /// Give every catalog asset a fresh state, keeping existing ones.
    pub fn initialize_asset_states(&mut self) {
        self.inner.initialize_asset_states();
    }

    /// Returns false for an unknown asset id.
    pub fn select_asset(&mut self, id: &str) -> bool {
        self.inner.select_asset(id).is_some()
    }

    /// Merge a partial `AssetState` object. Returns false for an unknown id.
    ///
    /// Throws if the scale is not positive or an offset is not finite.
    pub fn update_asset_state(&mut self, id: &str, update: JsValue) -> Result<bool, JsValue> {
        let update: AssetStateUpdate = serde_wasm_bindgen::from_value(update).map_err(js_error)?;
        let state = self.inner.update_asset_state(id, &update).map_err(js_error)?;
        Ok(state.is_some())
    }

    /// Set the crop adjustments without going through a JS object.
    pub fn set_crop(
        &mut self,
        id: &str,
        scale: f64,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<bool, JsValue> {
        let update = AssetStateUpdate::new().scale(scale).offset(offset_x, offset_y);
        let state = self.inner.update_asset_state(id, &update).map_err(js_error)?;
        Ok(state.is_some())
    }

    pub fn reset_asset_state(&mut self, id: &str) -> bool {
        self.inner.reset_asset_state(id).is_some()
    }

    pub fn mark_asset_complete(&mut self, id: &str, complete: bool) -> bool {
        self.inner.mark_asset_complete(id, complete).is_some()
    }

    pub fn complete_setup(&mut self) {
        self.inner.complete_setup();
    }

    #[wasm_bindgen(getter)]
    pub fn setup_complete(&self) -> bool {
        self.inner.is_setup_complete()
    }

    /// State of one asset as a plain object, or `undefined`.
    pub fn asset_state(&self, id: &str) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.asset_state(id)).map_err(js_error)
    }

    // ---- derived views -----------------------------------------------------

    #[wasm_bindgen(getter)]
    pub fn current_asset_id(&self) -> Option<String> {
        self.inner.current_asset_id().map(str::to_string)
    }

    /// Current asset definition as a plain object, or `undefined`.
    pub fn current_asset(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.current_asset()).map_err(js_error)
    }

    pub fn current_asset_state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.current_asset_state()).map_err(js_error)
    }

    /// Source image backing the current asset, or `undefined`.
    pub fn current_source_image(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.current_source_image()).map_err(js_error)
    }

    /// Crop of the current asset against its source, if both exist.
    pub fn current_crop(&self) -> Option<JsCropResult> {
        let id = self.inner.current_asset_id()?;
        self.inner.render_plan(id).map(|plan| plan.crop.into())
    }

    /// Offset slider range for the current asset, if it has a source.
    pub fn current_max_offset(&self) -> Option<JsMaxOffset> {
        let asset = self.inner.current_asset()?;
        let state = self.inner.current_asset_state()?;
        let source = self.inner.current_source_image()?;
        let (width, height) = source.dimensions();
        state.max_offset(width, height, asset).ok().map(JsMaxOffset::from)
    }

    #[wasm_bindgen(getter)]
    pub fn completed_count(&self) -> usize {
        self.inner.completed_count()
    }

    #[wasm_bindgen(getter)]
    pub fn required_assets_complete(&self) -> bool {
        self.inner.required_assets_complete()
    }

    #[wasm_bindgen(getter)]
    pub fn can_proceed_to_editor(&self) -> bool {
        self.inner.can_proceed_to_editor()
    }

    pub fn missing_required_assets(&self) -> Vec<String> {
        self.inner
            .missing_required_assets()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Everything the canvas needs to draw one asset, or `undefined` when
    /// the id is unknown or its source image is missing or empty.
    pub fn render_plan(&self, id: &str) -> Result<JsValue, JsValue> {
        let plan = self.inner.render_plan(id);
        let plan = plan.as_ref().map(RenderPlanJs::from);
        serde_wasm_bindgen::to_value(&plan).map_err(js_error)
    }
}

impl Default for JsSessionStore {
    fn default() -> Self {
        Self::new()
    }
}
