//! The editing session.

use std::collections::HashMap;

use log::{debug, warn};

use super::source::{SourceImage, SourceOrientation};
use crate::catalog::{find_asset, required_assets, AssetDefinition, AssetOrientation, ASSET_DEFINITIONS};
use crate::geometry::{CropResult, GeometryError};
use crate::state::{AssetState, AssetStateUpdate, LogoPosition};

/// Logo overlay settings resolved for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoPlacement<'a> {
    pub image: &'a SourceImage,
    pub position: LogoPosition,
    pub scale: f64,
    pub rotation: f64,
}

/// Everything the renderer needs to draw one asset.
///
/// The renderer must draw exactly `crop` from `source`, scaled to
/// `output_width` x `output_height`, with no letterboxing.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan<'a> {
    pub asset: &'static AssetDefinition,
    pub source: &'a SourceImage,
    pub crop: CropResult,
    pub output_width: u32,
    pub output_height: u32,
    pub logo: Option<LogoPlacement<'a>>,
}

/// All state for one editing session.
///
/// Mutation goes through the methods below; derived values (current asset,
/// completion counts, ...) are recomputed on every call rather than stored.
/// Methods taking an asset id treat unknown ids as a no-op and return `None`.
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    horizontal_source: Option<SourceImage>,
    vertical_source: Option<SourceImage>,
    horizontal_background: Option<SourceImage>,
    vertical_background: Option<SourceImage>,
    logo_image: Option<SourceImage>,
    /// Global split-mode switch.
    use_split_mode: bool,
    current_asset_id: Option<&'static str>,
    asset_states: HashMap<&'static str, AssetState>,
    setup_complete: bool,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- image slots -------------------------------------------------------

    pub fn set_source_image(&mut self, orientation: SourceOrientation, image: SourceImage) {
        debug!(
            "{:?} source set: {} ({}x{})",
            orientation, image.filename, image.width, image.height
        );
        match orientation {
            SourceOrientation::Horizontal => self.horizontal_source = Some(image),
            SourceOrientation::Vertical => self.vertical_source = Some(image),
        }
    }

    pub fn set_background_image(&mut self, orientation: SourceOrientation, image: Option<SourceImage>) {
        match orientation {
            SourceOrientation::Horizontal => self.horizontal_background = image,
            SourceOrientation::Vertical => self.vertical_background = image,
        }
    }

    pub fn set_logo_image(&mut self, image: Option<SourceImage>) {
        self.logo_image = image;
    }

    pub fn source_image(&self, orientation: SourceOrientation) -> Option<&SourceImage> {
        match orientation {
            SourceOrientation::Horizontal => self.horizontal_source.as_ref(),
            SourceOrientation::Vertical => self.vertical_source.as_ref(),
        }
    }

    pub fn background_image(&self, orientation: SourceOrientation) -> Option<&SourceImage> {
        match orientation {
            SourceOrientation::Horizontal => self.horizontal_background.as_ref(),
            SourceOrientation::Vertical => self.vertical_background.as_ref(),
        }
    }

    pub fn logo_image(&self) -> Option<&SourceImage> {
        self.logo_image.as_ref()
    }

    pub fn toggle_split_mode(&mut self, enabled: bool) {
        debug!("split mode {}", if enabled { "on" } else { "off" });
        self.use_split_mode = enabled;
    }

    pub fn split_mode(&self) -> bool {
        self.use_split_mode
    }

    // ---- asset state -------------------------------------------------------

    fn state_entry(&mut self, asset: &'static AssetDefinition) -> &mut AssetState {
        self.asset_states
            .entry(asset.id)
            .or_insert_with(|| AssetState::for_asset(asset))
    }

    fn lookup(id: &str) -> Option<&'static AssetDefinition> {
        let asset = find_asset(id);
        if asset.is_none() {
            warn!("unknown asset id: {id}");
        }
        asset
    }

    /// Create default state for every catalog asset that has none yet.
    pub fn initialize_asset_states(&mut self) {
        for asset in &ASSET_DEFINITIONS {
            self.state_entry(asset);
        }
    }

    /// Make `id` the current asset, creating its state on first visit.
    pub fn select_asset(&mut self, id: &str) -> Option<&AssetState> {
        let asset = Self::lookup(id)?;
        debug!("selected asset {}", asset.id);
        self.current_asset_id = Some(asset.id);
        Some(&*self.state_entry(asset))
    }

    /// Merge `update` into the asset's state, creating it first if needed.
    ///
    /// An update the crop math cannot use is an error and changes nothing;
    /// an unknown id is `Ok(None)`.
    pub fn update_asset_state(
        &mut self,
        id: &str,
        update: &AssetStateUpdate,
    ) -> Result<Option<&AssetState>, GeometryError> {
        if let Err(e) = update.validate() {
            warn!("rejecting update for {id}: {e}");
            return Err(e);
        }
        let Some(asset) = Self::lookup(id) else {
            return Ok(None);
        };
        let state = self.state_entry(asset);
        state.apply(update)?;
        Ok(Some(&*state))
    }

    /// Throw away every edit for one asset.
    pub fn reset_asset_state(&mut self, id: &str) -> Option<&AssetState> {
        let asset = Self::lookup(id)?;
        let state = self.state_entry(asset);
        *state = AssetState::for_asset(asset);
        Some(&*state)
    }

    pub fn mark_asset_complete(&mut self, id: &str, complete: bool) -> Option<&AssetState> {
        let asset = Self::lookup(id)?;
        let state = self.state_entry(asset);
        state.is_complete = complete;
        Some(&*state)
    }

    /// Leave the setup stage: initialize every asset and select the first
    /// required one.
    pub fn complete_setup(&mut self) {
        self.initialize_asset_states();
        self.setup_complete = true;
        if let Some(first) = required_assets().first() {
            self.select_asset(first.id);
        }
        debug!("setup complete with {} asset states", self.asset_states.len());
    }

    pub fn is_setup_complete(&self) -> bool {
        self.setup_complete
    }

    pub fn asset_state(&self, id: &str) -> Option<&AssetState> {
        self.asset_states.get(id)
    }

    // ---- derived views -----------------------------------------------------

    pub fn current_asset_id(&self) -> Option<&'static str> {
        self.current_asset_id
    }

    pub fn current_asset(&self) -> Option<&'static AssetDefinition> {
        self.current_asset_id.and_then(find_asset)
    }

    pub fn current_asset_state(&self) -> Option<&AssetState> {
        self.current_asset_id.and_then(|id| self.asset_states.get(id))
    }

    /// The image backing `asset`.
    ///
    /// The background slot is used only when split mode is on both for the
    /// asset and globally. Square assets draw from the horizontal slots.
    pub fn source_for_asset(
        &self,
        asset: &AssetDefinition,
        state: Option<&AssetState>,
    ) -> Option<&SourceImage> {
        let orientation = match asset.orientation {
            AssetOrientation::Vertical => SourceOrientation::Vertical,
            AssetOrientation::Horizontal | AssetOrientation::Square => SourceOrientation::Horizontal,
        };

        let split = self.use_split_mode && state.is_some_and(|s| s.use_split_mode);
        if split {
            self.background_image(orientation)
        } else {
            self.source_image(orientation)
        }
    }

    pub fn current_source_image(&self) -> Option<&SourceImage> {
        let asset = self.current_asset()?;
        self.source_for_asset(asset, self.asset_states.get(asset.id))
    }

    pub fn completed_count(&self) -> usize {
        self.asset_states.values().filter(|s| s.is_complete).count()
    }

    /// Ids of required assets not yet marked complete, in catalog order.
    pub fn missing_required_assets(&self) -> Vec<&'static str> {
        required_assets()
            .into_iter()
            .filter(|asset| !self.asset_states.get(asset.id).is_some_and(|s| s.is_complete))
            .map(|asset| asset.id)
            .collect()
    }

    /// Gate for export: every required asset is complete.
    pub fn required_assets_complete(&self) -> bool {
        self.missing_required_assets().is_empty()
    }

    /// Gate for leaving setup: both main source images are present.
    pub fn can_proceed_to_editor(&self) -> bool {
        self.horizontal_source.is_some() && self.vertical_source.is_some()
    }

    /// Resolve source, crop and logo for one asset.
    ///
    /// Returns `None` for unknown ids, when the backing image is missing or
    /// empty, or when the crop cannot be computed. An asset never visited is
    /// planned with its default state.
    pub fn render_plan(&self, id: &str) -> Option<RenderPlan<'_>> {
        let asset = Self::lookup(id)?;
        let default_state;
        let state = match self.asset_states.get(asset.id) {
            Some(state) => state,
            None => {
                default_state = AssetState::for_asset(asset);
                &default_state
            }
        };

        let source = self.source_for_asset(asset, Some(state))?;
        if source.is_empty() {
            warn!("no render plan for {}: source {} is empty", asset.id, source.filename);
            return None;
        }
        let (source_width, source_height) = source.dimensions();
        let crop = match state.crop(source_width, source_height, asset) {
            Ok(crop) => crop,
            Err(e) => {
                warn!("no render plan for {}: {e}", asset.id);
                return None;
            }
        };
        let logo = self.logo_image.as_ref().map(|image| LogoPlacement {
            image,
            position: state.logo_position,
            scale: state.logo_scale,
            rotation: state.logo_rotation,
        });

        Some(RenderPlan {
            asset,
            source,
            crop,
            output_width: asset.width,
            output_height: asset.height,
            logo,
        })
    }
}
