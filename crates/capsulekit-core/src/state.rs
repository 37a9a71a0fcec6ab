//! Per-asset edit state.

use serde::{Deserialize, Serialize};

use crate::catalog::AssetDefinition;
use crate::geometry::{
    try_calculate_crop, try_max_offset, CropAnchor, CropRequest, CropResult, GeometryError, MaxOffset,
};

/// Default logo size as a fraction of the logo image.
pub const DEFAULT_LOGO_SCALE: f64 = 0.5;

/// Position of the logo overlay in asset (output) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LogoPosition {
    pub x: f64,
    pub y: f64,
}

/// The user's adjustments for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetState {
    /// Zoom factor; larger samples a smaller source region.
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub anchor: CropAnchor,
    pub logo_position: LogoPosition,
    pub logo_scale: f64,
    /// Logo rotation in degrees.
    pub logo_rotation: f64,
    /// Draw from the background image, when split mode is also on globally.
    pub use_split_mode: bool,
    pub is_complete: bool,
}

impl Default for AssetState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            anchor: CropAnchor::CenterMiddle,
            logo_position: LogoPosition::default(),
            logo_scale: DEFAULT_LOGO_SCALE,
            logo_rotation: 0.0,
            use_split_mode: false,
            is_complete: false,
        }
    }
}

impl AssetState {
    /// Fresh state for an asset; the logo starts a quarter of the way in.
    pub fn for_asset(asset: &AssetDefinition) -> Self {
        Self {
            logo_position: LogoPosition {
                x: asset.width as f64 / 4.0,
                y: asset.height as f64 / 4.0,
            },
            ..Self::default()
        }
    }

    /// Merge a partial update; `None` fields are left untouched.
    ///
    /// An update carrying a non-positive or non-finite scale, or a
    /// non-finite offset, is rejected as a whole and nothing changes.
    pub fn apply(&mut self, update: &AssetStateUpdate) -> Result<(), GeometryError> {
        update.validate()?;
        if let Some(scale) = update.scale {
            self.scale = scale;
        }
        if let Some(offset_x) = update.offset_x {
            self.offset_x = offset_x;
        }
        if let Some(offset_y) = update.offset_y {
            self.offset_y = offset_y;
        }
        if let Some(anchor) = update.anchor {
            self.anchor = anchor;
        }
        if let Some(logo_position) = update.logo_position {
            self.logo_position = logo_position;
        }
        if let Some(logo_scale) = update.logo_scale {
            self.logo_scale = logo_scale;
        }
        if let Some(logo_rotation) = update.logo_rotation {
            self.logo_rotation = logo_rotation;
        }
        if let Some(use_split_mode) = update.use_split_mode {
            self.use_split_mode = use_split_mode;
        }
        if let Some(is_complete) = update.is_complete {
            self.is_complete = is_complete;
        }
        Ok(())
    }

    fn crop_request(&self, source_width: f64, source_height: f64, asset: &AssetDefinition) -> CropRequest {
        CropRequest::new(source_width, source_height, asset.width as f64, asset.height as f64)
            .with_anchor(self.anchor)
            .with_scale(self.scale)
            .with_offset(self.offset_x, self.offset_y)
    }

    /// Crop rectangle for this state against a source of the given size.
    pub fn crop(
        &self,
        source_width: f64,
        source_height: f64,
        asset: &AssetDefinition,
    ) -> Result<CropResult, GeometryError> {
        try_calculate_crop(&self.crop_request(source_width, source_height, asset))
    }

    /// Offset slider range for this state's scale.
    pub fn max_offset(
        &self,
        source_width: f64,
        source_height: f64,
        asset: &AssetDefinition,
    ) -> Result<MaxOffset, GeometryError> {
        try_max_offset(&self.crop_request(source_width, source_height, asset))
    }
}

/// A partial [`AssetState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetStateUpdate {
    pub scale: Option<f64>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub anchor: Option<CropAnchor>,
    pub logo_position: Option<LogoPosition>,
    pub logo_scale: Option<f64>,
    pub logo_rotation: Option<f64>,
    pub use_split_mode: Option<bool>,
    pub is_complete: Option<bool>,
}

impl AssetStateUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn offset(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = Some(offset_x);
        self.offset_y = Some(offset_y);
        self
    }

    pub fn anchor(mut self, anchor: CropAnchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn logo(mut self, position: LogoPosition, scale: f64, rotation: f64) -> Self {
        self.logo_position = Some(position);
        self.logo_scale = Some(scale);
        self.logo_rotation = Some(rotation);
        self
    }

    pub fn use_split_mode(mut self, enabled: bool) -> Self {
        self.use_split_mode = Some(enabled);
        self
    }

    pub fn complete(mut self, complete: bool) -> Self {
        self.is_complete = Some(complete);
        self
    }

    /// Check the crop fields the update carries.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if let Some(scale) = self.scale {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(GeometryError::InvalidScale(scale));
            }
        }
        for (axis, value) in [("x", self.offset_x), ("y", self.offset_y)] {
            match value {
                Some(value) if !value.is_finite() => {
                    return Err(GeometryError::NonFiniteOffset { axis, value });
                }
                _ => {}
            }
        }
        Ok(())
    }
}
