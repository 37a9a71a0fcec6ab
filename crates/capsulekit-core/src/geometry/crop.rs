//! Crop rectangle computation.
//!
//! Given the pixel size of a source image and of a target asset, these
//! functions compute the largest source region with the target's aspect
//! ratio, shrink it by the user's zoom `scale`, place it according to a
//! [`CropAnchor`] and shift it by the user's pixel offset.
//!
//! # Coordinate System
//!
//! - All values are in source-image pixels, as `f64`
//! - (0, 0) = top-left corner of the source
//! - The returned rectangle never leaves the source bounds
//!
//! # Example
//!
//! ```ignore
//! // Header capsule (920x430) cut from a 2000x1000 photo
//! let crop = calculate_crop(2000.0, 1000.0, 920.0, 430.0, CropAnchor::CenterMiddle, 1.0, 0.0, 0.0);
//! assert_eq!(crop.crop_x, 0.0);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::anchor::CropAnchor;

/// Errors reported by the validated geometry entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A source or target dimension is zero, negative or not finite.
    #[error("Invalid {name}: {value} (must be a positive, finite number)")]
    InvalidDimension { name: &'static str, value: f64 },

    /// Zoom scale is zero, negative or not finite.
    #[error("Invalid scale: {0} (must be a positive, finite number)")]
    InvalidScale(f64),

    /// A user offset is NaN or infinite.
    #[error("Non-finite {axis} offset: {value}")]
    NonFiniteOffset { axis: &'static str, value: f64 },
}

/// A crop rectangle in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropResult {
    pub crop_x: f64,
    pub crop_y: f64,
    pub crop_width: f64,
    pub crop_height: f64,
}

impl CropResult {
    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.crop_x + self.crop_width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.crop_y + self.crop_height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.crop_width / self.crop_height
    }

    /// Express the rectangle as normalized `(left, top, width, height)`
    /// fractions of the source dimensions, each in `0.0..=1.0`.
    pub fn to_normalized(&self, source_width: f64, source_height: f64) -> (f64, f64, f64, f64) {
        (
            self.crop_x / source_width,
            self.crop_y / source_height,
            self.crop_width / source_width,
            self.crop_height / source_height,
        )
    }
}

/// Half of the slack left around a centered crop window.
///
/// This is the offset range a UI slider can use when the anchor is centered.
/// For edge anchors the legal offset range is asymmetric (one direction
/// gets the full slack, the other none) and this value does not describe it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxOffset {
    pub max_offset_x: f64,
    pub max_offset_y: f64,
}

/// Size of the crop window before it is clamped to the source bounds.
///
/// A source relatively wider than the target is height-limited, anything
/// else (including an exact aspect match) is width-limited.
fn crop_size(
    source_width: f64,
    source_height: f64,
    target_width: f64,
    target_height: f64,
    scale: f64,
) -> (f64, f64) {
    let source_aspect = source_width / source_height;
    let target_aspect = target_width / target_height;

    if source_aspect > target_aspect {
        let crop_height = source_height / scale;
        (crop_height * target_aspect, crop_height)
    } else {
        let crop_width = source_width / scale;
        (crop_width, crop_width / target_aspect)
    }
}

/// Compute the crop rectangle for one asset.
///
/// # Arguments
///
/// * `source_width`, `source_height` - Source image size in pixels
/// * `target_width`, `target_height` - Asset output size in pixels
/// * `anchor` - Default placement before the offset is applied
/// * `scale` - Zoom factor; 2.0 samples a region half as wide
/// * `offset_x`, `offset_y` - Pixel shift from the anchored position
///
/// # Behavior
///
/// - At `scale = 1` the window exactly fills the limiting source dimension
/// - A `scale < 1` never yields a window larger than the source
/// - Offsets past the legal range saturate at the nearest edge
/// - Inputs are not validated; a non-positive scale or dimension yields a
///   meaningless (possibly non-finite) rectangle. Use [`try_calculate_crop`]
///   to reject such inputs instead.
#[allow(clippy::too_many_arguments)]
pub fn calculate_crop(
    source_width: f64,
    source_height: f64,
    target_width: f64,
    target_height: f64,
    anchor: CropAnchor,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
) -> CropResult {
    let (crop_width, crop_height) =
        crop_size(source_width, source_height, target_width, target_height, scale);

    let crop_width = crop_width.min(source_width);
    let crop_height = crop_height.min(source_height);

    let max_x = (source_width - crop_width).max(0.0);
    let max_y = (source_height - crop_height).max(0.0);

    let anchored_x = anchor.horizontal().position(max_x);
    let anchored_y = anchor.vertical().position(max_y);

    // max/min rather than clamp: clamp panics on NaN bounds
    CropResult {
        crop_x: (anchored_x + offset_x).min(max_x).max(0.0),
        crop_y: (anchored_y + offset_y).min(max_y).max(0.0),
        crop_width,
        crop_height,
    }
}

/// Compute the half-slack offset range for a centered crop window.
///
/// Uses the same limiting-dimension rule as [`calculate_crop`] but without
/// the clamp to source bounds, so a `scale < 1` reports zero range.
pub fn max_offset(
    source_width: f64,
    source_height: f64,
    target_width: f64,
    target_height: f64,
    scale: f64,
) -> MaxOffset {
    let (crop_width, crop_height) =
        crop_size(source_width, source_height, target_width, target_height, scale);

    MaxOffset {
        max_offset_x: ((source_width - crop_width) / 2.0).max(0.0),
        max_offset_y: ((source_height - crop_height) / 2.0).max(0.0),
    }
}

/// All inputs of a crop computation, for the validated entry points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRequest {
    pub source_width: f64,
    pub source_height: f64,
    pub target_width: f64,
    pub target_height: f64,
    pub anchor: CropAnchor,
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for CropRequest {
    fn default() -> Self {
        Self {
            source_width: 1.0,
            source_height: 1.0,
            target_width: 1.0,
            target_height: 1.0,
            anchor: CropAnchor::CenterMiddle,
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl CropRequest {
    /// Request for a source/target pair with default anchor, scale and offset.
    pub fn new(source_width: f64, source_height: f64, target_width: f64, target_height: f64) -> Self {
        Self {
            source_width,
            source_height,
            target_width,
            target_height,
            ..Self::default()
        }
    }

    pub fn with_anchor(mut self, anchor: CropAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_offset(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Check that every dimension and the scale are positive and finite,
    /// and that the offsets are finite.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let dimensions = [
            ("source width", self.source_width),
            ("source height", self.source_height),
            ("target width", self.target_width),
            ("target height", self.target_height),
        ];
        for (name, value) in dimensions {
            if !(value.is_finite() && value > 0.0) {
                return Err(GeometryError::InvalidDimension { name, value });
            }
        }

        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(GeometryError::InvalidScale(self.scale));
        }

        for (axis, value) in [("x", self.offset_x), ("y", self.offset_y)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFiniteOffset { axis, value });
            }
        }

        Ok(())
    }
}

/// Validated form of [`calculate_crop`].
pub fn try_calculate_crop(request: &CropRequest) -> Result<CropResult, GeometryError> {
    request.validate()?;
    Ok(calculate_crop(
        request.source_width,
        request.source_height,
        request.target_width,
        request.target_height,
        request.anchor,
        request.scale,
        request.offset_x,
        request.offset_y,
    ))
}

/// Validated form of [`max_offset`]. Anchor and offsets are ignored.
pub fn try_max_offset(request: &CropRequest) -> Result<MaxOffset, GeometryError> {
    request.validate()?;
    Ok(max_offset(
        request.source_width,
        request.source_height,
        request.target_width,
        request.target_height,
        request.scale,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn centered(sw: f64, sh: f64, tw: f64, th: f64) -> CropResult {
        calculate_crop(sw, sh, tw, th, CropAnchor::CenterMiddle, 1.0, 0.0, 0.0)
    }

    #[test]
    fn test_header_capsule_from_wide_photo() {
        // 920/430 ≈ 2.14 is wider than 2.0, so the crop is width-limited
        let crop = centered(2000.0, 1000.0, 920.0, 430.0);
        let expected_height = 2000.0 / (920.0 / 430.0);

        assert!((crop.crop_width - 2000.0).abs() < EPS);
        assert!((crop.crop_height - expected_height).abs() < EPS);
        assert!((crop.crop_height - 934.78).abs() < 0.01);
        assert_eq!(crop.crop_x, 0.0);
        assert!((crop.crop_y - (1000.0 - expected_height) / 2.0).abs() < EPS);
        assert!((crop.crop_y - 32.6).abs() < 0.1);
    }

    #[test]
    fn test_height_limited_crop() {
        // 3000x1000 (3.0) into 16:9 (1.78): height fills, width trimmed
        let crop = centered(3000.0, 1000.0, 1600.0, 900.0);
        assert!((crop.crop_height - 1000.0).abs() < EPS);
        assert!((crop.crop_width - 1000.0 * 16.0 / 9.0).abs() < EPS);
        assert!((crop.crop_x - (3000.0 - crop.crop_width) / 2.0).abs() < EPS);
        assert_eq!(crop.crop_y, 0.0);
    }

    #[test]
    fn test_equal_aspect_takes_width_branch() {
        let crop = centered(1000.0, 500.0, 200.0, 100.0);
        assert_eq!(crop.crop_width, 1000.0);
        assert_eq!(crop.crop_height, 500.0);
        assert_eq!(crop.crop_x, 0.0);
        assert_eq!(crop.crop_y, 0.0);
    }

    #[test]
    fn test_scale_zooms_in() {
        let crop = calculate_crop(1000.0, 1000.0, 100.0, 100.0, CropAnchor::CenterMiddle, 2.0, 0.0, 0.0);
        assert_eq!(crop.crop_width, 500.0);
        assert_eq!(crop.crop_height, 500.0);
        assert_eq!(crop.crop_x, 250.0);
        assert_eq!(crop.crop_y, 250.0);
    }

    #[test]
    fn test_scale_below_one_is_clamped_to_source() {
        let crop = calculate_crop(800.0, 600.0, 100.0, 100.0, CropAnchor::CenterMiddle, 0.5, 0.0, 0.0);
        assert_eq!(crop.crop_width, 800.0);
        assert_eq!(crop.crop_height, 600.0);
        assert_eq!(crop.crop_x, 0.0);
        assert_eq!(crop.crop_y, 0.0);
    }

    #[test]
    fn test_anchor_corners() {
        // 1000x1000 into 2:1 at scale 2: window 500x250, slack 500x750
        let left_top = calculate_crop(1000.0, 1000.0, 2.0, 1.0, CropAnchor::LeftTop, 2.0, 0.0, 0.0);
        assert_eq!((left_top.crop_x, left_top.crop_y), (0.0, 0.0));

        let right_bottom =
            calculate_crop(1000.0, 1000.0, 2.0, 1.0, CropAnchor::RightBottom, 2.0, 0.0, 0.0);
        assert_eq!((right_bottom.crop_x, right_bottom.crop_y), (500.0, 750.0));

        let center = calculate_crop(1000.0, 1000.0, 2.0, 1.0, CropAnchor::CenterMiddle, 2.0, 0.0, 0.0);
        assert_eq!((center.crop_x, center.crop_y), (250.0, 375.0));

        let center_bottom =
            calculate_crop(1000.0, 1000.0, 2.0, 1.0, CropAnchor::CenterBottom, 2.0, 0.0, 0.0);
        assert_eq!((center_bottom.crop_x, center_bottom.crop_y), (250.0, 750.0));
    }

    #[test]
    fn test_anchor_corners_at_unit_scale() {
        // 2000x1000 into 1:1: window 1000x1000, slack 1000 on x only
        let wide = |anchor| calculate_crop(2000.0, 1000.0, 1.0, 1.0, anchor, 1.0, 0.0, 0.0);
        assert_eq!(wide(CropAnchor::LeftTop).crop_x, 0.0);
        assert_eq!(wide(CropAnchor::CenterMiddle).crop_x, 500.0);
        assert_eq!(wide(CropAnchor::RightBottom).crop_x, 1000.0);
        for anchor in CropAnchor::ALL {
            assert_eq!(wide(anchor).crop_y, 0.0, "{anchor}");
        }

        // 1000x2000 into 1:1: slack 1000 on y only
        let tall = |anchor| calculate_crop(1000.0, 2000.0, 1.0, 1.0, anchor, 1.0, 0.0, 0.0);
        assert_eq!(tall(CropAnchor::LeftTop).crop_y, 0.0);
        assert_eq!(tall(CropAnchor::RightMiddle).crop_y, 500.0);
        assert_eq!(tall(CropAnchor::CenterBottom).crop_y, 1000.0);
        for anchor in CropAnchor::ALL {
            assert_eq!(tall(anchor).crop_x, 0.0, "{anchor}");
        }
    }

    #[test]
    fn test_offset_moves_window() {
        let crop = calculate_crop(1000.0, 1000.0, 1.0, 1.0, CropAnchor::CenterMiddle, 2.0, 100.0, -50.0);
        assert_eq!(crop.crop_x, 350.0);
        assert_eq!(crop.crop_y, 200.0);
    }

    #[test]
    fn test_offset_saturates_at_edges() {
        let far_right =
            calculate_crop(1000.0, 1000.0, 1.0, 1.0, CropAnchor::CenterMiddle, 2.0, 10_000.0, 10_000.0);
        assert_eq!(far_right.crop_x, 500.0);
        assert_eq!(far_right.crop_y, 500.0);

        let far_left =
            calculate_crop(1000.0, 1000.0, 1.0, 1.0, CropAnchor::CenterMiddle, 2.0, -10_000.0, -10_000.0);
        assert_eq!(far_left.crop_x, 0.0);
        assert_eq!(far_left.crop_y, 0.0);
    }

    #[test]
    fn test_offset_on_left_anchor_only_moves_right() {
        let crop = calculate_crop(1000.0, 1000.0, 1.0, 1.0, CropAnchor::LeftTop, 2.0, -100.0, 0.0);
        assert_eq!(crop.crop_x, 0.0);
    }

    #[test]
    fn test_max_offset_is_half_slack() {
        let offset = max_offset(1000.0, 1000.0, 1.0, 1.0, 2.0);
        assert_eq!(offset.max_offset_x, 250.0);
        assert_eq!(offset.max_offset_y, 250.0);
    }

    #[test]
    fn test_max_offset_at_unit_scale() {
        // Width-limited: no horizontal range, half the vertical slack
        let offset = max_offset(2000.0, 1000.0, 920.0, 430.0, 1.0);
        let crop_height = 2000.0 / (920.0 / 430.0);
        assert_eq!(offset.max_offset_x, 0.0);
        assert!((offset.max_offset_y - (1000.0 - crop_height) / 2.0).abs() < EPS);
    }

    #[test]
    fn test_max_offset_never_negative() {
        let offset = max_offset(800.0, 600.0, 1.0, 1.0, 0.25);
        assert_eq!(offset.max_offset_x, 0.0);
        assert_eq!(offset.max_offset_y, 0.0);
    }

    #[test]
    fn test_max_offset_matches_center_range() {
        let sw = 1600.0;
        let sh = 1200.0;
        let offset = max_offset(sw, sh, 600.0, 900.0, 1.5);
        let centered = calculate_crop(sw, sh, 600.0, 900.0, CropAnchor::CenterMiddle, 1.5, 0.0, 0.0);
        let pushed = calculate_crop(
            sw,
            sh,
            600.0,
            900.0,
            CropAnchor::CenterMiddle,
            1.5,
            offset.max_offset_x,
            offset.max_offset_y,
        );
        assert!((pushed.right() - sw).abs() < 1e-6);
        assert!((pushed.bottom() - sh).abs() < 1e-6);
        assert!((pushed.crop_x - centered.crop_x - offset.max_offset_x).abs() < 1e-6);
    }

    #[test]
    fn test_unvalidated_zero_scale_clamps_to_source() {
        let crop = calculate_crop(100.0, 100.0, 1.0, 1.0, CropAnchor::CenterMiddle, 0.0, 0.0, 0.0);
        // Division by zero gives an infinite window, clamped back to the source
        assert_eq!(crop.crop_width, 100.0);
        assert_eq!(crop.crop_height, 100.0);
        let offset = max_offset(100.0, 100.0, 1.0, 1.0, 0.0);
        assert_eq!(offset.max_offset_x, 0.0);
    }

    #[test]
    fn test_crop_result_helpers() {
        let crop = CropResult {
            crop_x: 10.0,
            crop_y: 20.0,
            crop_width: 200.0,
            crop_height: 100.0,
        };
        assert_eq!(crop.right(), 210.0);
        assert_eq!(crop.bottom(), 120.0);
        assert_eq!(crop.aspect_ratio(), 2.0);
        assert_eq!(crop.to_normalized(400.0, 200.0), (0.025, 0.1, 0.5, 0.5));
    }

    #[test]
    fn test_try_calculate_crop_valid() {
        let request = CropRequest::new(2000.0, 1000.0, 920.0, 430.0)
            .with_anchor(CropAnchor::LeftTop)
            .with_scale(1.25)
            .with_offset(10.0, 5.0);
        let checked = try_calculate_crop(&request).unwrap();
        let raw = calculate_crop(2000.0, 1000.0, 920.0, 430.0, CropAnchor::LeftTop, 1.25, 10.0, 5.0);
        assert_eq!(checked, raw);
    }

    #[test]
    fn test_try_calculate_crop_rejects_zero_scale() {
        let request = CropRequest::new(100.0, 100.0, 1.0, 1.0).with_scale(0.0);
        assert_eq!(try_calculate_crop(&request), Err(GeometryError::InvalidScale(0.0)));
    }

    #[test]
    fn test_try_calculate_crop_rejects_bad_dimension() {
        let request = CropRequest::new(100.0, -1.0, 1.0, 1.0);
        let err = try_calculate_crop(&request).unwrap_err();
        assert_eq!(
            err,
            GeometryError::InvalidDimension {
                name: "source height",
                value: -1.0
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid source height: -1 (must be a positive, finite number)"
        );

        let request = CropRequest::new(100.0, 100.0, f64::INFINITY, 1.0);
        assert!(matches!(
            try_max_offset(&request),
            Err(GeometryError::InvalidDimension { name: "target width", .. })
        ));
    }

    #[test]
    fn test_try_calculate_crop_rejects_nan_offset() {
        let request = CropRequest::new(100.0, 100.0, 1.0, 1.0).with_offset(0.0, f64::NAN);
        assert!(matches!(
            try_calculate_crop(&request),
            Err(GeometryError::NonFiniteOffset { axis: "y", .. })
        ));
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(CropResult::default()).unwrap();
        assert!(json.get("cropX").is_some());
        assert!(json.get("cropHeight").is_some());
        let json = serde_json::to_value(MaxOffset::default()).unwrap();
        assert!(json.get("maxOffsetY").is_some());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
