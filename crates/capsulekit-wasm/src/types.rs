//! WASM-compatible wrapper types and argument conversions.
//!
//! JavaScript passes anchors and orientations as strings and images as
//! plain objects; this module turns them into the core types and back.

use capsulekit_core::geometry::{CropAnchor, CropResult, MaxOffset};
use capsulekit_core::store::{RenderPlan, SourceOrientation};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A crop rectangle for JavaScript, in source pixels.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsCropResult {
    inner: CropResult,
}

#[wasm_bindgen]
impl JsCropResult {
    #[wasm_bindgen(getter)]
    pub fn crop_x(&self) -> f64 {
        self.inner.crop_x
    }

    #[wasm_bindgen(getter)]
    pub fn crop_y(&self) -> f64 {
        self.inner.crop_y
    }

    #[wasm_bindgen(getter)]
    pub fn crop_width(&self) -> f64 {
        self.inner.crop_width
    }

    #[wasm_bindgen(getter)]
    pub fn crop_height(&self) -> f64 {
        self.inner.crop_height
    }
}

impl From<CropResult> for JsCropResult {
    fn from(inner: CropResult) -> Self {
        Self { inner }
    }
}

/// Offset slider range for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsMaxOffset {
    inner: MaxOffset,
}

#[wasm_bindgen]
impl JsMaxOffset {
    #[wasm_bindgen(getter)]
    pub fn max_offset_x(&self) -> f64 {
        self.inner.max_offset_x
    }

    #[wasm_bindgen(getter)]
    pub fn max_offset_y(&self) -> f64 {
        self.inner.max_offset_y
    }
}

impl From<MaxOffset> for JsMaxOffset {
    fn from(inner: MaxOffset) -> Self {
        Self { inner }
    }
}

/// Render plan as a plain JS object.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RenderPlanJs<'a> {
    asset_id: &'static str,
    source_data_url: &'a str,
    source_filename: &'a str,
    source_width: u32,
    source_height: u32,
    crop: CropResult,
    /// `crop` as `[left, top, width, height]` fractions of the source.
    normalized_crop: [f64; 4],
    output_width: u32,
    output_height: u32,
    logo: Option<LogoJs<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LogoJs<'a> {
    data_url: &'a str,
    width: u32,
    height: u32,
    x: f64,
    y: f64,
    scale: f64,
    rotation: f64,
}

impl<'a> From<&RenderPlan<'a>> for RenderPlanJs<'a> {
    fn from(plan: &RenderPlan<'a>) -> Self {
        Self {
            asset_id: plan.asset.id,
            source_data_url: &plan.source.data_url,
            source_filename: &plan.source.filename,
            source_width: plan.source.width,
            source_height: plan.source.height,
            crop: plan.crop,
            normalized_crop: {
                let (width, height) = plan.source.dimensions();
                let (left, top, w, h) = plan.crop.to_normalized(width, height);
                [left, top, w, h]
            },
            output_width: plan.output_width,
            output_height: plan.output_height,
            logo: plan.logo.as_ref().map(|logo| LogoJs {
                data_url: &logo.image.data_url,
                width: logo.image.width,
                height: logo.image.height,
                x: logo.position.x,
                y: logo.position.y,
                scale: logo.scale,
                rotation: logo.rotation,
            }),
        }
    }
}

/// Parse `"horizontal"` / `"vertical"`.
pub(crate) fn orientation_from_str(value: &str) -> Result<SourceOrientation, String> {
    match value {
        "horizontal" => Ok(SourceOrientation::Horizontal),
        "vertical" => Ok(SourceOrientation::Vertical),
        other => Err(format!("Unknown source orientation: {other}")),
    }
}

/// Parse an anchor such as `"left-top"`.
pub(crate) fn anchor_from_str(value: &str) -> Result<CropAnchor, String> {
    value.parse::<CropAnchor>().map_err(|e| e.to_string())
}

/// Convert any displayable error to a JS exception value.
pub(crate) fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
