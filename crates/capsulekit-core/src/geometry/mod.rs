//! Crop geometry and canvas view math.
//!
//! Everything in this module is a pure function of its inputs: no state is
//! shared between calls, so results can be recomputed freely whenever the
//! source image, the target asset or the user's adjustments change.
//!
//! # Coordinate System
//!
//! - Crop rectangles are in source-image pixels
//! - Viewport points are in container (screen) pixels
//! - Origin is the top-left corner

mod anchor;
mod crop;
mod viewport;

pub use anchor::{CropAnchor, HorizontalAnchor, ParseAnchorError, VerticalAnchor};
pub use crop::{
    calculate_crop, max_offset, try_calculate_crop, try_max_offset, CropRequest, CropResult,
    GeometryError, MaxOffset,
};
pub use viewport::{CanvasViewport, Point};
