//! User-supplied images.

use serde::{Deserialize, Serialize};

/// Which source slot an image fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceOrientation {
    Horizontal,
    Vertical,
}

/// A decoded upload, described by the browser that decoded it.
///
/// `width` and `height` must be the actual decoded pixel size; the crop math
/// trusts them. `data_url` is the re-encodable form handed back to the
/// renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceImage {
    pub width: u32,
    pub height: u32,
    pub data_url: String,
    pub filename: String,
}

impl SourceImage {
    pub fn new(width: u32, height: u32, data_url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            width,
            height,
            data_url: data_url.into(),
            filename: filename.into(),
        }
    }

    /// Size as floats, for the crop math.
    pub fn dimensions(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    /// A zero-sized upload; nothing can be cropped from it.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
