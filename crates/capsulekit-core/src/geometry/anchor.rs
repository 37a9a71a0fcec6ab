//! Crop anchors.
//!
//! An anchor picks the default position of the crop window inside the
//! source image before any user offset is applied. The string form is
//! `"<horizontal>-<vertical>"`, e.g. `"left-top"` or `"center-middle"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an anchor string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown crop anchor: {0}")]
pub struct ParseAnchorError(pub String);

/// Horizontal component of a [`CropAnchor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

impl HorizontalAnchor {
    /// Position along the axis given the available slack.
    #[inline]
    pub fn position(self, slack: f64) -> f64 {
        match self {
            HorizontalAnchor::Left => 0.0,
            HorizontalAnchor::Right => slack,
            HorizontalAnchor::Center => slack / 2.0,
        }
    }
}

/// Vertical component of a [`CropAnchor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
}

impl VerticalAnchor {
    /// Position along the axis given the available slack.
    #[inline]
    pub fn position(self, slack: f64) -> f64 {
        match self {
            VerticalAnchor::Top => 0.0,
            VerticalAnchor::Bottom => slack,
            VerticalAnchor::Middle => slack / 2.0,
        }
    }
}

/// Default placement of the crop window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CropAnchor {
    LeftTop,
    CenterTop,
    RightTop,
    LeftMiddle,
    #[default]
    CenterMiddle,
    RightMiddle,
    LeftBottom,
    CenterBottom,
    RightBottom,
}

impl CropAnchor {
    /// All nine anchors in reading order.
    pub const ALL: [CropAnchor; 9] = [
        CropAnchor::LeftTop,
        CropAnchor::CenterTop,
        CropAnchor::RightTop,
        CropAnchor::LeftMiddle,
        CropAnchor::CenterMiddle,
        CropAnchor::RightMiddle,
        CropAnchor::LeftBottom,
        CropAnchor::CenterBottom,
        CropAnchor::RightBottom,
    ];

    pub fn horizontal(self) -> HorizontalAnchor {
        match self {
            CropAnchor::LeftTop | CropAnchor::LeftMiddle | CropAnchor::LeftBottom => {
                HorizontalAnchor::Left
            }
            CropAnchor::RightTop | CropAnchor::RightMiddle | CropAnchor::RightBottom => {
                HorizontalAnchor::Right
            }
            _ => HorizontalAnchor::Center,
        }
    }

    pub fn vertical(self) -> VerticalAnchor {
        match self {
            CropAnchor::LeftTop | CropAnchor::CenterTop | CropAnchor::RightTop => {
                VerticalAnchor::Top
            }
            CropAnchor::LeftBottom | CropAnchor::CenterBottom | CropAnchor::RightBottom => {
                VerticalAnchor::Bottom
            }
            _ => VerticalAnchor::Middle,
        }
    }

    /// The kebab-case name used by the front-end.
    pub fn as_str(self) -> &'static str {
        match self {
            CropAnchor::LeftTop => "left-top",
            CropAnchor::CenterTop => "center-top",
            CropAnchor::RightTop => "right-top",
            CropAnchor::LeftMiddle => "left-middle",
            CropAnchor::CenterMiddle => "center-middle",
            CropAnchor::RightMiddle => "right-middle",
            CropAnchor::LeftBottom => "left-bottom",
            CropAnchor::CenterBottom => "center-bottom",
            CropAnchor::RightBottom => "right-bottom",
        }
    }
}

impl fmt::Display for CropAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CropAnchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CropAnchor::ALL
            .into_iter()
            .find(|anchor| anchor.as_str() == s)
            .ok_or_else(|| ParseAnchorError(s.to_string()))
    }
}
