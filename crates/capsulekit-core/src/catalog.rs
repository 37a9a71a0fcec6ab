//! The fixed catalog of store and library assets.
//!
//! Pixel sizes are dictated by the storefront that consumes the exported
//! images; a mis-sized upload is rejected there, so these values are a
//! compatibility surface and must not drift.

use serde::Serialize;

/// Shape of an asset, used to pick the matching source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetOrientation {
    Horizontal,
    Vertical,
    Square,
}

impl AssetOrientation {
    /// Classify a width/height pair.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        match width.cmp(&height) {
            std::cmp::Ordering::Greater => AssetOrientation::Horizontal,
            std::cmp::Ordering::Less => AssetOrientation::Vertical,
            std::cmp::Ordering::Equal => AssetOrientation::Square,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Capsule,
    Library,
    Icon,
    Event,
    Other,
}

/// Advisory region that should hold the important content.
///
/// Drawn as a guide only; the crop math ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafeZone {
    pub width: u32,
    pub height: u32,
}

/// One output image the tool must produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub orientation: AssetOrientation,
    pub required: bool,
    pub category: AssetCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_zone: Option<SafeZone>,
    pub description: &'static str,
}

impl AssetDefinition {
    /// Output file name inside the export archive.
    pub fn filename(&self) -> String {
        format!("{}.png", self.id)
    }
}

/// Every asset, required ones first.
pub static ASSET_DEFINITIONS: [AssetDefinition; 14] = [
    // Store
    AssetDefinition {
        id: "header-capsule",
        name: "Header Capsule",
        width: 920,
        height: 430,
        orientation: AssetOrientation::Horizontal,
        required: true,
        category: AssetCategory::Capsule,
        safe_zone: None,
        description: "Store page header, recommendations, daily deals",
    },
    AssetDefinition {
        id: "small-capsule",
        name: "Small Capsule",
        width: 462,
        height: 174,
        orientation: AssetOrientation::Horizontal,
        required: true,
        category: AssetCategory::Capsule,
        safe_zone: None,
        description: "Search results, wishlists, lists",
    },
    AssetDefinition {
        id: "main-capsule",
        name: "Main Capsule",
        width: 1232,
        height: 706,
        orientation: AssetOrientation::Horizontal,
        required: true,
        category: AssetCategory::Capsule,
        safe_zone: None,
        description: "Featured carousel on Steam homepage",
    },
    AssetDefinition {
        id: "vertical-capsule",
        name: "Vertical Capsule",
        width: 748,
        height: 896,
        orientation: AssetOrientation::Vertical,
        required: true,
        category: AssetCategory::Capsule,
        safe_zone: None,
        description: "Special sale pages and seasonal events",
    },
    // Library
    AssetDefinition {
        id: "library-capsule",
        name: "Library Capsule",
        width: 600,
        height: 900,
        orientation: AssetOrientation::Vertical,
        required: true,
        category: AssetCategory::Library,
        safe_zone: None,
        description: "Steam Library grid view",
    },
    AssetDefinition {
        id: "library-header",
        name: "Library Header",
        width: 920,
        height: 430,
        orientation: AssetOrientation::Horizontal,
        required: true,
        category: AssetCategory::Library,
        safe_zone: None,
        description: "Library detail view, Recent Games",
    },
    AssetDefinition {
        id: "library-hero",
        name: "Library Hero",
        width: 3840,
        height: 1240,
        orientation: AssetOrientation::Horizontal,
        required: true,
        category: AssetCategory::Library,
        safe_zone: Some(SafeZone {
            width: 860,
            height: 380,
        }),
        description: "Library background image",
    },
    AssetDefinition {
        id: "library-logo",
        name: "Library Logo",
        width: 1280,
        height: 720,
        orientation: AssetOrientation::Horizontal,
        required: true,
        category: AssetCategory::Library,
        safe_zone: None,
        description: "Transparent PNG logo overlay",
    },
    // Optional
    AssetDefinition {
        id: "community-icon",
        name: "Community Icon",
        width: 184,
        height: 184,
        orientation: AssetOrientation::Square,
        required: false,
        category: AssetCategory::Icon,
        safe_zone: None,
        description: "Community hub icon",
    },
    AssetDefinition {
        id: "client-icon",
        name: "Client Icon",
        width: 32,
        height: 32,
        orientation: AssetOrientation::Square,
        required: false,
        category: AssetCategory::Icon,
        safe_zone: None,
        description: "Taskbar and dock icon",
    },
    AssetDefinition {
        id: "page-background",
        name: "Page Background",
        width: 1438,
        height: 810,
        orientation: AssetOrientation::Horizontal,
        required: false,
        category: AssetCategory::Other,
        safe_zone: None,
        description: "Store page background",
    },
    AssetDefinition {
        id: "event-cover",
        name: "Event Cover",
        width: 800,
        height: 450,
        orientation: AssetOrientation::Horizontal,
        required: false,
        category: AssetCategory::Event,
        safe_zone: None,
        description: "Event announcement cover",
    },
    AssetDefinition {
        id: "event-header",
        name: "Event Header",
        width: 1920,
        height: 622,
        orientation: AssetOrientation::Horizontal,
        required: false,
        category: AssetCategory::Event,
        safe_zone: None,
        description: "Event page header banner",
    },
    AssetDefinition {
        id: "broadcast-side-panel",
        name: "Broadcast Side Panel",
        width: 155,
        height: 337,
        orientation: AssetOrientation::Vertical,
        required: false,
        category: AssetCategory::Other,
        safe_zone: None,
        description: "Live streaming sidebar panel",
    },
];

/// Look up an asset by id.
pub fn find_asset(id: &str) -> Option<&'static AssetDefinition> {
    ASSET_DEFINITIONS.iter().find(|asset| asset.id == id)
}

pub fn required_assets() -> Vec<&'static AssetDefinition> {
    ASSET_DEFINITIONS.iter().filter(|a| a.required).collect()
}

pub fn optional_assets() -> Vec<&'static AssetDefinition> {
    ASSET_DEFINITIONS.iter().filter(|a| !a.required).collect()
}

/// Required store capsules.
pub fn store_assets() -> Vec<&'static AssetDefinition> {
    ASSET_DEFINITIONS
        .iter()
        .filter(|a| a.required && a.category == AssetCategory::Capsule)
        .collect()
}

/// Required library images.
pub fn library_assets() -> Vec<&'static AssetDefinition> {
    ASSET_DEFINITIONS
        .iter()
        .filter(|a| a.required && a.category == AssetCategory::Library)
        .collect()
}
