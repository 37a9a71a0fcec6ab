//! Capsulekit Core - store asset editing library
//!
//! This crate provides the core of Capsulekit, a tool that cuts a fixed
//! catalog of store and library images out of a couple of source photos:
//! crop geometry, the asset catalog, per-asset edit state, the session store
//! and export bundle assembly.
//!
//! Pixel work (decoding uploads, drawing, PNG encoding) happens in the
//! browser; this crate only computes what to draw and checks what comes back.

pub mod catalog;
pub mod config;
pub mod export;
pub mod geometry;
pub mod state;
pub mod store;

pub use catalog::{find_asset, AssetCategory, AssetDefinition, AssetOrientation, ASSET_DEFINITIONS};
pub use config::{ConfigError, EditorConfig};
pub use export::{ExportBundle, ExportError, RasterOutput};
pub use geometry::{calculate_crop, max_offset, CropAnchor, CropResult, MaxOffset};
pub use state::{AssetState, AssetStateUpdate, LogoPosition};
pub use store::{SessionStore, SourceImage, SourceOrientation};
