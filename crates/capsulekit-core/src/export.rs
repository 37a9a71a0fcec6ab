//! Export bundle assembly.
//!
//! The browser rasterizes each asset to PNG; this module collects those
//! outputs, checks that each one has the exact pixel size its asset demands,
//! names the entries `{asset-id}.png` and hands the set to an [`Archiver`].
//! The size check reads the PNG header, so a canvas drawn at the wrong size
//! is caught even when the caller reports the right one.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageFormat, ImageReader};
use log::warn;
use thiserror::Error;

use crate::catalog::AssetDefinition;

/// Name of the downloaded archive unless configured otherwise.
pub const DEFAULT_ARCHIVE_NAME: &str = "steam-assets.zip";

const PNG_MIME: &str = "image/png";

/// Errors that can occur while building or writing an export bundle.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A raster does not have the exact size of its asset.
    #[error("{asset_id}: expected {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        asset_id: String,
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    /// The data URL is not a base64 data URL.
    #[error("Malformed data URL: {0}")]
    MalformedDataUrl(String),

    /// The data URL carries something other than a PNG.
    #[error("Unsupported image type: {0} (expected image/png)")]
    UnsupportedMimeType(String),

    /// The base64 payload failed to decode.
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The bytes are not a readable PNG.
    #[error("Invalid PNG data: {0}")]
    InvalidPng(String),

    /// Nothing to export.
    #[error("Export bundle is empty")]
    EmptyBundle,

    /// The archiver failed.
    #[error("Archive write failed: {0}")]
    ArchiveFailed(String),
}

/// One rasterized asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterOutput {
    pub width: u32,
    pub height: u32,
    /// PNG-encoded bytes.
    pub png: Vec<u8>,
}

impl RasterOutput {
    pub fn new(width: u32, height: u32, png: Vec<u8>) -> Self {
        Self { width, height, png }
    }

    /// Decode a `data:image/png;base64,...` URL as produced by a canvas.
    ///
    /// The pixel size is not read from the PNG; the caller reports the size
    /// it rendered at.
    pub fn from_data_url(data_url: &str, width: u32, height: u32) -> Result<Self, ExportError> {
        let rest = data_url
            .strip_prefix("data:")
            .ok_or_else(|| ExportError::MalformedDataUrl(truncate(data_url)))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ExportError::MalformedDataUrl(truncate(data_url)))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| ExportError::MalformedDataUrl(truncate(data_url)))?;

        if mime != PNG_MIME {
            return Err(ExportError::UnsupportedMimeType(mime.to_string()));
        }

        let png = STANDARD.decode(payload.trim())?;
        Ok(Self { width, height, png })
    }
}

/// Pixel size from the PNG header. Image data is not decoded.
pub fn png_dimensions(png: &[u8]) -> Result<(u32, u32), ExportError> {
    ImageReader::with_format(Cursor::new(png), ImageFormat::Png)
        .into_dimensions()
        .map_err(|e| ExportError::InvalidPng(e.to_string()))
}

fn check_size(asset: &AssetDefinition, width: u32, height: u32) -> Result<(), ExportError> {
    if width == asset.width && height == asset.height {
        return Ok(());
    }
    warn!(
        "rejecting {}: rendered {}x{}, needs {}x{}",
        asset.id, width, height, asset.width, asset.height
    );
    Err(ExportError::DimensionMismatch {
        asset_id: asset.id.to_string(),
        expected_width: asset.width,
        expected_height: asset.height,
        width,
        height,
    })
}

/// Keep error messages short; data URLs can be megabytes long.
fn truncate(s: &str) -> String {
    s.chars().take(40).collect()
}

/// A finished archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    pub asset_id: &'static str,
    pub filename: String,
    pub png: Vec<u8>,
}

/// Writes the finished bundle somewhere (a zip in the browser, a directory
/// in tests, ...). Filenames must be preserved exactly.
pub trait Archiver {
    fn write_archive(&mut self, archive_name: &str, entries: &[ExportEntry]) -> Result<(), ExportError>;
}

/// The set of rasters to export, in the order they were added.
#[derive(Debug, Clone)]
pub struct ExportBundle {
    archive_name: String,
    entries: Vec<ExportEntry>,
}

impl Default for ExportBundle {
    fn default() -> Self {
        Self::new(DEFAULT_ARCHIVE_NAME)
    }
}

impl ExportBundle {
    pub fn new(archive_name: impl Into<String>) -> Self {
        Self {
            archive_name: archive_name.into(),
            entries: Vec::new(),
        }
    }

    /// Add the raster for `asset`, replacing any earlier one.
    ///
    /// Both the reported size and the size in the PNG header must match
    /// the asset exactly.
    pub fn add(&mut self, asset: &'static AssetDefinition, raster: RasterOutput) -> Result<(), ExportError> {
        check_size(asset, raster.width, raster.height)?;
        let (width, height) = png_dimensions(&raster.png)?;
        check_size(asset, width, height)?;

        let entry = ExportEntry {
            asset_id: asset.id,
            filename: asset.filename(),
            png: raster.png,
        };
        match self.entries.iter_mut().find(|e| e.asset_id == asset.id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        Ok(())
    }

    pub fn archive_name(&self) -> &str {
        &self.archive_name
    }

    pub fn entries(&self) -> &[ExportEntry] {
        &self.entries
    }

    pub fn filenames(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.filename.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hand every entry to `archiver`.
    pub fn finish<A: Archiver>(&self, archiver: &mut A) -> Result<(), ExportError> {
        if self.entries.is_empty() {
            return Err(ExportError::EmptyBundle);
        }
        archiver.write_archive(&self.archive_name, &self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_asset;
    use image::{GrayImage, Luma};

    /// PNG signature, enough to stand in for an encoded image.
    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn solid_png(width: u32, height: u32, value: u8) -> Vec<u8> {
        let img = GrayImage::from_pixel(width, height, Luma([value]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    #[derive(Default)]
    struct RecordingArchiver {
        name: Option<String>,
        filenames: Vec<String>,
    }

    impl Archiver for RecordingArchiver {
        fn write_archive(&mut self, archive_name: &str, entries: &[ExportEntry]) -> Result<(), ExportError> {
            self.name = Some(archive_name.to_string());
            self.filenames = entries.iter().map(|e| e.filename.clone()).collect();
            Ok(())
        }
    }

    struct FailingArchiver;

    impl Archiver for FailingArchiver {
        fn write_archive(&mut self, _: &str, _: &[ExportEntry]) -> Result<(), ExportError> {
            Err(ExportError::ArchiveFailed("disk full".to_string()))
        }
    }

    fn raster_for(id: &str) -> RasterOutput {
        let asset = find_asset(id).unwrap();
        RasterOutput::new(asset.width, asset.height, solid_png(asset.width, asset.height, 0))
    }

    #[test]
    fn test_from_data_url() {
        let url = format!("data:image/png;base64,{}", STANDARD.encode(PNG_MAGIC));
        let raster = RasterOutput::from_data_url(&url, 920, 430).unwrap();
        assert_eq!(raster.png, PNG_MAGIC.to_vec());
        assert_eq!((raster.width, raster.height), (920, 430));
    }

    #[test]
    fn test_from_data_url_rejects_jpeg() {
        let err = RasterOutput::from_data_url("data:image/jpeg;base64,AAAA", 1, 1).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedMimeType(ref m) if m == "image/jpeg"));
    }

    #[test]
    fn test_from_data_url_rejects_malformed() {
        assert!(matches!(
            RasterOutput::from_data_url("image/png;base64,AAAA", 1, 1),
            Err(ExportError::MalformedDataUrl(_))
        ));
        assert!(matches!(
            RasterOutput::from_data_url("data:image/png;base64", 1, 1),
            Err(ExportError::MalformedDataUrl(_))
        ));
        assert!(matches!(
            RasterOutput::from_data_url("data:image/png,rawbytes", 1, 1),
            Err(ExportError::MalformedDataUrl(_))
        ));
    }

    #[test]
    fn test_from_data_url_rejects_bad_base64() {
        assert!(matches!(
            RasterOutput::from_data_url("data:image/png;base64,@@@@", 1, 1),
            Err(ExportError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_add_names_entries_by_asset() {
        let mut bundle = ExportBundle::default();
        bundle.add(find_asset("header-capsule").unwrap(), raster_for("header-capsule")).unwrap();
        bundle.add(find_asset("client-icon").unwrap(), raster_for("client-icon")).unwrap();

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.filenames(), vec!["header-capsule.png", "client-icon.png"]);
        assert_eq!(bundle.archive_name(), "steam-assets.zip");
    }

    #[test]
    fn test_add_rejects_wrong_size() {
        let mut bundle = ExportBundle::default();
        let asset = find_asset("header-capsule").unwrap();
        let err = bundle
            .add(asset, RasterOutput::new(921, 430, solid_png(920, 430, 0)))
            .unwrap_err();

        assert_eq!(err.to_string(), "header-capsule: expected 920x430, got 921x430");
        assert!(bundle.is_empty());
    }

    #[test]
    fn test_add_checks_png_header_size() {
        // A real 1x1 render reported as the full header size
        let url = format!("data:image/png;base64,{}", STANDARD.encode(solid_png(1, 1, 0)));
        let raster = RasterOutput::from_data_url(&url, 920, 430).unwrap();

        let mut bundle = ExportBundle::default();
        let err = bundle.add(find_asset("header-capsule").unwrap(), raster).unwrap_err();
        assert!(matches!(
            err,
            ExportError::DimensionMismatch { width: 1, height: 1, .. }
        ));
        assert!(bundle.is_empty());
    }

    #[test]
    fn test_add_rejects_unreadable_png() {
        let mut bundle = ExportBundle::default();
        let asset = find_asset("header-capsule").unwrap();
        let err = bundle
            .add(asset, RasterOutput::new(920, 430, PNG_MAGIC.to_vec()))
            .unwrap_err();
        assert!(matches!(err, ExportError::InvalidPng(_)));
    }

    #[test]
    fn test_png_dimensions() {
        assert_eq!(png_dimensions(&solid_png(184, 184, 7)).unwrap(), (184, 184));
        assert!(png_dimensions(b"not a png").is_err());
    }

    #[test]
    fn test_add_replaces_previous_result() {
        let mut bundle = ExportBundle::default();
        let asset = find_asset("event-cover").unwrap();
        bundle.add(asset, RasterOutput::new(800, 450, solid_png(800, 450, 0))).unwrap();
        let second = solid_png(800, 450, 255);
        bundle.add(asset, RasterOutput::new(800, 450, second.clone())).unwrap();

        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.entries()[0].png, second);
    }

    #[test]
    fn test_finish_passes_entries() {
        let mut bundle = ExportBundle::new("my-game.zip");
        bundle.add(find_asset("event-cover").unwrap(), raster_for("event-cover")).unwrap();

        let mut archiver = RecordingArchiver::default();
        bundle.finish(&mut archiver).unwrap();
        assert_eq!(archiver.name.as_deref(), Some("my-game.zip"));
        assert_eq!(archiver.filenames, vec!["event-cover.png".to_string()]);
    }

    #[test]
    fn test_finish_empty_bundle() {
        let bundle = ExportBundle::default();
        let mut archiver = RecordingArchiver::default();
        assert!(matches!(bundle.finish(&mut archiver), Err(ExportError::EmptyBundle)));
        assert!(archiver.name.is_none());
    }

    #[test]
    fn test_finish_propagates_archiver_error() {
        let mut bundle = ExportBundle::default();
        bundle.add(find_asset("client-icon").unwrap(), raster_for("client-icon")).unwrap();
        let err = bundle.finish(&mut FailingArchiver).unwrap_err();
        assert_eq!(err.to_string(), "Archive write failed: disk full");
    }
}
