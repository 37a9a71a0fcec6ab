//! Export bundle WASM bindings.
//!
//! The canvas renders each asset at its exact output size and calls
//! `add_data_url` with the result of `toDataURL('image/png')`. When done,
//! `finish` hands every entry to a JavaScript callback (typically one that
//! adds files to a JSZip instance) and returns the archive name.
//!
//! # Example
//!
//! ```typescript
//! const bundle = new JsExportBundle();
//! bundle.add_data_url('header-capsule', stage.toDataURL(), 920, 430);
//! const zip = new JSZip();
//! const name = bundle.finish((archive, filename, bytes) => zip.file(filename, bytes));
//! saveAs(await zip.generateAsync({ type: 'blob' }), name);
//! ```

use crate::types::js_error;
use capsulekit_core::catalog::find_asset;
use capsulekit_core::config::ExportConfig;
use capsulekit_core::export::{Archiver, ExportBundle, ExportEntry, ExportError, RasterOutput};
use js_sys::{Function, Uint8Array};
use wasm_bindgen::prelude::*;

/// Archiver that calls `callback(archiveName, filename, bytes)` per entry.
struct CallbackArchiver<'a> {
    callback: &'a Function,
}

impl Archiver for CallbackArchiver<'_> {
    fn write_archive(&mut self, archive_name: &str, entries: &[ExportEntry]) -> Result<(), ExportError> {
        let archive_name = JsValue::from_str(archive_name);
        for entry in entries {
            let bytes = Uint8Array::from(entry.png.as_slice());
            self.callback
                .call3(
                    &JsValue::NULL,
                    &archive_name,
                    &JsValue::from_str(&entry.filename),
                    &bytes.into(),
                )
                .map_err(|e| ExportError::ArchiveFailed(format!("{e:?}")))?;
        }
        Ok(())
    }
}

#[wasm_bindgen]
pub struct JsExportBundle {
    inner: ExportBundle,
}

#[wasm_bindgen]
impl JsExportBundle {
    /// Create a bundle named `steam-assets.zip`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: ExportBundle::default(),
        }
    }

    /// Create a bundle from a partial `ExportConfig` object.
    pub fn with_config(config: JsValue) -> Result<JsExportBundle, JsValue> {
        let config: ExportConfig = serde_wasm_bindgen::from_value(config).map_err(js_error)?;
        config.validate().map_err(js_error)?;
        Ok(Self {
            inner: ExportBundle::new(config.archive_name),
        })
    }

    /// Add a rendered PNG data URL for an asset.
    ///
    /// Fails if the id is unknown, the URL is not a base64 PNG, or the
    /// rendered size differs from the asset's size.
    pub fn add_data_url(
        &mut self,
        asset_id: &str,
        data_url: &str,
        width: u32,
        height: u32,
    ) -> Result<(), JsValue> {
        let asset = find_asset(asset_id)
            .ok_or_else(|| js_error(format!("Unknown asset id: {asset_id}")))?;
        let raster = RasterOutput::from_data_url(data_url, width, height).map_err(js_error)?;
        self.inner.add(asset, raster).map_err(js_error)
    }

    /// Add already-encoded PNG bytes for an asset.
    ///
    /// Fails if the id is unknown, the bytes are not a PNG, or either the
    /// reported size or the PNG's own size differs from the asset's size.
    pub fn add_png(&mut self, asset_id: &str, png: Vec<u8>, width: u32, height: u32) -> Result<(), JsValue> {
        let asset = find_asset(asset_id)
            .ok_or_else(|| js_error(format!("Unknown asset id: {asset_id}")))?;
        self.inner
            .add(asset, RasterOutput::new(width, height, png))
            .map_err(js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn archive_name(&self) -> String {
        self.inner.archive_name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn filenames(&self) -> Vec<String> {
        self.inner.filenames().into_iter().map(str::to_string).collect()
    }

    /// PNG bytes of the entry at `index`.
    pub fn entry_png(&self, index: usize) -> Option<Vec<u8>> {
        self.inner.entries().get(index).map(|e| e.png.clone())
    }

    /// Pass every entry to `callback(archiveName, filename, bytes)` and
    /// return the archive name.
    pub fn finish(&self, callback: &Function) -> Result<String, JsValue> {
        let mut archiver = CallbackArchiver { callback };
        self.inner.finish(&mut archiver).map_err(js_error)?;
        Ok(self.inner.archive_name().to_string())
    }
}

impl Default for JsExportBundle {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a black PNG of the given size.
#[cfg(test)]
pub(crate) fn blank_png(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    image::GrayImage::new(width, height)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    #[test]
    fn test_new_bundle() {
        let bundle = JsExportBundle::new();
        assert_eq!(bundle.archive_name(), "steam-assets.zip");
        assert!(bundle.is_empty());
        assert_eq!(bundle.length(), 0);
    }

    #[test]
    fn test_add_png() {
        let mut bundle = JsExportBundle::new();
        let icon = blank_png(32, 32);
        bundle.add_png("client-icon", icon.clone(), 32, 32).unwrap();
        bundle.add_png("community-icon", blank_png(184, 184), 184, 184).unwrap();

        assert_eq!(bundle.length(), 2);
        assert_eq!(bundle.filenames(), vec!["client-icon.png", "community-icon.png"]);
        assert_eq!(bundle.entry_png(0), Some(icon));
        assert_eq!(bundle.entry_png(5), None);
    }

    #[test]
    fn test_add_data_url() {
        let mut bundle = JsExportBundle::new();
        let png = blank_png(920, 430);
        let url = format!("data:image/png;base64,{}", STANDARD.encode(&png));
        bundle.add_data_url("header-capsule", &url, 920, 430).unwrap();
        assert_eq!(bundle.entry_png(0), Some(png));
    }
}
