//! I/O helpers for frames, masks and JSON reports.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned packed-RGB buffer.
//! - `save_gray_png`: write a single-channel mask/edge map to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RgbFrameBuf;
use image::GrayImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to packed 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbFrameBuf, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RgbFrameBuf::new(width, height, img.into_raw()))
}

/// Save an 8-bit single-channel image (mask or edge map) to a PNG.
pub fn save_gray_png(image: &GrayImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
