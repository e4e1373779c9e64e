//! PNG persistence for tiles and compositions
//!
//! Writes go to a temporary file next to the destination and are renamed into
//! place, so readers never observe a half-written image.

use crate::io::error::{PeriodicError, Result, WithPath};
use image::{ImageFormat, RgbaImage};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load a PNG as RGBA, returning `None` when the file does not exist
///
/// # Errors
///
/// Returns an error if the file exists but cannot be decoded
pub fn load_png(path: &Path) -> Result<Option<RgbaImage>> {
    if !path.is_file() {
        return Ok(None);
    }

    let img = image::open(path).map_err(|e| PeriodicError::TileLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(Some(img.to_rgba8()))
}

/// Save an RGBA image as PNG, replacing any existing file at `path`
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The temporary file cannot be created or renamed into place
/// - The image cannot be encoded
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).with_path(parent, "create directory")?;

    let temp = NamedTempFile::new_in(parent).with_path(parent, "create temporary file")?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        img.write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| PeriodicError::ImageExport {
                path: path.to_path_buf(),
                source: e,
            })?;
        writer.flush().with_path(path, "write image")?;
    }

    temp.persist(path)
        .map_err(|e| e.error)
        .with_path(path, "rename image into place")?;

    Ok(())
}
