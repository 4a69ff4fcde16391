//! `.9.png` file loading and saving (feature `png`).
//!
//! Whether a file carries a 9-patch border is decided by its name: the
//! `.9.png` suffix, matched case-insensitively. Decoding goes through the
//! `image` crate into a straight-alpha RGBA [`Pixmap`].

use std::io::{BufRead, Seek};
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::nine_patch::NinePatch;
use crate::pixmap::Pixmap;

/// File name suffix of 9-patch images.
pub const EXTENSION_9PATCH: &str = ".9.png";

/// Whether `path` names a 9-patch by its `.9.png` suffix (case-insensitive).
pub fn is_nine_patch_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_ascii_lowercase().ends_with(EXTENSION_9PATCH))
        .unwrap_or(false)
}

/// Decode any image the `image` crate understands into a `Pixmap`.
pub fn decode_pixmap(reader: impl BufRead + Seek) -> Result<Pixmap> {
    let img = image::ImageReader::new(reader)
        .with_guessed_format()?
        .decode()?
        .to_rgba8();
    let (w, h) = img.dimensions();
    Pixmap::from_raw(w, h, img.into_raw())
}

/// Load a 9-patch (or, with `convert`, any bitmap) from a file.
///
/// The `.9.png` suffix decides whether the file is treated as bordered.
pub fn load_path(path: impl AsRef<Path>, convert: bool) -> Result<NinePatch> {
    let path = path.as_ref();
    let is_nine_patch = is_nine_patch_path(path);
    debug!(
        "loading {} (9-patch: {}, convert: {})",
        path.display(),
        is_nine_patch,
        convert
    );
    let img = image::ImageReader::open(path)?.decode()?.to_rgba8();
    let (w, h) = img.dimensions();
    let pixmap = Pixmap::from_raw(w, h, img.into_raw())?;
    NinePatch::from_pixmap(pixmap, is_nine_patch, convert)
}

/// Load from a reader when the caller already knows whether the bytes are
/// a bordered 9-patch.
pub fn load_reader(
    reader: impl BufRead + Seek,
    is_nine_patch: bool,
    convert: bool,
) -> Result<NinePatch> {
    let pixmap = decode_pixmap(reader)?;
    NinePatch::from_pixmap(pixmap, is_nine_patch, convert)
}

/// Write a pixmap as PNG.
pub fn save_png(pixmap: &Pixmap, path: impl AsRef<Path>) -> Result<()> {
    image::save_buffer(
        path.as_ref(),
        pixmap.data(),
        pixmap.width(),
        pixmap.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
