//! Error type for decoding and I/O.

use std::io;

/// Errors produced while loading or decoding a 9-patch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The bitmap has no 9-patch border and conversion was not requested.
    #[error("bitmap is not a 9-patch and convert was not requested")]
    NotNinePatch,

    /// The bitmap is too small to carry a 1-pixel border.
    #[error("image {width}x{height} is too small for a 9-patch border")]
    TooSmall { width: u32, height: u32 },

    /// Raw pixel data does not match the stated dimensions.
    #[error("pixel data length {len} does not match {width}x{height} RGBA")]
    BadBufferSize { width: u32, height: u32, len: usize },

    #[error(transparent)]
    Io(#[from] io::Error),

    /// PNG decode/encode failure from the image crate.
    #[cfg(feature = "png")]
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
