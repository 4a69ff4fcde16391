//! # ninepatch
//!
//! Decoding and stretch rendering of 9-patch bitmaps — images wrapped in a
//! 1-pixel border whose solid-black runs mark which rows and columns may
//! stretch and where the content padding lies.
//!
//! The pipeline has three stages:
//!
//! 1. **Border scan** — the top row and left column are split into runs of
//!    stretch (solid black) and fixed pixels; the bottom row and right
//!    column yield the content padding.
//! 2. **Grid** — the two axis cuts subdivide the interior into fixed cells,
//!    two-axis patches, and one-axis (horizontal/vertical) patches. Given a
//!    target size, fixed bands keep their native length and the remaining
//!    budget is split across stretch bands so the per-axis sizes sum to the
//!    target exactly.
//! 3. **Blit** — each cell is copied into the target with independent
//!    per-axis scale factors, resampled nearest-neighbor or bilinear.
//!
//! ```
//! use ninepatch::{NinePatch, Pixmap, Rgba8, Sampling};
//!
//! // a 6x6 bordered bitmap: 4x4 interior, center 2 px stretchable
//! let mut img = Pixmap::new(6, 6);
//! for y in 1..5 {
//!     for x in 1..5 {
//!         img.set_pixel(x, y, Rgba8::new(200, 0, 0, 255));
//!     }
//! }
//! for i in 2..4 {
//!     img.set_pixel(i, 0, Rgba8::BLACK);
//!     img.set_pixel(0, i, Rgba8::BLACK);
//! }
//!
//! let patch = NinePatch::from_pixmap(img, true, false)?;
//! let mut target = Pixmap::new(64, 24);
//! patch.draw(&mut target, 0, 0, 64, 24, Sampling::Bilinear);
//! # Ok::<(), ninepatch::Error>(())
//! ```
//!
//! With the default `png` feature, [`io::load_path`] reads `.9.png` files
//! (and plain bitmaps, converted on request) through the `image` crate.

pub mod basics;
pub mod color;
pub mod error;
pub mod grid;
pub mod nine_patch;
pub mod pixmap;
pub mod scale;
pub mod ticks;
pub mod verify;

#[cfg(feature = "png")]
pub mod io;

pub use basics::Rect;
pub use color::Rgba8;
pub use error::{Error, Result};
pub use grid::PatchGrid;
pub use nine_patch::{NinePatch, Padding};
pub use pixmap::Pixmap;
pub use scale::Sampling;

#[cfg(feature = "png")]
pub use io::{load_path, EXTENSION_9PATCH};
