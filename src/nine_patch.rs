//! 9-patch decoding and stretch rendering.
//!
//! A 9-patch is a bitmap wrapped in a 1-pixel border: solid black runs on
//! the top row and left column mark stretchable bands, runs on the bottom
//! row and right column mark the content area (padding). Decoding scans
//! the border into a [`PatchGrid`]; drawing subdivides the target size
//! across the grid and blits each cell with an independent per-axis scale.

use log::{debug, trace};

use crate::basics::Rect;
use crate::color::{MARKER_BLACK, MARKER_TRANSPARENT, Rgba8};
use crate::error::{Error, Result};
use crate::grid::{allocate, PatchGrid};
use crate::pixmap::Pixmap;
use crate::scale::{blit_scaled, Sampling};
use crate::ticks::{column_argb, padding_from_fixed, row_argb, AxisCuts};
use crate::verify;

/// Content padding in pixels, measured inward from each edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// A decoded 9-patch: the bordered source image plus its patch grid and
/// content padding.
#[derive(Debug, Clone)]
pub struct NinePatch {
    image: Pixmap,
    grid: PatchGrid,
    padding: Padding,
}

impl NinePatch {
    /// Decode a 9-patch from an in-memory bitmap.
    ///
    /// With `is_nine_patch` the bitmap is taken to carry a 1-px border;
    /// border pixels that are neither transparent nor solid black are
    /// sanitized to transparent before scanning. Otherwise `convert`
    /// controls whether the plain bitmap is wrapped in a fresh transparent
    /// border (one whole-image stretch region per axis, zero padding) or
    /// rejected with [`Error::NotNinePatch`].
    pub fn from_pixmap(image: Pixmap, is_nine_patch: bool, convert: bool) -> Result<Self> {
        let image = if is_nine_patch {
            let mut img = image;
            sanitize_border(&mut img);
            img
        } else if convert {
            wrap_in_border(&image)
        } else {
            return Err(Error::NotNinePatch);
        };

        if image.width() < 3 || image.height() < 3 {
            return Err(Error::TooSmall {
                width: image.width(),
                height: image.height(),
            });
        }

        Ok(Self::decode(image))
    }

    fn decode(image: Pixmap) -> Self {
        let w = image.width();
        let h = image.height();

        let h_cuts = AxisCuts::scan(&row_argb(&image, 0));
        let v_cuts = AxisCuts::scan(&column_argb(&image, 0));
        let grid = PatchGrid::new(h_cuts, v_cuts, w, h);

        let bottom = AxisCuts::scan(&row_argb(&image, h - 1));
        let right = AxisCuts::scan(&column_argb(&image, w - 1));
        let (left, right_pad) = padding_from_fixed(&bottom.fixed);
        let (top, bottom_pad) = padding_from_fixed(&right.fixed);
        let padding = Padding {
            left,
            top,
            right: right_pad,
            bottom: bottom_pad,
        };

        debug!(
            "decoded 9-patch {}x{}: {} fixed, {} patches, {} h-patches, {} v-patches, padding {:?}",
            w - 2,
            h - 2,
            grid.fixed.len(),
            grid.patches.len(),
            grid.horizontal.len(),
            grid.vertical.len(),
            padding
        );

        Self {
            image,
            grid,
            padding,
        }
    }

    /// Content width (source image minus the border).
    pub fn width(&self) -> u32 {
        self.image.width() - 2
    }

    /// Content height (source image minus the border).
    pub fn height(&self) -> u32 {
        self.image.height() - 2
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Smallest `(width, height)` a draw can honor without shrinking fixed
    /// cells.
    pub fn min_size(&self) -> (u32, u32) {
        self.grid.min_size()
    }

    /// The bordered source bitmap.
    pub fn source(&self) -> &Pixmap {
        &self.image
    }

    pub fn grid(&self) -> &PatchGrid {
        &self.grid
    }

    /// Stretch cells whose pixels are not uniform along their stretch
    /// axes; these distort visibly when scaled.
    pub fn find_bad_patches(&self) -> Vec<Rect> {
        verify::find_bad_patches(&self.image, &self.grid)
    }

    /// Render at `scaled_w`×`scaled_h` into `target` with its top-left
    /// corner at (`x`, `y`).
    ///
    /// Fixed cells keep their native size; the remaining budget is split
    /// across stretch bands so row and column sizes sum exactly to the
    /// target (whenever the target is at least [`min_size`](Self::min_size)).
    /// Target sizes of 1 or less draw nothing.
    pub fn draw(
        &self,
        target: &mut Pixmap,
        x: u32,
        y: u32,
        scaled_w: u32,
        scaled_h: u32,
        sampling: Sampling,
    ) {
        if scaled_w <= 1 || scaled_h <= 1 {
            return;
        }

        let interior = Rect::new(1, 1, self.width(), self.height());
        if self.grid.patches.is_empty() {
            // vestigial guard from the scanner's degenerate rule; a decoded
            // grid always has at least one two-axis patch
            blit_scaled(
                &self.image,
                interior,
                target,
                Rect::new(x, y, scaled_w, scaled_h),
                sampling,
            );
            return;
        }

        let cols = self.grid.column_segments();
        let rows = self.grid.row_segments();
        let col_sizes = allocate(&cols, scaled_w);
        let row_sizes = allocate(&rows, scaled_h);

        let mut dy = 0u32;
        for (row, &rh) in rows.iter().zip(&row_sizes) {
            let mut dx = 0u32;
            for (col, &cw) in cols.iter().zip(&col_sizes) {
                if cw > 0 && rh > 0 {
                    let src = Rect::new(col.start, row.start, col.len, row.len);
                    let dst = Rect::new(x + dx, y + dy, cw, rh);
                    trace!("cell {:?} -> {:?}", src, dst);
                    blit_scaled(&self.image, src, target, dst, sampling);
                }
                dx += cw;
            }
            dy += rh;
        }
    }
}

/// Reset border pixels that are neither transparent nor solid black.
fn sanitize_border(image: &mut Pixmap) {
    let w = image.width();
    let h = image.height();
    if w == 0 || h == 0 {
        return;
    }
    for x in 0..w {
        for y in [0, h - 1] {
            let px = image.pixel(x, y).to_argb();
            if px != MARKER_TRANSPARENT && px != MARKER_BLACK {
                image.set_pixel(x, y, Rgba8::TRANSPARENT);
            }
        }
    }
    for y in 0..h {
        for x in [0, w - 1] {
            let px = image.pixel(x, y).to_argb();
            if px != MARKER_TRANSPARENT && px != MARKER_BLACK {
                image.set_pixel(x, y, Rgba8::TRANSPARENT);
            }
        }
    }
}

/// Wrap a plain bitmap in a 1-px transparent border.
fn wrap_in_border(image: &Pixmap) -> Pixmap {
    let mut out = Pixmap::new(image.width() + 2, image.height() + 2);
    out.copy_from(image, 1, 1);
    out
}

// ============================================================================
// Tests
// ============================================================================
