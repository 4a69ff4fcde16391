//! Border tick scanning.
//!
//! A 9-patch encodes its stretch regions and content padding in a 1-pixel
//! border: the top row and left column mark stretchable spans with solid
//! black runs, the bottom row and right column mark the content area the
//! same way. This module turns one border line into alternating runs of
//! *stretch* (solid black) and *fixed* (anything else) pixels.

use crate::color::MARKER_BLACK;
use crate::pixmap::Pixmap;

/// A half-open run `[start, end)` along one border line, in full-image
/// coordinates (so `start >= 1` and `end <= len - 1`; the corner pixels
/// never belong to a run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: u32,
    pub end: u32,
}

impl Run {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// The runs found along one axis of the border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisCuts {
    pub fixed: Vec<Run>,
    pub stretch: Vec<Run>,
    /// Whether the first run along the axis is a stretch run. The draw walk
    /// alternates fixed/stretch cells starting from this.
    pub starts_with_stretch: bool,
}

impl AxisCuts {
    /// Scan one border line of packed ARGB pixels.
    ///
    /// Runs are split wherever the pixel value changes, then classified:
    /// a run of solid black is stretch, any other value is fixed. The scan
    /// covers `[1, len - 1)`, skipping both corner pixels.
    ///
    /// If no stretch run is found the whole interior becomes a single
    /// stretch run (a line with no ticks stretches uniformly).
    pub fn scan(pixels: &[u32]) -> AxisCuts {
        debug_assert!(pixels.len() >= 3, "border line must span a bordered image");
        let mut fixed = Vec::new();
        let mut stretch = Vec::new();
        let mut starts_with_stretch = false;

        let len = pixels.len();
        let mut last_index = 1u32;
        let mut last_pixel = pixels[1];
        let mut first = true;

        for (i, &pixel) in pixels.iter().enumerate().take(len - 1).skip(1) {
            if pixel != last_pixel {
                if last_pixel == MARKER_BLACK {
                    if first {
                        starts_with_stretch = true;
                    }
                    stretch.push(Run::new(last_index, i as u32));
                } else {
                    fixed.push(Run::new(last_index, i as u32));
                }
                first = false;
                last_index = i as u32;
                last_pixel = pixel;
            }
        }
        if last_pixel == MARKER_BLACK {
            if first {
                starts_with_stretch = true;
            }
            stretch.push(Run::new(last_index, (len - 1) as u32));
        } else {
            fixed.push(Run::new(last_index, (len - 1) as u32));
        }

        if stretch.is_empty() {
            stretch.push(Run::new(1, (len - 1) as u32));
            starts_with_stretch = true;
            fixed.clear();
        }

        AxisCuts {
            fixed,
            stretch,
            starts_with_stretch,
        }
    }

    /// Sum of fixed run lengths (the smallest size the axis can render at
    /// without shrinking fixed cells).
    pub fn fixed_total(&self) -> u32 {
        self.fixed.iter().map(Run::len).sum()
    }
}

/// Content padding derived from the fixed runs of a padding line (bottom
/// row or right column). Returns `(leading, trailing)`.
///
/// The black run on a padding line marks the content area; the fixed runs
/// on either side of it are the padding. One fixed run touching the border
/// start is leading-only padding; one fixed run elsewhere is trailing-only.
pub fn padding_from_fixed(fixed: &[Run]) -> (u32, u32) {
    match fixed {
        [] => (0, 0),
        [only] => {
            if only.start == 1 {
                (only.len(), 0)
            } else {
                (0, only.len())
            }
        }
        [head, .., tail] => (head.len(), tail.len()),
    }
}

/// Packed ARGB pixels of row `y`.
pub fn row_argb(p: &Pixmap, y: u32) -> Vec<u32> {
    (0..p.width()).map(|x| p.pixel(x, y).to_argb()).collect()
}

/// Packed ARGB pixels of column `x`.
pub fn column_argb(p: &Pixmap, x: u32) -> Vec<u32> {
    (0..p.height()).map(|y| p.pixel(x, y).to_argb()).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{MARKER_BLACK as B, MARKER_TRANSPARENT as T};

    #[test]
    fn test_scan_single_center_tick() {
        // corner, 2 fixed, 3 stretch, 2 fixed, corner
        let line = [T, T, T, B, B, B, T, T, T];
        let cuts = AxisCuts::scan(&line);
        assert_eq!(cuts.fixed, vec![Run::new(1, 3), Run::new(6, 8)]);
        assert_eq!(cuts.stretch, vec![Run::new(3, 6)]);
        assert!(!cuts.starts_with_stretch);
        assert_eq!(cuts.fixed_total(), 4);
    }

    #[test]
    fn test_scan_starts_with_stretch() {
        let line = [T, B, B, T, T, T];
        let cuts = AxisCuts::scan(&line);
        assert!(cuts.starts_with_stretch);
        assert_eq!(cuts.stretch, vec![Run::new(1, 3)]);
        assert_eq!(cuts.fixed, vec![Run::new(3, 5)]);
    }

    #[test]
    fn test_scan_no_ticks_degenerates_to_whole_axis() {
        let line = [T, T, T, T, T, T];
        let cuts = AxisCuts::scan(&line);
        assert!(cuts.fixed.is_empty());
        assert_eq!(cuts.stretch, vec![Run::new(1, 5)]);
        assert!(cuts.starts_with_stretch);
        assert_eq!(cuts.fixed_total(), 0);
    }

    #[test]
    fn test_scan_all_black_is_one_stretch() {
        let line = [B, B, B, B, B];
        let cuts = AxisCuts::scan(&line);
        assert!(cuts.fixed.is_empty());
        assert_eq!(cuts.stretch, vec![Run::new(1, 4)]);
        assert!(cuts.starts_with_stretch);
    }

    #[test]
    fn test_scan_multiple_ticks() {
        let line = [T, B, T, B, B, T, T];
        let cuts = AxisCuts::scan(&line);
        assert_eq!(cuts.stretch, vec![Run::new(1, 2), Run::new(3, 5)]);
        assert_eq!(cuts.fixed, vec![Run::new(2, 3), Run::new(5, 6)]);
        assert!(cuts.starts_with_stretch);
    }

    #[test]
    fn test_scan_splits_on_value_change_within_fixed() {
        // Two adjacent fixed runs of different colors stay separate runs.
        let red = 0xFFFF_0000u32;
        let line = [T, T, red, B, T, T];
        let cuts = AxisCuts::scan(&line);
        assert_eq!(cuts.fixed, vec![Run::new(1, 2), Run::new(2, 3), Run::new(4, 5)]);
        assert_eq!(cuts.stretch, vec![Run::new(3, 4)]);
    }

    #[test]
    fn test_padding_cases() {
        assert_eq!(padding_from_fixed(&[]), (0, 0));
        // one leading fixed run (content extends to the far edge)
        assert_eq!(padding_from_fixed(&[Run::new(1, 4)]), (3, 0));
        // one trailing fixed run
        assert_eq!(padding_from_fixed(&[Run::new(5, 8)]), (0, 3));
        // both sides
        assert_eq!(
            padding_from_fixed(&[Run::new(1, 3), Run::new(7, 11)]),
            (2, 4)
        );
    }

    #[test]
    fn test_row_column_argb() {
        let mut p = Pixmap::new(3, 2);
        p.set_pixel(1, 0, crate::color::Rgba8::BLACK);
        assert_eq!(row_argb(&p, 0), vec![T, B, T]);
        assert_eq!(column_argb(&p, 1), vec![B, T]);
    }
}
