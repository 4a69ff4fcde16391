//! Patch grid construction and destination size allocation.
//!
//! The top-row and left-column cuts divide the interior of the bordered
//! image into a grid. Each cell is one of four kinds depending on whether
//! its row band and column band are stretchable:
//!
//! - fixed row × fixed column → fixed cell (never scales)
//! - stretch row × stretch column → patch (scales in both axes)
//! - fixed row × stretch column → horizontal patch (scales in x only)
//! - stretch row × fixed column → vertical patch (scales in y only)
//!
//! All rectangles are in bordered-image coordinates (the 1-px border is
//! row/column 0 and the last row/column; cells start at 1).

use crate::basics::Rect;
use crate::ticks::{AxisCuts, Run};

/// One band along an axis, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Start coordinate in the bordered source image.
    pub start: u32,
    /// Source length in pixels.
    pub len: u32,
    pub stretch: bool,
}

/// The decoded cell grid of a 9-patch.
#[derive(Debug, Clone)]
pub struct PatchGrid {
    /// Cuts along x, from the top border row.
    pub h_cuts: AxisCuts,
    /// Cuts along y, from the left border column.
    pub v_cuts: AxisCuts,
    pub fixed: Vec<Rect>,
    pub patches: Vec<Rect>,
    pub horizontal: Vec<Rect>,
    pub vertical: Vec<Rect>,
}

impl PatchGrid {
    /// Build the grid from the stretch-axis cuts of a bordered `w`×`h` image.
    pub fn new(h_cuts: AxisCuts, v_cuts: AxisCuts, w: u32, h: u32) -> Self {
        let fixed = cross(&v_cuts.fixed, &h_cuts.fixed);
        let patches = cross(&v_cuts.stretch, &h_cuts.stretch);

        let (horizontal, vertical) = if !fixed.is_empty() {
            (
                cross(&v_cuts.fixed, &h_cuts.stretch),
                cross(&v_cuts.stretch, &h_cuts.fixed),
            )
        } else if !h_cuts.fixed.is_empty() {
            // No fixed rows: a fixed column spans the full interior height
            // and stretches vertically only.
            (Vec::new(), full_height(&h_cuts.fixed, h))
        } else if !v_cuts.fixed.is_empty() {
            (full_width(&v_cuts.fixed, w), Vec::new())
        } else {
            (Vec::new(), Vec::new())
        };

        Self {
            h_cuts,
            v_cuts,
            fixed,
            patches,
            horizontal,
            vertical,
        }
    }

    /// Column bands left to right.
    pub fn column_segments(&self) -> Vec<Segment> {
        interleave(&self.h_cuts)
    }

    /// Row bands top to bottom.
    pub fn row_segments(&self) -> Vec<Segment> {
        interleave(&self.v_cuts)
    }

    /// Smallest target size honoring all fixed cells, `(width, height)`.
    pub fn min_size(&self) -> (u32, u32) {
        (self.h_cuts.fixed_total(), self.v_cuts.fixed_total())
    }
}

/// Row bands × column bands, rows outer.
fn cross(rows: &[Run], cols: &[Run]) -> Vec<Rect> {
    let mut out = Vec::with_capacity(rows.len() * cols.len());
    for row in rows {
        for col in cols {
            out.push(Rect::new(col.start, row.start, col.len(), row.len()));
        }
    }
    out
}

fn full_height(cols: &[Run], h: u32) -> Vec<Rect> {
    cols.iter()
        .map(|c| Rect::new(c.start, 1, c.len(), h - 2))
        .collect()
}

fn full_width(rows: &[Run], w: u32) -> Vec<Rect> {
    rows.iter()
        .map(|r| Rect::new(1, r.start, w - 2, r.len()))
        .collect()
}

/// Merge fixed and stretch runs into a single sorted band list.
fn interleave(cuts: &AxisCuts) -> Vec<Segment> {
    let mut out: Vec<Segment> = cuts
        .fixed
        .iter()
        .map(|r| Segment {
            start: r.start,
            len: r.len(),
            stretch: false,
        })
        .chain(cuts.stretch.iter().map(|r| Segment {
            start: r.start,
            len: r.len(),
            stretch: true,
        }))
        .collect();
    out.sort_by_key(|s| s.start);
    out
}

/// Destination sizes for one axis.
///
/// Fixed bands keep their source length. The remaining budget
/// (`target − Σ fixed`, clamped at zero) is split across stretch bands
/// proportionally to source length, by cumulative rounding so the stretch
/// allocations always sum to the budget exactly.
pub fn allocate(segments: &[Segment], target: u32) -> Vec<u32> {
    let fixed_total: u32 = segments.iter().filter(|s| !s.stretch).map(|s| s.len).sum();
    let weight_total: u64 = segments.iter().filter(|s| s.stretch).map(|s| s.len as u64).sum();
    let budget = target.saturating_sub(fixed_total) as u64;

    let mut out = Vec::with_capacity(segments.len());
    let mut cum_weight = 0u64;
    let mut allocated = 0u64;
    for seg in segments {
        if seg.stretch {
            cum_weight += seg.len as u64;
            // round(budget * cum / total) with half-up rounding
            let upto = if weight_total == 0 {
                0
            } else {
                (budget * cum_weight + weight_total / 2) / weight_total
            };
            out.push((upto - allocated) as u32);
            allocated = upto;
        } else {
            out.push(seg.len);
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
