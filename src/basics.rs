//! Foundation types — rectangles and rounding helpers.
//!
//! The grid math works in run lengths rather than corner points, so `Rect`
//! is x/y/width/height (matching how patch cells are produced by the border
//! scanner) instead of a two-corner rectangle.

// ============================================================================
// Rounding
// ============================================================================

/// Round a double to the nearest integer (round half away from zero).
#[inline]
pub fn iround(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

/// Round a non-negative double to the nearest unsigned integer (round half up).
#[inline]
pub fn uround(v: f64) -> u32 {
    (v + 0.5) as u32
}

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iround() {
        assert_eq!(iround(0.4), 0);
        assert_eq!(iround(0.5), 1);
        assert_eq!(iround(-0.5), -1);
        assert_eq!(iround(-0.4), 0);
        assert_eq!(iround(2.0), 2);
    }

    #[test]
    fn test_uround() {
        assert_eq!(uround(0.49), 0);
        assert_eq!(uround(0.5), 1);
        assert_eq!(uround(3.2), 3);
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(2, 3, 4, 5);
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 8);
        assert!(!r.is_empty());
        assert!(Rect::new(0, 0, 0, 5).is_empty());
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(1, 1, 2, 2);
        assert!(r.contains(1, 1));
        assert!(r.contains(2, 2));
        assert!(!r.contains(3, 2));
        assert!(!r.contains(0, 1));
    }
}
