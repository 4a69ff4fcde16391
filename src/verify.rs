//! Bad-patch detection.
//!
//! A stretch cell whose pixels vary along a stretched axis distorts
//! visibly when scaled:
//!
//! - a two-axis patch must be a single solid color;
//! - a horizontal patch must have identical columns;
//! - a vertical patch must have identical rows.

use crate::basics::Rect;
use crate::grid::PatchGrid;
use crate::pixmap::Pixmap;

/// All stretch cells of `grid` that would distort when scaled.
pub fn find_bad_patches(image: &Pixmap, grid: &PatchGrid) -> Vec<Rect> {
    let mut bad = Vec::new();
    for &r in &grid.patches {
        if !is_uniform(image, r) {
            bad.push(r);
        }
    }
    for &r in &grid.horizontal {
        if !columns_uniform(image, r) {
            bad.push(r);
        }
    }
    for &r in &grid.vertical {
        if !rows_uniform(image, r) {
            bad.push(r);
        }
    }
    bad
}

/// Every pixel of `r` equals the first.
fn is_uniform(image: &Pixmap, r: Rect) -> bool {
    if r.is_empty() {
        return true;
    }
    let reference = image.pixel(r.x, r.y);
    for y in r.y..r.bottom() {
        for x in r.x..r.right() {
            if image.pixel(x, y) != reference {
                return false;
            }
        }
    }
    true
}

/// Every column of `r` equals the first column.
fn columns_uniform(image: &Pixmap, r: Rect) -> bool {
    for y in r.y..r.bottom() {
        let reference = image.pixel(r.x, y);
        for x in r.x + 1..r.right() {
            if image.pixel(x, y) != reference {
                return false;
            }
        }
    }
    true
}

/// Every row of `r` equals the first row.
fn rows_uniform(image: &Pixmap, r: Rect) -> bool {
    for x in r.x..r.right() {
        let reference = image.pixel(x, r.y);
        for y in r.y + 1..r.bottom() {
            if image.pixel(x, y) != reference {
                return false;
            }
        }
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;
    use crate::nine_patch::NinePatch;

    const RED: Rgba8 = Rgba8::new(255, 0, 0, 255);
    const BLUE: Rgba8 = Rgba8::new(0, 0, 255, 255);

    fn bordered(interior: u32) -> Pixmap {
        let mut img = Pixmap::new(interior + 2, interior + 2);
        for y in 1..=interior {
            for x in 1..=interior {
                img.set_pixel(x, y, RED);
            }
        }
        img
    }

    fn with_center_ticks(mut img: Pixmap) -> Pixmap {
        let n = img.width();
        for i in 2..n - 2 {
            img.set_pixel(i, 0, Rgba8::BLACK);
            img.set_pixel(0, i, Rgba8::BLACK);
        }
        img
    }

    #[test]
    fn test_uniform_patch_is_clean() {
        let img = with_center_ticks(bordered(4));
        let np = NinePatch::from_pixmap(img, true, false).unwrap();
        assert!(np.find_bad_patches().is_empty());
    }

    #[test]
    fn test_nonuniform_center_patch_is_bad() {
        let mut img = with_center_ticks(bordered(4));
        img.set_pixel(2, 2, BLUE); // inside the center patch
        let np = NinePatch::from_pixmap(img, true, false).unwrap();
        let bad = np.find_bad_patches();
        assert_eq!(bad, vec![Rect::new(2, 2, 2, 2)]);
    }

    #[test]
    fn test_horizontal_patch_with_unequal_columns_is_bad() {
        let mut img = with_center_ticks(bordered(4));
        // top horizontal patch spans x 2..4 at y 1; make its columns differ
        img.set_pixel(2, 1, BLUE);
        let np = NinePatch::from_pixmap(img, true, false).unwrap();
        let bad = np.find_bad_patches();
        assert!(bad.contains(&Rect::new(2, 1, 2, 1)));
    }

    #[test]
    fn test_vertical_gradient_rows_are_fine_in_horizontal_patch() {
        // rows may differ from each other as long as each row is constant
        let mut img = with_center_ticks(bordered(4));
        img.set_pixel(2, 4, BLUE);
        img.set_pixel(3, 4, BLUE);
        // bottom horizontal patch row y=4: both columns BLUE, uniform per row
        let np = NinePatch::from_pixmap(img, true, false).unwrap();
        let bad = np.find_bad_patches();
        assert!(!bad.contains(&Rect::new(2, 4, 2, 1)));
    }

    #[test]
    fn test_vertical_patch_with_unequal_rows_is_bad() {
        let mut img = with_center_ticks(bordered(4));
        // left vertical patch spans y 2..4 at x 1
        img.set_pixel(1, 2, BLUE);
        let np = NinePatch::from_pixmap(img, true, false).unwrap();
        assert!(np.find_bad_patches().contains(&Rect::new(1, 2, 1, 2)));
    }
}
