//! Scaled cell blitting.
//!
//! Copies a source sub-rectangle into a destination sub-rectangle of
//! another pixmap, resampling when the sizes differ. Sampling never reads
//! outside the source rectangle, so a stretched cell cannot bleed border
//! ticks or neighboring cells into its output.
//!
//! Compositing is source-over with straight (non-premultiplied) alpha:
//! each channel is `lerp(dst, src, src_alpha)` and the alpha channel is
//! `lerp(dst_a, 255, src_alpha)`.

use crate::basics::Rect;
use crate::color::Rgba8;
use crate::pixmap::Pixmap;

/// Resampling kernel for stretched cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    Nearest,
    /// 2x2 weighted blend by subpixel fraction, clamped to the cell edge.
    #[default]
    Bilinear,
}

/// Blend `src` over the destination pixel at (x, y).
#[inline]
fn blend_pixel(dst: &mut Pixmap, x: u32, y: u32, c: Rgba8) {
    if c.a == 0 {
        return;
    }
    if c.is_opaque() {
        dst.set_pixel(x, y, c);
        return;
    }
    let p = dst.pixel(x, y);
    dst.set_pixel(
        x,
        y,
        Rgba8::new(
            Rgba8::lerp(p.r, c.r, c.a),
            Rgba8::lerp(p.g, c.g, c.a),
            Rgba8::lerp(p.b, c.b, c.a),
            Rgba8::lerp(p.a, 255, c.a),
        ),
    );
}

/// Blit `src_rect` of `src` into `dst_rect` of `dst`, scaling as needed.
///
/// `src_rect` must lie inside `src`; `dst_rect` is clipped against `dst`.
/// Empty rectangles are a no-op.
pub fn blit_scaled(src: &Pixmap, src_rect: Rect, dst: &mut Pixmap, dst_rect: Rect, sampling: Sampling) {
    if src_rect.is_empty() || dst_rect.is_empty() {
        return;
    }
    debug_assert!(src_rect.right() <= src.width() && src_rect.bottom() <= src.height());

    if src_rect.w == dst_rect.w && src_rect.h == dst_rect.h {
        blit_unscaled(src, src_rect, dst, dst_rect);
        return;
    }

    let sx0 = src_rect.x as f64;
    let sy0 = src_rect.y as f64;
    let x_ratio = src_rect.w as f64 / dst_rect.w as f64;
    let y_ratio = src_rect.h as f64 / dst_rect.h as f64;
    let x_max = src_rect.right() - 1;
    let y_max = src_rect.bottom() - 1;

    for dy in 0..dst_rect.h {
        let ty = dst_rect.y + dy;
        if ty >= dst.height() {
            break;
        }
        // pixel-center mapping: dst center -> src coordinate space
        let fy = sy0 + (dy as f64 + 0.5) * y_ratio - 0.5;
        for dx in 0..dst_rect.w {
            let tx = dst_rect.x + dx;
            if tx >= dst.width() {
                break;
            }
            let fx = sx0 + (dx as f64 + 0.5) * x_ratio - 0.5;
            let c = match sampling {
                Sampling::Nearest => sample_nearest(src, fx, fy, src_rect, x_max, y_max),
                Sampling::Bilinear => sample_bilinear(src, fx, fy, src_rect, x_max, y_max),
            };
            blend_pixel(dst, tx, ty, c);
        }
    }
}

/// 1:1 fast path.
fn blit_unscaled(src: &Pixmap, src_rect: Rect, dst: &mut Pixmap, dst_rect: Rect) {
    for dy in 0..dst_rect.h {
        let ty = dst_rect.y + dy;
        if ty >= dst.height() {
            break;
        }
        for dx in 0..dst_rect.w {
            let tx = dst_rect.x + dx;
            if tx >= dst.width() {
                break;
            }
            blend_pixel(dst, tx, ty, src.pixel(src_rect.x + dx, src_rect.y + dy));
        }
    }
}

#[inline]
fn sample_nearest(src: &Pixmap, fx: f64, fy: f64, r: Rect, x_max: u32, y_max: u32) -> Rgba8 {
    let x = clamp_coord(fx + 0.5, r.x, x_max);
    let y = clamp_coord(fy + 0.5, r.y, y_max);
    src.pixel(x, y)
}

#[inline]
fn sample_bilinear(src: &Pixmap, fx: f64, fy: f64, r: Rect, x_max: u32, y_max: u32) -> Rgba8 {
    let x0f = fx.floor();
    let y0f = fy.floor();
    let x0 = clamp_coord(x0f, r.x, x_max);
    let y0 = clamp_coord(y0f, r.y, y_max);
    let x1 = (x0 + 1).min(x_max);
    let y1 = (y0 + 1).min(y_max);

    // 8-bit subpixel fractions
    let ax = (((fx - x0f) * 256.0) as i32).clamp(0, 255) as u8;
    let ay = (((fy - y0f) * 256.0) as i32).clamp(0, 255) as u8;

    let p00 = src.pixel(x0, y0);
    let p10 = src.pixel(x1, y0);
    let p01 = src.pixel(x0, y1);
    let p11 = src.pixel(x1, y1);

    let top = lerp_rgba(p00, p10, ax);
    let bot = lerp_rgba(p01, p11, ax);
    lerp_rgba(top, bot, ay)
}

#[inline]
fn lerp_rgba(p: Rgba8, q: Rgba8, a: u8) -> Rgba8 {
    Rgba8::new(
        Rgba8::lerp(p.r, q.r, a),
        Rgba8::lerp(p.g, q.g, a),
        Rgba8::lerp(p.b, q.b, a),
        Rgba8::lerp(p.a, q.a, a),
    )
}

#[inline]
fn clamp_coord(v: f64, lo: u32, hi: u32) -> u32 {
    if v <= lo as f64 {
        lo
    } else if v >= hi as f64 {
        hi
    } else {
        v as u32
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, c: Rgba8) -> Pixmap {
        let mut p = Pixmap::new(w, h);
        p.fill(c);
        p
    }

    #[test]
    fn test_unscaled_copy() {
        let red = Rgba8::new(255, 0, 0, 255);
        let src = solid(4, 4, red);
        let mut dst = Pixmap::new(8, 8);
        blit_scaled(&src, Rect::new(1, 1, 2, 2), &mut dst, Rect::new(3, 3, 2, 2), Sampling::Nearest);
        assert_eq!(dst.pixel(3, 3), red);
        assert_eq!(dst.pixel(4, 4), red);
        assert_eq!(dst.pixel(2, 3), Rgba8::TRANSPARENT);
        assert_eq!(dst.pixel(5, 3), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_upscale_solid_stays_solid() {
        let blue = Rgba8::new(0, 0, 255, 255);
        let src = solid(3, 3, blue);
        for sampling in [Sampling::Nearest, Sampling::Bilinear] {
            let mut dst = Pixmap::new(10, 10);
            blit_scaled(&src, Rect::new(0, 0, 3, 3), &mut dst, Rect::new(0, 0, 10, 10), sampling);
            for y in 0..10 {
                for x in 0..10 {
                    assert_eq!(dst.pixel(x, y), blue, "{sampling:?} at {x},{y}");
                }
            }
        }
    }

    #[test]
    fn test_downscale_solid_stays_solid() {
        let c = Rgba8::new(10, 200, 30, 255);
        let src = solid(9, 9, c);
        let mut dst = Pixmap::new(2, 2);
        blit_scaled(&src, Rect::new(0, 0, 9, 9), &mut dst, Rect::new(0, 0, 2, 2), Sampling::Bilinear);
        assert_eq!(dst.pixel(0, 0), c);
        assert_eq!(dst.pixel(1, 1), c);
    }

    #[test]
    fn test_no_bleed_outside_source_rect() {
        // source: a white cell surrounded by black; stretch only the cell
        let mut src = solid(5, 5, Rgba8::BLACK);
        let white = Rgba8::new(255, 255, 255, 255);
        for y in 1..4 {
            for x in 1..4 {
                src.set_pixel(x, y, white);
            }
        }
        let mut dst = Pixmap::new(12, 12);
        blit_scaled(&src, Rect::new(1, 1, 3, 3), &mut dst, Rect::new(0, 0, 12, 12), Sampling::Bilinear);
        for y in 0..12 {
            for x in 0..12 {
                assert_eq!(dst.pixel(x, y), white, "bled at {x},{y}");
            }
        }
    }

    #[test]
    fn test_nearest_picks_source_pixels_only() {
        let mut src = Pixmap::new(2, 1);
        let a = Rgba8::new(10, 0, 0, 255);
        let b = Rgba8::new(0, 10, 0, 255);
        src.set_pixel(0, 0, a);
        src.set_pixel(1, 0, b);
        let mut dst = Pixmap::new(6, 1);
        blit_scaled(&src, Rect::new(0, 0, 2, 1), &mut dst, Rect::new(0, 0, 6, 1), Sampling::Nearest);
        for x in 0..6 {
            let c = dst.pixel(x, 0);
            assert!(c == a || c == b, "unexpected color at {x}");
        }
        assert_eq!(dst.pixel(0, 0), a);
        assert_eq!(dst.pixel(5, 0), b);
    }

    #[test]
    fn test_blend_translucent_over_opaque() {
        let mut src = Pixmap::new(1, 1);
        src.set_pixel(0, 0, Rgba8::new(255, 255, 255, 128));
        let mut dst = solid(1, 1, Rgba8::new(0, 0, 0, 255));
        blit_scaled(&src, Rect::new(0, 0, 1, 1), &mut dst, Rect::new(0, 0, 1, 1), Sampling::Nearest);
        let out = dst.pixel(0, 0);
        assert!((127..=129).contains(&out.r));
        assert_eq!(out.a, 255);
    }

    #[test]
    fn test_dst_clipping() {
        let src = solid(2, 2, Rgba8::BLACK);
        let mut dst = Pixmap::new(3, 3);
        // destination rect hangs off the right/bottom edge
        blit_scaled(&src, Rect::new(0, 0, 2, 2), &mut dst, Rect::new(2, 2, 4, 4), Sampling::Nearest);
        assert_eq!(dst.pixel(2, 2), Rgba8::BLACK);
        assert_eq!(dst.pixel(1, 1), Rgba8::TRANSPARENT);
    }
}
