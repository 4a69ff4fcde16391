//! RGBA color type and the fixed-point blend used by bilinear sampling.
//!
//! Border markers in the 9-patch format are defined as packed ARGB words
//! (`0xFF000000` solid black, `0x00000000` transparent), so `Rgba8` also
//! carries `from_argb`/`to_argb` conversions in that layout.

use crate::basics::uround;

/// Packed ARGB value of a solid-black border tick.
pub const MARKER_BLACK: u32 = 0xFF00_0000;

/// Packed ARGB value of a transparent border pixel.
pub const MARKER_TRANSPARENT: u32 = 0x0000_0000;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_SHIFT: u32 = 8;
    pub const BASE_MASK: u32 = (1 << Self::BASE_SHIFT) - 1;
    pub const BASE_MSB: u32 = 1 << (Self::BASE_SHIFT - 1);

    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);
    pub const BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a 0xAARRGGBB word.
    #[inline]
    pub fn from_argb(v: u32) -> Self {
        Self {
            r: (v >> 16) as u8,
            g: (v >> 8) as u8,
            b: v as u8,
            a: (v >> 24) as u8,
        }
    }

    /// Pack into a 0xAARRGGBB word.
    #[inline]
    pub fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == Self::BASE_MASK as u8
    }

    /// Fixed-point multiply, exact over u8: `(a * b + 128) >> 8` with
    /// rounding correction.
    #[inline]
    pub fn multiply(a: u8, b: u8) -> u8 {
        let t: u32 = a as u32 * b as u32 + Self::BASE_MSB;
        (((t >> Self::BASE_SHIFT) + t) >> Self::BASE_SHIFT) as u8
    }

    /// Interpolate p to q by a.
    #[inline]
    pub fn lerp(p: u8, q: u8, a: u8) -> u8 {
        let t = (q as i32 - p as i32) * a as i32 + Self::BASE_MSB as i32 - (p > q) as i32;
        (p as i32 + (((t >> Self::BASE_SHIFT) + t) >> Self::BASE_SHIFT)) as u8
    }

    /// Blend toward `c` by factor `k` in [0, 1].
    pub fn gradient(&self, c: &Rgba8, k: f64) -> Rgba8 {
        let ik = uround(k * Self::BASE_MASK as f64) as u8;
        Rgba8 {
            r: Self::lerp(self.r, c.r, ik),
            g: Self::lerp(self.g, c.g, ik),
            b: Self::lerp(self.b, c.b, ik),
            a: Self::lerp(self.a, c.a, ik),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
