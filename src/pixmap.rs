//! Owned RGBA8 pixel buffer.
//!
//! Row-major, top-down, 4 bytes per pixel. This is the only pixel container
//! in the crate; both the decoded 9-patch source and render targets are
//! `Pixmap`s.

use crate::color::Rgba8;
use crate::error::{Error, Result};

const BPP: usize = 4;

/// An owned RGBA pixel buffer with dimensions.
///
/// Invariant: `data.len() == width * height * 4`.
#[derive(Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Create a transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * BPP],
        }
    }

    /// Wrap raw RGBA bytes, validating the length.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if data.len() != width as usize * height as usize * BPP {
            return Err(Error::BadBufferSize {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row length in bytes.
    pub fn stride(&self) -> usize {
        self.width as usize * BPP
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Byte slice of row `y`.
    pub fn row_slice(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let stride = self.stride();
        let off = y as usize * stride;
        &self.data[off..off + stride]
    }

    /// Mutable byte slice of row `y`.
    pub fn row_slice_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let stride = self.stride();
        let off = y as usize * stride;
        &mut self.data[off..off + stride]
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        debug_assert!(x < self.width && y < self.height);
        let off = (y as usize * self.width as usize + x as usize) * BPP;
        Rgba8::new(
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
            self.data[off + 3],
        )
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, c: Rgba8) {
        debug_assert!(x < self.width && y < self.height);
        let off = (y as usize * self.width as usize + x as usize) * BPP;
        self.data[off] = c.r;
        self.data[off + 1] = c.g;
        self.data[off + 2] = c.b;
        self.data[off + 3] = c.a;
    }

    /// Fill the whole buffer with a solid color.
    pub fn fill(&mut self, c: Rgba8) {
        for px in self.data.chunks_exact_mut(BPP) {
            px[0] = c.r;
            px[1] = c.g;
            px[2] = c.b;
            px[3] = c.a;
        }
    }

    /// Copy all of `src` into this buffer with its top-left corner at
    /// (`dst_x`, `dst_y`). Rows and columns falling outside are clipped.
    pub fn copy_from(&mut self, src: &Pixmap, dst_x: u32, dst_y: u32) {
        let w = src.width.min(self.width.saturating_sub(dst_x)) as usize;
        let h = src.height.min(self.height.saturating_sub(dst_y));
        if w == 0 {
            return;
        }
        for y in 0..h {
            let s = &src.row_slice(y)[..w * BPP];
            let doff = (dst_x as usize) * BPP;
            let d = &mut self.row_slice_mut(dst_y + y)[doff..doff + w * BPP];
            d.copy_from_slice(s);
        }
    }
}

impl std::fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
