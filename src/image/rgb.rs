//! Borrowed and owned 3-channel 8-bit frame buffers.
//!
//! The detector consumes a borrowed [`FrameRgb`] view: the caller owns the
//! pixel data for the duration of one pipeline call and nothing is retained
//! afterwards. [`RgbFrameBuf`] is the owned counterpart used by I/O and the
//! demo tools.

/// Borrowed packed-RGB frame view (8 bits per channel).
#[derive(Clone, Debug)]
pub struct FrameRgb<'a> {
    pub w: usize,
    pub h: usize,
    /// Pixels between consecutive rows (row byte offset is `3 * stride`).
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> FrameRgb<'a> {
    /// Borrow one row as `3 * w` interleaved RGB bytes.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride * 3;
        &self.data[start..start + self.w * 3]
    }

    /// Read the RGB triple at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.stride + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Owned packed-RGB buffer with stride equal to width.
#[derive(Clone, Debug)]
pub struct RgbFrameBuf {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbFrameBuf {
    /// Construct an owned frame given raw interleaved RGB bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Frame width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only [`FrameRgb`] view
    pub fn as_view(&self) -> FrameRgb<'_> {
        FrameRgb {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}
