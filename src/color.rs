//! Color segmentation: HSV thresholding of an RGB frame into a binary mask.
//!
//! The guide lines on the driving surface are located by color, not by
//! intensity, so the frame is converted to HSV and thresholded with an
//! inclusive per-channel range. The conversion follows the 8-bit OpenCV
//! convention (hue halved into 0..=179, saturation and value in 0..=255) so
//! that thresholds tuned against `cv2.inRange` carry over unchanged.
use crate::image::FrameRgb;
use image::GrayImage;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Mask value for pixels inside the configured color range.
pub const MASK_ON: u8 = 255;

/// Inclusive per-channel HSV threshold bounds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HsvRange {
    /// Lower (h, s, v) bound, hue in 0..=179.
    pub lower: [u8; 3],
    /// Upper (h, s, v) bound, hue in 0..=179.
    pub upper: [u8; 3],
}

impl Default for HsvRange {
    fn default() -> Self {
        // Tuned for the blue tape on the test track.
        Self {
            lower: [26, 207, 39],
            upper: [179, 255, 255],
        }
    }
}

impl HsvRange {
    /// True iff every channel lies inside the inclusive range.
    #[inline]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }
}

/// Capability interface for the color segmentation stage.
///
/// Implementations must be pure: same frame and range, same mask.
pub trait ColorSegmenter: Send + Sync {
    /// Threshold `frame` into a `{0, 255}` mask of candidate lane pixels.
    fn segment(&self, frame: &FrameRgb<'_>, range: &HsvRange) -> GrayImage;
}

/// Default CPU backend: per-pixel RGB→HSV conversion with row parallelism.
#[derive(Clone, Copy, Debug, Default)]
pub struct HsvInRange;

impl ColorSegmenter for HsvInRange {
    fn segment(&self, frame: &FrameRgb<'_>, range: &HsvRange) -> GrayImage {
        let (w, h) = (frame.w, frame.h);
        let mut mask = GrayImage::new(w as u32, h as u32);
        mask.par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, mask_row)| {
                let row = frame.row(y);
                for (x, out) in mask_row.iter_mut().enumerate() {
                    let i = x * 3;
                    let hsv = rgb_to_hsv(row[i], row[i + 1], row[i + 2]);
                    *out = if range.contains(hsv) { MASK_ON } else { 0 };
                }
            });
        mask
    }
}

/// Convert one 8-bit RGB pixel to HSV in the OpenCV convention:
/// hue in 0..=179 (degrees halved), saturation and value in 0..=255.
#[inline]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let v = rf.max(gf).max(bf);
    let vmin = rf.min(gf).min(bf);
    let diff = v - vmin;

    let s = if v > 0.0 { 255.0 * diff / v } else { 0.0 };

    let h = if diff > 0.0 {
        let hue = if v == rf {
            60.0 * (gf - bf) / diff
        } else if v == gf {
            120.0 + 60.0 * (bf - rf) / diff
        } else {
            240.0 + 60.0 * (rf - gf) / diff
        };
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };
        hue / 2.0
    } else {
        0.0
    };

    // Hues just below 360° round to 180 after halving; wrap them to 0.
    [
        ((h + 0.5) as u32 % 180) as u8,
        (s + 0.5).min(255.0) as u8,
        (v + 0.5).min(255.0) as u8,
    ]
}
