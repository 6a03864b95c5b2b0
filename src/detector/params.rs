//! Construction-time configuration for the lane detector.
//!
//! The recognized options are the frame geometry and the HSV thresholds;
//! the edge and Hough knobs carry hand-tuned defaults and normally stay
//! untouched.
use crate::color::HsvRange;
use crate::edges::EdgeOptions;
use crate::segments::HoughOptions;
use serde::Deserialize;

/// Detector-wide parameters, fixed at construction and never mutated.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    /// Frame width in pixels, agreed with the frame source.
    pub width: usize,
    /// Frame height in pixels, agreed with the frame source.
    pub height: usize,
    /// HSV thresholds selecting the guide-line color.
    pub hsv: HsvRange,
    /// Edge extraction tuning (Canny 200/400 by default).
    pub edge: EdgeOptions,
    /// Segment detector tuning (1 px, 1°, 20 votes, 20 px, 14 px gap).
    pub hough: HoughOptions,
}

impl Default for LaneParams {
    fn default() -> Self {
        // Camera geometry of the robot car.
        Self {
            width: 320,
            height: 240,
            hsv: HsvRange::default(),
            edge: EdgeOptions::default(),
            hough: HoughOptions::default(),
        }
    }
}
