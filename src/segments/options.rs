use serde::{Deserialize, Serialize};

/// Parameters of the probabilistic Hough segment detector.
///
/// Defaults are hand-tuned for 320×240 frames; they are deliberately
/// permissive on gaps because the edge extractor reports two thin
/// contours per painted guide line.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughOptions {
    /// Distance precision of the accumulator in pixels.
    pub rho: f32,
    /// Angular precision of the accumulator in degrees.
    pub theta_deg: f32,
    /// Minimum accumulator votes before a line hypothesis is accepted.
    pub votes: u32,
    /// Minimum accepted segment span in pixels.
    pub min_length: f32,
    /// Maximum run of off-pixels tolerated inside one segment.
    pub max_gap: f32,
}

impl Default for HoughOptions {
    fn default() -> Self {
        Self {
            rho: 1.0,
            theta_deg: 1.0,
            votes: 20,
            min_length: 20.0,
            max_gap: 14.0,
        }
    }
}
