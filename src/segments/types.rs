use serde::{Deserialize, Serialize};

/// Line segment in pixel coordinates as reported by the detector.
///
/// Endpoints are unordered raw detector output; a segment with
/// `x1 == x2` has an undefined slope and is skipped by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RawSegment {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// True when both endpoints share an x-coordinate (undefined slope).
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    /// Euclidean endpoint distance in pixels.
    pub fn length(&self) -> f64 {
        let dx = (self.x2 - self.x1) as f64;
        let dy = (self.y2 - self.y1) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}
