use crate::segments::RawSegment;
use serde::{Deserialize, Serialize};

/// Which side of the lane a line belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaneSide {
    Left,
    Right,
}

/// Slope/intercept line fit (`y = slope * x + intercept`) of one segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaneCandidate {
    pub slope: f64,
    pub intercept: f64,
}

impl LaneCandidate {
    /// Fit a line through the segment endpoints.
    ///
    /// Returns `None` for vertical segments: their slope is undefined and
    /// they must contribute to no candidate set.
    pub fn fit(seg: &RawSegment) -> Option<Self> {
        if seg.is_vertical() {
            return None;
        }
        let slope = (seg.y2 - seg.y1) as f64 / (seg.x2 - seg.x1) as f64;
        let intercept = seg.y1 as f64 - slope * seg.x1 as f64;
        Some(Self { slope, intercept })
    }
}

/// Arithmetic-mean line over all candidates of one side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepresentativeLine {
    pub side: LaneSide,
    pub slope: f64,
    pub intercept: f64,
}

/// Representative line projected into clamped pixel endpoints.
///
/// `(x1, y1)` lies on the bottom row, `(x2, y2)` on the frame mid-row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneLine {
    pub side: LaneSide,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}
