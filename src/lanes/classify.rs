//! Slope-sign lane classification and per-side averaging.
use super::types::{LaneCandidate, LaneSide, RepresentativeLine};
use crate::segments::RawSegment;
use log::debug;

/// Fraction of the frame width excluded from each side's search region.
/// The two boundaries overlap: the middle third belongs to neither side.
pub const BOUNDARY_FRACTION: f64 = 1.0 / 3.0;

/// Left candidates must keep both endpoints left of this column.
pub fn left_region_boundary(width: usize) -> f64 {
    width as f64 * (1.0 - BOUNDARY_FRACTION)
}

/// Right candidates must keep both endpoints right of this column.
pub fn right_region_boundary(width: usize) -> f64 {
    width as f64 * BOUNDARY_FRACTION
}

/// Per-side candidate sets produced by [`classify_segments`].
#[derive(Clone, Debug, Default)]
pub struct LaneClassification {
    pub left: Vec<LaneCandidate>,
    pub right: Vec<LaneCandidate>,
}

/// Split raw segments into left/right candidate sets.
///
/// Vertical segments are skipped before fitting. A negative-slope segment
/// is a left candidate only when BOTH endpoints lie left of the left
/// region boundary; a non-negative-slope segment is a right candidate only
/// when BOTH endpoints lie right of the right region boundary. Segments
/// failing the test are discarded, never reassigned to the other side.
pub fn classify_segments(segments: &[RawSegment], width: usize) -> LaneClassification {
    let left_boundary = left_region_boundary(width);
    let right_boundary = right_region_boundary(width);
    let mut classification = LaneClassification::default();

    for seg in segments {
        let Some(fit) = LaneCandidate::fit(seg) else {
            continue;
        };
        let (x1, x2) = (seg.x1 as f64, seg.x2 as f64);
        if fit.slope < 0.0 {
            if x1 < left_boundary && x2 < left_boundary {
                classification.left.push(fit);
            }
        } else if x1 > right_boundary && x2 > right_boundary {
            classification.right.push(fit);
        }
    }

    debug!(
        "classify_segments segments={} left={} right={}",
        segments.len(),
        classification.left.len(),
        classification.right.len()
    );
    classification
}

/// Average each non-empty candidate set into one representative line.
///
/// The returned order is semantically significant downstream: left (when
/// present) always precedes right.
pub fn average_lanes(classification: &LaneClassification) -> Vec<RepresentativeLine> {
    let mut lanes = Vec::with_capacity(2);
    if let Some(mean) = mean_fit(&classification.left) {
        lanes.push(RepresentativeLine {
            side: LaneSide::Left,
            slope: mean.0,
            intercept: mean.1,
        });
    }
    if let Some(mean) = mean_fit(&classification.right) {
        lanes.push(RepresentativeLine {
            side: LaneSide::Right,
            slope: mean.0,
            intercept: mean.1,
        });
    }
    lanes
}

fn mean_fit(candidates: &[LaneCandidate]) -> Option<(f64, f64)> {
    if candidates.is_empty() {
        return None;
    }
    let n = candidates.len() as f64;
    let slope = candidates.iter().map(|c| c.slope).sum::<f64>() / n;
    let intercept = candidates.iter().map(|c| c.intercept).sum::<f64>() / n;
    Some((slope, intercept))
}
