//! Projection of representative lines into bounded pixel endpoints.
use super::types::{LaneLine, RepresentativeLine};

/// Project a representative line onto the bottom row and the mid-row.
///
/// `y1 = height` (bottom of the frame), `y2 = height / 2`, and each
/// `x = (y - intercept) / slope` saturates into `[-width, 2 * width]` so
/// near-zero slopes cannot blow up the coordinates.
pub fn project_line(line: &RepresentativeLine, width: usize, height: usize) -> LaneLine {
    let y1 = height as i32;
    let y2 = (height / 2) as i32;
    LaneLine {
        side: line.side,
        x1: x_at(line, y1, width),
        y1,
        x2: x_at(line, y2, width),
        y2,
    }
}

fn x_at(line: &RepresentativeLine, y: i32, width: usize) -> i32 {
    let x = (y as f64 - line.intercept) / line.slope;
    // Clamp before truncating: infinities from near-zero slopes saturate.
    x.clamp(-(width as f64), 2.0 * width as f64) as i32
}
