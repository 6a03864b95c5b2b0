//! Steering-angle computation from the final lane lines.
//!
//! Degrees convention: 90 is straight ahead; smaller values steer one way,
//! larger the other. The output is intentionally unclamped – bounding it
//! to an actuator range is the actuator boundary's concern.
use crate::lanes::LaneLine;

/// Fail-safe command when no lane geometry is available.
pub const STRAIGHT_AHEAD_DEG: i32 = 90;

/// Compute the steering angle from 0, 1 or 2 lane lines (left first).
///
/// - No lines: straight ahead.
/// - One line: the line's own horizontal drift `x2 - x1` acts as a
///   relative-heading proxy.
/// - Two lines: true lateral offset of the lane midpoint at the mid-row
///   against the frame center.
///
/// The angle to the lane midpoint is truncated toward zero, matching the
/// integer-degree granularity of the steering servo.
pub fn compute_steering_angle(lines: &[LaneLine], width: usize, height: usize) -> i32 {
    if lines.is_empty() {
        return STRAIGHT_AHEAD_DEG;
    }

    let x_offset = if lines.len() == 1 {
        (lines[0].x2 - lines[0].x1) as f64
    } else {
        let mid = (width / 2) as f64;
        (lines[0].x2 + lines[1].x2) as f64 / 2.0 - mid
    };
    let y_offset = (height / 2) as f64;

    let angle_to_mid_deg = (x_offset / y_offset).atan().to_degrees() as i32;
    STRAIGHT_AHEAD_DEG - angle_to_mid_deg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::LaneSide;

    const W: usize = 320;
    const H: usize = 240;

    fn line(side: LaneSide, x1: i32, x2: i32) -> LaneLine {
        LaneLine {
            side,
            x1,
            y1: H as i32,
            x2,
            y2: (H / 2) as i32,
        }
    }

    #[test]
    fn no_lines_is_straight_ahead() {
        assert_eq!(compute_steering_angle(&[], W, H), STRAIGHT_AHEAD_DEG);
    }

    #[test]
    fn single_line_uses_own_drift() {
        // x_offset = 96, atan(96/120) = 38.65..° -> truncated 38.
        let lines = [line(LaneSide::Left, 10, 106)];
        assert_eq!(compute_steering_angle(&lines, W, H), 52);
    }

    #[test]
    fn single_line_negative_drift_truncates_toward_zero() {
        // x_offset = -96 -> -38.65° truncates to -38, not -39.
        let lines = [line(LaneSide::Right, 106, 10)];
        assert_eq!(compute_steering_angle(&lines, W, H), 128);
    }

    #[test]
    fn symmetric_pair_is_straight_ahead() {
        // Mid-row xs average exactly to the frame center (160).
        let lines = [line(LaneSide::Left, 10, 106), line(LaneSide::Right, 310, 214)];
        assert_eq!(compute_steering_angle(&lines, W, H), 90);
    }

    #[test]
    fn offset_pair_turns_toward_lane_midpoint() {
        // Midpoint at 220, offset +60, atan(60/120) = 26.56..° -> 26.
        let lines = [line(LaneSide::Left, 60, 160), line(LaneSide::Right, 300, 280)];
        assert_eq!(compute_steering_angle(&lines, W, H), 64);
    }

    #[test]
    fn extreme_offset_is_not_clamped() {
        // Saturated projection at 2 * width still yields a legal angle.
        let lines = [line(LaneSide::Left, -(W as i32), 2 * W as i32)];
        let angle = compute_steering_angle(&lines, W, H);
        assert!(angle < 90 - 80, "expected a hard turn, got {angle}");
    }
}
