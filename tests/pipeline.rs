//! Pipeline-level behavior with a scripted segment-detection stage.
//!
//! Injecting fixed raw segments through the `SegmentDetector` seam pins
//! down the classification, projection and steering behavior without
//! depending on the image stages.
use image::GrayImage;
use lane_detector::color::HsvInRange;
use lane_detector::edges::CannyEdges;
use lane_detector::image::FrameRgb;
use lane_detector::lanes::classify_segments;
use lane_detector::segments::{HoughOptions, RawSegment, SegmentDetector};
use lane_detector::{LaneDetector, LaneParams, LaneResult};

const WIDTH: usize = 320;
const HEIGHT: usize = 240;

struct FixedSegments(Vec<RawSegment>);

impl SegmentDetector for FixedSegments {
    fn detect(&self, _edges: &GrayImage, _opts: &HoughOptions) -> Vec<RawSegment> {
        self.0.clone()
    }
}

fn run_with_segments(segments: Vec<RawSegment>) -> LaneResult {
    let detector = LaneDetector::with_backends(
        LaneParams::default(),
        Box::new(HsvInRange),
        Box::new(CannyEdges),
        Box::new(FixedSegments(segments)),
    );
    let rgb = vec![0u8; WIDTH * HEIGHT * 3];
    let frame = FrameRgb {
        w: WIDTH,
        h: HEIGHT,
        stride: WIDTH,
        data: &rgb,
    };
    detector.process(frame)
}

#[test]
fn no_segments_returns_fail_safe_ninety() {
    let result = run_with_segments(Vec::new());
    assert_eq!(result.steering_angle, 90);
    assert!(result.lane_lines.is_empty());
}

#[test]
fn single_left_segment_matches_closed_form() {
    // Raw endpoints sit exactly on the bottom and mid rows, so the
    // projected line reproduces them and the angle has a closed form.
    let (x1, x2) = (10, 106);
    let result = run_with_segments(vec![RawSegment::new(x1, HEIGHT as i32, x2, HEIGHT as i32 / 2)]);

    let expected =
        90 - (((x2 - x1) as f64 / (HEIGHT as f64 / 2.0)).atan().to_degrees() as i32);
    assert_eq!(result.steering_angle, expected);
    assert_eq!(result.lane_lines.len(), 1);
}

#[test]
fn mirrored_pair_steers_straight_ahead() {
    let left = RawSegment::new(10, 240, 106, 120);
    let right = RawSegment::new(310, 240, 214, 120); // mirror of `left` about x = 160
    let result = run_with_segments(vec![left, right]);

    assert_eq!(result.steering_angle, 90);
    assert_eq!(result.lane_lines.len(), 2);
}

#[test]
fn vertical_segments_contribute_to_no_side() {
    let vertical = RawSegment::new(50, 240, 50, 120);
    let left = RawSegment::new(10, 240, 106, 120);

    let cls = classify_segments(&[vertical, left], WIDTH);
    assert_eq!(cls.left.len(), 1, "only the sloped segment may count");
    assert_eq!(cls.right.len(), 0);

    // A lone vertical segment leaves both sides empty: fail-safe.
    let result = run_with_segments(vec![vertical]);
    assert_eq!(result.steering_angle, 90);
    assert!(result.lane_lines.is_empty());
}

#[test]
fn half_inside_segment_is_fully_excluded() {
    // Negative slope but the second endpoint crosses the left boundary.
    let straddler = RawSegment::new(100, 240, 250, 100);
    let cls = classify_segments(&[straddler], WIDTH);
    assert!(cls.left.is_empty() && cls.right.is_empty());

    let result = run_with_segments(vec![straddler]);
    assert_eq!(result.steering_angle, 90);
}

#[test]
fn near_zero_slope_stays_within_projection_bounds() {
    // Slope 1/180 in the right region projects far outside the frame.
    let flat = RawSegment::new(120, 199, 300, 200);
    let result = run_with_segments(vec![flat]);

    assert_eq!(result.lane_lines.len(), 1);
    let (lo, hi) = (-(WIDTH as i32), 2 * WIDTH as i32);
    for line in &result.lane_lines {
        assert!((lo..=hi).contains(&line.x1), "x1 out of bounds: {line:?}");
        assert!((lo..=hi).contains(&line.x2), "x2 out of bounds: {line:?}");
    }
}

#[test]
fn identical_inputs_give_identical_angles() {
    let segments = vec![
        RawSegment::new(10, 240, 106, 120),
        RawSegment::new(300, 238, 220, 130),
    ];
    let first = run_with_segments(segments.clone());
    let second = run_with_segments(segments);
    assert_eq!(first.steering_angle, second.steering_angle);
    assert_eq!(first.lane_lines, second.lane_lines);
}
