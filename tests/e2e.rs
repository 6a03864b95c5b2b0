mod common;

use common::synthetic_frame::frame_with_lines;
use lane_detector::image::FrameRgb;
use lane_detector::lanes::LaneSide;
use lane_detector::{LaneDetector, LaneParams};

const WIDTH: usize = 320;
const HEIGHT: usize = 240;
const BLUE: [u8; 3] = [0, 0, 255];

fn detector() -> LaneDetector {
    LaneDetector::new(LaneParams::default())
}

#[test]
fn two_painted_lines_steer_roughly_straight() {
    let _ = env_logger::builder().is_test(true).try_init();
    // Two guide lines mirrored about the frame center, lower half only.
    let rgb = frame_with_lines(
        WIDTH,
        HEIGHT,
        BLUE,
        &[
            ((40.0, 238.0), (120.0, 130.0)),
            ((280.0, 238.0), (200.0, 130.0)),
        ],
        5.0,
    );
    let frame = FrameRgb {
        w: WIDTH,
        h: HEIGHT,
        stride: WIDTH,
        data: &rgb,
    };

    let report = detector().process_with_diagnostics(frame);
    let res = &report.result;

    assert!(
        report.trace.segments_total > 0,
        "expected raw segments from the painted lines"
    );
    assert_eq!(
        res.lane_lines.len(),
        2,
        "expected one representative line per side, trace: {:?}",
        report.trace
    );
    assert_eq!(res.lane_lines[0].side, LaneSide::Left);
    assert_eq!(res.lane_lines[1].side, LaneSide::Right);
    assert!(
        (70..=110).contains(&res.steering_angle),
        "symmetric scene should steer near 90, got {}",
        res.steering_angle
    );
}

#[test]
fn blank_frame_falls_back_to_ninety() {
    let rgb = vec![0u8; WIDTH * HEIGHT * 3];
    let frame = FrameRgb {
        w: WIDTH,
        h: HEIGHT,
        stride: WIDTH,
        data: &rgb,
    };

    let result = detector().process(frame);
    assert_eq!(result.steering_angle, 90);
    assert!(result.lane_lines.is_empty());
}

#[test]
fn full_stack_is_deterministic_across_calls() {
    let rgb = frame_with_lines(
        WIDTH,
        HEIGHT,
        BLUE,
        &[((60.0, 238.0), (140.0, 125.0))],
        5.0,
    );
    let det = detector();

    let first = det.process(FrameRgb {
        w: WIDTH,
        h: HEIGHT,
        stride: WIDTH,
        data: &rgb,
    });
    let second = det.process(FrameRgb {
        w: WIDTH,
        h: HEIGHT,
        stride: WIDTH,
        data: &rgb,
    });

    assert_eq!(first.steering_angle, second.steering_angle);
    assert_eq!(first.lane_lines, second.lane_lines);
}
