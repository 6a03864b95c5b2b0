use lane_detector::image::FrameRgb;
use lane_detector::{LaneDetector, LaneParams};

fn main() {
    // Demo stub: runs the detector on a synthetic black frame
    let params = LaneParams::default();
    let (w, h) = (params.width, params.height);
    let rgb = vec![0u8; w * h * 3];
    let frame = FrameRgb {
        w,
        h,
        stride: w,
        data: &rgb,
    };

    let detector = LaneDetector::new(params);
    let result = detector.process(frame);
    println!(
        "steering_angle={} lines={} latency_ms={:.3}",
        result.steering_angle,
        result.lane_lines.len(),
        result.latency_ms
    );
}
