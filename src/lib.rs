#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod image;

// Stage modules – public so alternative backends and tools can reuse them.
pub mod color;
pub mod config;
pub mod edges;
pub mod lanes;
pub mod roi;
pub mod segments;
pub mod steering;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{LaneDetector, LaneParams};
pub use crate::diagnostics::{LaneReport, LaneResult, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_detector::prelude::*;
///
/// # fn main() {
/// let params = LaneParams::default();
/// let (w, h) = (params.width, params.height);
/// let rgb = vec![0u8; w * h * 3];
/// let frame = FrameRgb { w, h, stride: w, data: &rgb };
///
/// let detector = LaneDetector::new(params);
/// let result = detector.process(frame);
/// println!("angle={} latency_ms={:.3}", result.steering_angle, result.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::FrameRgb;
    pub use crate::{LaneDetector, LaneParams, LaneResult};
}
