//! Detector pipeline driving the frame-to-angle transform end-to-end.
//!
//! The [`LaneDetector`] exposes a simple API: feed an RGB frame and get a
//! steering angle with the projected lane lines, optionally with a
//! per-stage trace. Internally it coordinates color segmentation, edge
//! extraction, the region-of-interest crop, segment detection, lane
//! classification and the steering computation.
//!
//! Typical usage:
//! ```no_run
//! use lane_detector::{LaneDetector, LaneParams};
//! use lane_detector::image::FrameRgb;
//!
//! # fn example(frame: FrameRgb) {
//! let detector = LaneDetector::new(LaneParams::default());
//! let result = detector.process(frame);
//! println!("steering: {}°", result.steering_angle);
//! # }
//! ```
use super::params::LaneParams;
use crate::color::{ColorSegmenter, HsvInRange};
use crate::diagnostics::{LaneReport, LaneResult, PipelineTrace};
use crate::edges::{CannyEdges, EdgeExtractor};
use crate::image::FrameRgb;
use crate::lanes::{average_lanes, classify_segments, project_line, LaneLine};
use crate::roi;
use crate::segments::{HoughSegments, SegmentDetector};
use crate::steering::compute_steering_angle;
use log::debug;
use std::time::Instant;

/// Lane detector orchestrating segmentation, edge extraction, segment
/// detection, classification and the steering-angle computation.
pub struct LaneDetector {
    params: LaneParams,
    segmenter: Box<dyn ColorSegmenter>,
    edges: Box<dyn EdgeExtractor>,
    detector: Box<dyn SegmentDetector>,
}

impl LaneDetector {
    /// Create a detector with the default CPU backends.
    pub fn new(params: LaneParams) -> Self {
        Self::with_backends(
            params,
            Box::new(HsvInRange),
            Box::new(CannyEdges),
            Box::new(HoughSegments),
        )
    }

    /// Create a detector with substituted stage backends.
    pub fn with_backends(
        params: LaneParams,
        segmenter: Box<dyn ColorSegmenter>,
        edges: Box<dyn EdgeExtractor>,
        detector: Box<dyn SegmentDetector>,
    ) -> Self {
        Self {
            params,
            segmenter,
            edges,
            detector,
        }
    }

    /// Read-only view of the construction-time configuration.
    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// Run the pipeline on one frame, returning the compact result.
    pub fn process(&self, frame: FrameRgb<'_>) -> LaneResult {
        self.process_with_diagnostics(frame).result
    }

    /// Run the pipeline and return both the result and a stage trace.
    pub fn process_with_diagnostics(&self, frame: FrameRgb<'_>) -> LaneReport {
        let (width, height) = (self.params.width, self.params.height);
        debug!("LaneDetector::process start w={} h={}", width, height);
        let total_start = Instant::now();
        let mut trace = PipelineTrace {
            width,
            height,
            ..Default::default()
        };

        let mask_start = Instant::now();
        let mask = self.segmenter.segment(&frame, &self.params.hsv);
        trace.mask_ms = mask_start.elapsed().as_secs_f64() * 1000.0;

        let edge_start = Instant::now();
        let mut edge_map = self.edges.extract(&mask, &self.params.edge);
        roi::mask_lower_half(&mut edge_map);
        trace.edge_ms = edge_start.elapsed().as_secs_f64() * 1000.0;

        let detect_start = Instant::now();
        let segments = self.detector.detect(&edge_map, &self.params.hough);
        trace.detect_ms = detect_start.elapsed().as_secs_f64() * 1000.0;
        trace.segments_total = segments.len();

        // "No segments" is normal control flow: answer straight ahead
        // without attempting classification.
        if segments.is_empty() {
            debug!("LaneDetector::process no segments -> fail-safe 90");
            return self.finish(trace, Vec::new(), total_start);
        }

        let classify_start = Instant::now();
        let classification = classify_segments(&segments, width);
        trace.left_candidates = classification.left.len();
        trace.right_candidates = classification.right.len();
        let lane_lines: Vec<LaneLine> = average_lanes(&classification)
            .iter()
            .map(|line| project_line(line, width, height))
            .collect();
        trace.classify_ms = classify_start.elapsed().as_secs_f64() * 1000.0;

        self.finish(trace, lane_lines, total_start)
    }

    fn finish(
        &self,
        trace: PipelineTrace,
        lane_lines: Vec<LaneLine>,
        total_start: Instant,
    ) -> LaneReport {
        let steering_angle =
            compute_steering_angle(&lane_lines, self.params.width, self.params.height);
        let latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "LaneDetector::process done segments={} lines={} angle={} latency_ms={:.3}",
            trace.segments_total,
            lane_lines.len(),
            steering_angle,
            latency_ms
        );
        LaneReport {
            result: LaneResult {
                steering_angle,
                lane_lines,
                latency_ms,
            },
            trace,
        }
    }
}
