//! Result and per-stage diagnostics returned by the detector.
use crate::lanes::LaneLine;
use serde::Serialize;

/// Compact per-frame result of the steering pipeline.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LaneResult {
    /// Steering command in integer degrees; 90 is straight ahead.
    pub steering_angle: i32,
    /// 0–2 projected lane lines, left (when present) before right.
    pub lane_lines: Vec<LaneLine>,
    pub latency_ms: f64,
}

/// Stage-by-stage trace of one pipeline invocation.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PipelineTrace {
    pub width: usize,
    pub height: usize,
    pub mask_ms: f64,
    pub edge_ms: f64,
    pub detect_ms: f64,
    pub classify_ms: f64,
    /// Raw segments reported by the detector stage.
    pub segments_total: usize,
    pub left_candidates: usize,
    pub right_candidates: usize,
}

/// Result plus trace, as written by the demo tooling.
#[derive(Clone, Debug, Serialize)]
pub struct LaneReport {
    pub result: LaneResult,
    pub trace: PipelineTrace,
}
