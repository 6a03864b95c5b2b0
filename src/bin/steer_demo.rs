use lane_detector::color::{ColorSegmenter, HsvInRange};
use lane_detector::config::{self, DemoConfig};
use lane_detector::diagnostics::LaneReport;
use lane_detector::edges::{CannyEdges, EdgeExtractor};
use lane_detector::image::{load_rgb_image, save_gray_png, write_json_file, RgbFrameBuf};
use lane_detector::{roi, LaneDetector, LaneParams};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "Usage: steer_demo <config.json>".to_string())?;
    let config = config::load_config(Path::new(&config_path))?;

    let frame = load_rgb_image(&config.input)?;
    let params = LaneParams {
        width: frame.width(),
        height: frame.height(),
        hsv: config.hsv,
        edge: config.edge,
        hough: config.hough,
    };

    let detector = LaneDetector::new(params.clone());
    let report = detector.process_with_diagnostics(frame.as_view());

    print_text_summary(&report);

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }

    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &frame, &params, &config)?;
        println!("Debug artifacts written to {}", dir.display());
    }

    Ok(())
}

fn print_text_summary(report: &LaneReport) {
    let res = &report.result;
    println!("Steering summary");
    println!("  angle: {}°", res.steering_angle);
    println!("  latency_ms: {:.3}", res.latency_ms);
    if res.lane_lines.is_empty() {
        println!("  lane lines: none (fail-safe straight ahead)");
    }
    for line in &res.lane_lines {
        println!(
            "  {:?}: ({}, {}) -> ({}, {})",
            line.side, line.x1, line.y1, line.x2, line.y2
        );
    }

    let trace = &report.trace;
    println!(
        "\nStages: segments={} left_candidates={} right_candidates={}",
        trace.segments_total, trace.left_candidates, trace.right_candidates
    );
    println!(
        "Timings (ms): mask={:.3} edges={:.3} detect={:.3} classify={:.3}",
        trace.mask_ms, trace.edge_ms, trace.detect_ms, trace.classify_ms
    );
}

fn save_debug_artifacts(
    dir: &Path,
    frame: &RgbFrameBuf,
    params: &LaneParams,
    config: &DemoConfig,
) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create debug dir {}: {e}", dir.display()))?;

    // Re-run the image stages with the default backends to capture the
    // intermediates the pipeline itself discards.
    let mask = HsvInRange.segment(&frame.as_view(), &config.hsv);
    save_gray_png(&mask, &dir.join("mask.png"))?;

    let mut edges = CannyEdges.extract(&mask, &params.edge);
    save_gray_png(&edges, &dir.join("edges.png"))?;

    roi::mask_lower_half(&mut edges);
    save_gray_png(&edges, &dir.join("edges_roi.png"))?;

    Ok(())
}
