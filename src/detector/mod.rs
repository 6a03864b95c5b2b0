//! Lane detector orchestrating the per-frame steering pipeline.
//!
//! Overview
//! - Thresholds the color frame into a binary mask of candidate lane
//!   pixels (HSV in-range).
//! - Reduces the mask to thin edges (Gaussian blur composed with Canny)
//!   and crops them to the lower half of the frame.
//! - Runs the probabilistic Hough stage to obtain raw segments; an empty
//!   answer short-circuits to the 90° straight-ahead fail-safe.
//! - Classifies segments into left/right lane candidates by slope sign
//!   and horizontal position, averages each side, projects the result
//!   into bounded endpoints and derives the steering angle.
//!
//! Every call is a pure function of (frame, params): the detector holds
//! only read-only configuration and backend objects, never frame state,
//! so identical inputs always produce identical output.
//!
//! Modules
//! - [`params`] – construction-time configuration.
//! - `pipeline` – the main [`LaneDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::LaneParams;
pub use pipeline::LaneDetector;
