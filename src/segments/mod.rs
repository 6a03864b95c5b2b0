//! Raw line-segment detection over the cropped edge map.
//!
//! The detector stage is a black-box capability behind [`SegmentDetector`]:
//! given an edge map and [`HoughOptions`], it returns the finite straight
//! segments consistent with the voting thresholds. An empty result is the
//! "no segments found" signal and is normal control flow, not an error –
//! the pipeline answers it with the straight-ahead fail-safe.

pub mod hough;
pub mod options;
pub mod types;

pub use hough::{HoughSegments, SegmentDetector};
pub use options::HoughOptions;
pub use types::RawSegment;
