//! Lane classification and geometry.
//!
//! Raw segments are fitted to slope/intercept form, split into left/right
//! candidate sets by slope sign and horizontal position, averaged into at
//! most one representative line per side, and projected back into bounded
//! pixel endpoints for the steering computation.

pub mod classify;
pub mod project;
pub mod types;

pub use classify::{
    average_lanes, classify_segments, left_region_boundary, right_region_boundary,
    LaneClassification,
};
pub use project::project_line;
pub use types::{LaneCandidate, LaneLine, LaneSide, RepresentativeLine};
