//! Pure core: geometry, phase classification, transition history and the
//! arc-length resampler.
//!
//! Nothing in this module performs I/O or holds hidden state.

mod geometry;
mod history;
mod resample;
mod state;

pub use geometry::{
    round_coordinate, target_colors, Color, Extent, Marker, Point2D, ORIGIN_COLOR, PALETTE,
};
pub use history::{PhaseHistory, PhaseTransition, DEFAULT_HISTORY_CAPACITY};
pub use resample::{cumulative_distances, resample, DEFAULT_TRAJECTORY_POINTS};
pub use state::State;
