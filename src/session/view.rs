//! Read-only projection of a session for display collaborators.

use super::phase::CapturePhase;
use crate::core::{Marker, Point2D};

/// Everything a renderer needs for one frame. Borrowed from the session so
/// the display can never mutate capture state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionView<'a> {
    pub phase: CapturePhase,
    pub origin: &'a Marker,
    pub target: Option<&'a Marker>,
    /// The raw path while recording; empty otherwise.
    pub live_path: &'a [Point2D],
    /// Absolute canvas positions of the last resampled trajectory.
    pub preview: Option<&'a [Point2D]>,
    /// Number of committed samples.
    pub committed: usize,
}
