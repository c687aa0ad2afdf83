//! Effects emitted by the capture session.
//!
//! `handle` never performs I/O. Anything the outside world should do in
//! response (play a cue, append the dataset to disk) is returned as data.

use super::phase::CapturePhase;
use crate::core::{Color, Point2D};

/// A side effect requested by a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEffect {
    /// A new target was placed; the attempt is armed.
    TargetPlaced { position: Point2D, color: Color },
    /// The first pointer motion after arming started a recording.
    RecordingStarted,
    /// A sample was appended to the ledger at `index`. `displacement` is
    /// already rounded to whole pixels.
    Committed {
        index: usize,
        displacement: Point2D,
    },
    /// The most recent sample was withdrawn; `remaining` samples are left.
    Undone { remaining: usize },
    /// Undo was requested on an empty ledger.
    NothingToUndo,
    /// The caller should export the ledger now.
    ExportRequested,
    /// The session ended.
    Terminated,
}

/// Outcome of handling one event.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub from: CapturePhase,
    pub phase: CapturePhase,
    pub effects: Vec<SessionEffect>,
}

impl Step {
    pub(crate) fn ignored(phase: CapturePhase) -> Self {
        Self {
            from: phase,
            phase,
            effects: Vec::new(),
        }
    }

    /// True when the event changed nothing observable.
    pub fn is_ignored(&self) -> bool {
        self.from == self.phase && self.effects.is_empty()
    }

    pub fn changed_phase(&self) -> bool {
        self.from != self.phase
    }
}
