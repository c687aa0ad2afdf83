//! Lifecycle phases of a capture attempt.

crate::state_enum! {
    /// Where the current capture attempt stands.
    ///
    /// A commit is not a resting phase: a successful commit moves the session
    /// from `Recording` straight back to `Idle`.
    pub enum CapturePhase {
        /// No target armed; waiting for a click on the origin marker.
        Idle,
        /// Origin fixed and target placed; the pointer has not moved yet.
        Armed,
        /// The pointer is travelling toward the target; samples are buffered.
        Recording,
        /// The session has ended and accepts no further input.
        Terminated,
    }
    final: [Terminated]
}

impl CapturePhase {
    /// Whether pointer samples are currently being buffered.
    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }
}
