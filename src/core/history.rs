//! Phase transition history.
//!
//! Every accepted transition of the capture session is recorded with the
//! input that caused it and a wall-clock timestamp. The history is a
//! diagnostic log only; nothing in the capture path reads it back.
//!
//! Recording is O(1): the log is a ring that keeps the most recent
//! `capacity` transitions and drops the oldest.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::VecDeque;
use std::time::Duration;

/// Transitions kept by [`PhaseHistory::default`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 1024;

/// Record of a single phase change.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseTransition<S: State> {
    /// The phase being left
    pub from: S,
    /// The phase being entered
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Short name of the input that triggered it
    pub trigger: Cow<'static, str>,
}

impl<S: State> PhaseTransition<S> {
    pub fn now(from: S, to: S, trigger: &'static str) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
            trigger: Cow::Borrowed(trigger),
        }
    }
}

/// Bounded, ordered history of phase transitions.
///
/// # Example
///
/// ```rust
/// use trajectory_capture::core::{PhaseHistory, PhaseTransition};
/// use trajectory_capture::session::CapturePhase;
///
/// let mut history = PhaseHistory::new();
/// history.record(PhaseTransition::now(CapturePhase::Idle, CapturePhase::Armed, "pointer-down"));
/// history.record(PhaseTransition::now(CapturePhase::Armed, CapturePhase::Recording, "pointer-move"));
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], &CapturePhase::Recording);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseHistory<S: State> {
    transitions: VecDeque<PhaseTransition<S>>,
    capacity: usize,
    recorded: u64,
}

impl<S: State> Default for PhaseHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> PhaseHistory<S> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// A history keeping at most `capacity` transitions. Zero disables it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
            recorded: 0,
        }
    }

    /// Append a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: PhaseTransition<S>) {
        self.recorded += 1;
        if self.capacity == 0 {
            return;
        }
        if self.transitions.len() == self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Phases traversed by the retained transitions: the first `from`,
    /// then each `to` in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Number of retained transitions that entered `phase`.
    pub fn entries_into(&self, phase: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == phase).count()
    }

    /// Time between the oldest and newest retained transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &VecDeque<PhaseTransition<S>> {
        &self.transitions
    }

    pub fn last(&self) -> Option<&PhaseTransition<S>> {
        self.transitions.back()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Transitions recorded over the whole session, evicted ones included.
    pub fn recorded(&self) -> u64 {
        self.recorded
    }
}
