//! The capture state machine.
//!
//! [`CaptureSession::handle`] is a total function over (phase, event): every
//! event either produces a transition with effects or is ignored. No I/O
//! happens here; exporting is requested through
//! [`SessionEffect::ExportRequested`] and carried out by the caller.

use super::effect::{SessionEffect, Step};
use super::event::{Command, InputEvent};
use super::path::PathBuffer;
use super::phase::CapturePhase;
use super::placement::RandomSource;
use super::view::SessionView;
use crate::config::CaptureConfig;
use crate::core::{Marker, PhaseHistory, PhaseTransition, Point2D, State, ORIGIN_COLOR};
use crate::ledger::{DatasetLedger, Sample};
use uuid::Uuid;

/// One capture session: current attempt, committed samples and history.
pub struct CaptureSession<R: RandomSource = fastrand::Rng> {
    id: Uuid,
    config: CaptureConfig,
    phase: CapturePhase,
    origin: Marker,
    target: Option<Marker>,
    path: PathBuffer,
    ledger: DatasetLedger,
    random: R,
    history: PhaseHistory<CapturePhase>,
    preview: Option<Vec<Point2D>>,
}

impl<R: RandomSource> CaptureSession<R> {
    /// Create a session from an already validated config.
    pub(crate) fn new(config: CaptureConfig, random: R) -> Self {
        let origin = Marker::new(config.canvas.center(), config.marker_radius, ORIGIN_COLOR);
        let ledger = DatasetLedger::new(config.trajectory_points);
        let history = PhaseHistory::with_capacity(config.history_capacity);
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, points = config.trajectory_points, "capture session created");
        Self {
            id,
            config,
            phase: CapturePhase::Idle,
            origin,
            target: None,
            path: PathBuffer::new(),
            ledger,
            random,
            history,
            preview: None,
        }
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, event: InputEvent) -> Step {
        let from = self.phase;
        if from.is_final() {
            return Step::ignored(from);
        }

        let effects = match (from, event) {
            (_, InputEvent::Command(Command::Terminate)) => self.terminate(),
            (_, InputEvent::Command(Command::Undo)) => self.undo(),
            (_, InputEvent::Command(Command::Export)) => vec![SessionEffect::ExportRequested],
            (CapturePhase::Idle, InputEvent::PointerDown(point))
                if self.target.is_none() && self.origin.hit(&point) =>
            {
                self.arm(point)
            }
            (CapturePhase::Armed, InputEvent::PointerMove(point)) => self.start_recording(point),
            (CapturePhase::Recording, InputEvent::PointerMove(point)) => {
                self.path.push(point);
                Vec::new()
            }
            (CapturePhase::Recording, InputEvent::PointerDown(point))
                if self.target.is_some_and(|target| target.hit(&point)) =>
            {
                self.commit(point)
            }
            _ => Vec::new(),
        };

        if self.phase != from {
            self.history
                .record(PhaseTransition::now(from, self.phase, event.kind()));
        }

        Step {
            from,
            phase: self.phase,
            effects,
        }
    }

    /// Append the pointer position polled this tick. Only buffered while
    /// recording; returns whether the sample was kept.
    pub fn sample_pointer(&mut self, point: Point2D) -> bool {
        if self.phase.is_recording() {
            self.path.push(point);
            true
        } else {
            false
        }
    }

    fn arm(&mut self, click: Point2D) -> Vec<SessionEffect> {
        // The attempt starts exactly where the user clicked.
        self.origin.center = click;
        let placement = self
            .config
            .placement
            .place(click, &self.config.canvas, &mut self.random);
        self.target = Some(Marker::new(
            placement.position,
            self.config.marker_radius,
            placement.color,
        ));
        self.path.reset();
        self.preview = None;
        self.phase = CapturePhase::Armed;

        tracing::info!(
            session = %self.id,
            origin_x = click.x,
            origin_y = click.y,
            target_x = placement.position.x,
            target_y = placement.position.y,
            kind = ?placement.kind,
            "target placed"
        );
        vec![SessionEffect::TargetPlaced {
            position: placement.position,
            color: placement.color,
        }]
    }

    fn start_recording(&mut self, point: Point2D) -> Vec<SessionEffect> {
        self.path.push(point);
        self.phase = CapturePhase::Recording;
        tracing::debug!(session = %self.id, "recording started");
        vec![SessionEffect::RecordingStarted]
    }

    fn commit(&mut self, release: Point2D) -> Vec<SessionEffect> {
        let origin = self.origin.center;
        let path = self.path.take();
        let sample = Sample::capture(origin, release, &path, self.config.trajectory_points);
        let displacement = sample.displacement();
        let preview: Vec<Point2D> = sample.trajectory().iter().map(|p| *p + origin).collect();

        let effects = match self.ledger.append(sample) {
            Ok(index) => {
                tracing::info!(
                    session = %self.id,
                    index,
                    dx = displacement.x,
                    dy = displacement.y,
                    raw_points = path.len(),
                    "sample committed"
                );
                self.preview = Some(preview);
                vec![SessionEffect::Committed {
                    index,
                    displacement,
                }]
            }
            Err(err) => {
                tracing::error!(session = %self.id, error = %err, "sample rejected");
                Vec::new()
            }
        };

        self.reset_attempt();
        effects
    }

    fn undo(&mut self) -> Vec<SessionEffect> {
        if self.ledger.undo().is_none() {
            tracing::info!(session = %self.id, "nothing to undo");
            return vec![SessionEffect::NothingToUndo];
        }

        self.reset_attempt();
        let center = self.config.canvas.center();
        self.preview = self
            .ledger
            .last()
            .map(|sample| sample.trajectory().iter().map(|p| *p + center).collect());

        let remaining = self.ledger.len();
        tracing::info!(session = %self.id, remaining, "undo");
        vec![SessionEffect::Undone { remaining }]
    }

    fn terminate(&mut self) -> Vec<SessionEffect> {
        self.path.reset();
        self.phase = CapturePhase::Terminated;
        tracing::info!(session = %self.id, samples = self.ledger.len(), "session terminated");
        vec![SessionEffect::Terminated]
    }

    /// Drop any in-progress attempt and return to `Idle` at the canvas center.
    fn reset_attempt(&mut self) {
        self.origin = Marker::new(
            self.config.canvas.center(),
            self.config.marker_radius,
            ORIGIN_COLOR,
        );
        self.target = None;
        self.path.reset();
        self.phase = CapturePhase::Idle;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.phase.is_final()
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn origin(&self) -> &Marker {
        &self.origin
    }

    pub fn target(&self) -> Option<&Marker> {
        self.target.as_ref()
    }

    /// The raw path buffered for the current attempt.
    pub fn raw_path(&self) -> &[Point2D] {
        self.path.points()
    }

    pub fn ledger(&self) -> &DatasetLedger {
        &self.ledger
    }

    pub fn history(&self) -> &PhaseHistory<CapturePhase> {
        &self.history
    }

    /// Absolute positions of the last resampled trajectory, if any.
    pub fn preview(&self) -> Option<&[Point2D]> {
        self.preview.as_deref()
    }

    /// Read-only projection for display collaborators.
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            phase: self.phase,
            origin: &self.origin,
            target: self.target.as_ref(),
            live_path: if self.phase.is_recording() {
                self.path.points()
            } else {
                &[]
            },
            preview: self.preview(),
            committed: self.ledger.len(),
        }
    }
}
