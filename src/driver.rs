//! Tick-driven shell around a capture session.
//!
//! Each tick drains the pending input batch in arrival order, carries out
//! the effects that need I/O, and then polls the pointer once if a recording
//! is active. Everything runs on the caller's thread; an export blocks the
//! tick until it finishes.

use crate::core::Point2D;
use crate::ledger::{DatasetFile, ExportError};
use crate::session::{CaptureSession, InputEvent, RandomSource, SessionEffect, Step};

/// What happened during one tick.
#[derive(Debug, Default)]
pub struct TickReport {
    /// One step per input event, in arrival order.
    pub steps: Vec<Step>,
    /// Result of every export carried out this tick.
    pub exports: Vec<Result<usize, ExportError>>,
    /// Whether the polled pointer position was buffered.
    pub sampled: bool,
}

impl TickReport {
    /// All effects of the tick, flattened in order.
    pub fn effects(&self) -> impl Iterator<Item = &SessionEffect> {
        self.steps.iter().flat_map(|step| step.effects.iter())
    }
}

/// Owns a session and the dataset file its exports append to.
pub struct CaptureLoop<R: RandomSource = fastrand::Rng> {
    session: CaptureSession<R>,
    dataset: DatasetFile,
}

impl<R: RandomSource> CaptureLoop<R> {
    /// Exports go to the session config's dataset path.
    pub fn new(session: CaptureSession<R>) -> Self {
        let dataset = session.config().dataset_file();
        Self { session, dataset }
    }

    pub fn with_dataset(session: CaptureSession<R>, dataset: DatasetFile) -> Self {
        Self { session, dataset }
    }

    /// Run one control-loop iteration.
    pub fn tick<I>(&mut self, events: I, pointer: Option<Point2D>) -> TickReport
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut report = TickReport::default();

        for event in events {
            let step = self.session.handle(event);
            for effect in &step.effects {
                if matches!(effect, SessionEffect::ExportRequested) {
                    report.exports.push(self.export());
                }
            }
            report.steps.push(step);
        }

        if let Some(point) = pointer {
            report.sampled = self.session.sample_pointer(point);
        }
        report
    }

    /// Append the ledger to the dataset file. Samples stay in memory
    /// whatever the outcome, so a failed export can be retried.
    pub fn export(&self) -> Result<usize, ExportError> {
        let result = self.session.ledger().export_to(&self.dataset);
        if let Err(err) = &result {
            tracing::error!(
                session = %self.session.id(),
                path = %self.dataset.path().display(),
                error = %err,
                "export failed"
            );
        }
        result
    }

    pub fn is_running(&self) -> bool {
        !self.session.is_terminated()
    }

    pub fn session(&self) -> &CaptureSession<R> {
        &self.session
    }

    pub fn dataset(&self) -> &DatasetFile {
        &self.dataset
    }

    pub fn into_session(self) -> CaptureSession<R> {
        self.session
    }
}
