//! Committed samples and their persistence.
//!
//! The [`DatasetLedger`] keeps committed samples in commit order together
//! with an undone stack. Undo moves the newest sample onto that stack; any
//! later append clears it, so an undone sample can never reappear in an
//! export. Nothing replays the undone stack today.
//!
//! Export writes one [`DatasetRecord`] per line and only ever appends.

pub mod error;
pub mod file;
pub mod record;

pub use error::{ExportError, LedgerError, RecordError};
pub use file::{DatasetFile, DEFAULT_DATASET_PATH};
pub use record::{read_records, DatasetRecord, RelativeMove, TrainingPair};

use crate::core::{resample, Point2D};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One committed demonstration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    displacement: Point2D,
    trajectory: Vec<Point2D>,
}

impl Sample {
    pub fn new(displacement: Point2D, trajectory: Vec<Point2D>) -> Self {
        Self {
            displacement,
            trajectory,
        }
    }

    /// Build a sample from a finished recording.
    ///
    /// `release` is where the commit click landed. The displacement is
    /// `release - origin` rounded to whole pixels; the trajectory is the
    /// raw path resampled to `points` points relative to `origin`.
    pub fn capture(origin: Point2D, release: Point2D, path: &[Point2D], points: usize) -> Self {
        let [dx, dy] = (release - origin).rounded();
        Self {
            displacement: Point2D::new(dx as f64, dy as f64),
            trajectory: resample(path, points, origin),
        }
    }

    pub fn displacement(&self) -> Point2D {
        self.displacement
    }

    pub fn trajectory(&self) -> &[Point2D] {
        &self.trajectory
    }

    pub fn to_record(&self) -> DatasetRecord {
        DatasetRecord::from_sample(self)
    }
}

/// Ordered in-memory collection of committed samples.
#[derive(Clone, Debug)]
pub struct DatasetLedger {
    points_per_sample: usize,
    samples: Vec<Sample>,
    undone: Vec<Sample>,
}

impl DatasetLedger {
    /// An empty ledger whose samples all carry `points_per_sample` points.
    pub fn new(points_per_sample: usize) -> Self {
        Self {
            points_per_sample,
            samples: Vec::new(),
            undone: Vec::new(),
        }
    }

    pub fn points_per_sample(&self) -> usize {
        self.points_per_sample
    }

    /// Append a sample and invalidate the undone stack.
    ///
    /// Returns the index of the new sample.
    pub fn append(&mut self, sample: Sample) -> Result<usize, LedgerError> {
        if sample.trajectory.len() != self.points_per_sample {
            return Err(LedgerError::ShapeMismatch {
                expected: self.points_per_sample,
                found: sample.trajectory.len(),
            });
        }
        self.undone.clear();
        self.samples.push(sample);
        Ok(self.samples.len() - 1)
    }

    /// Move the newest sample to the undone stack and return a copy of it.
    ///
    /// Returns `None` and changes nothing when the ledger is empty.
    pub fn undo(&mut self) -> Option<Sample> {
        let sample = self.samples.pop()?;
        self.undone.push(sample.clone());
        Some(sample)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Samples withdrawn since the last append, oldest first.
    pub fn undone(&self) -> &[Sample] {
        &self.undone
    }

    /// Records in commit order.
    pub fn records(&self) -> impl Iterator<Item = DatasetRecord> + '_ {
        self.samples.iter().map(Sample::to_record)
    }

    /// Write every sample as one JSON line and return how many were written.
    ///
    /// Not atomic: an I/O failure part way through may leave a partial last
    /// line, but never touches content written before the call.
    pub fn export<W: Write>(&self, writer: &mut W) -> Result<usize, ExportError> {
        let mut written = 0;
        for record in self.records() {
            serde_json::to_writer(&mut *writer, &record)?;
            writer.write_all(b"\n")?;
            written += 1;
        }
        writer.flush()?;
        Ok(written)
    }

    /// Append every sample to `file`, creating it if needed.
    pub fn export_to(&self, file: &DatasetFile) -> Result<usize, ExportError> {
        let mut writer = file.open_append()?;
        let written = self.export(&mut writer)?;
        tracing::info!(
            samples = written,
            path = %file.path().display(),
            "samples saved"
        );
        Ok(written)
    }
}
