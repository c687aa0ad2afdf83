//! Data contract with downstream learning components.
//!
//! A trainer fits a mapping from a 2-value input `(dx, dy)` to a `2 * N`
//! output (the flattened trajectory); a predictor runs that mapping. The
//! model itself lives outside this crate. This module only pins the shapes.

use crate::core::Point2D;
use crate::ledger::{DatasetRecord, RecordError, TrainingPair};

/// Width of the model input: `dx`, `dy`.
pub const INPUT_DIM: usize = 2;

/// Width of the model output for `points` trajectory points.
pub const fn output_dim(points: usize) -> usize {
    2 * points
}

/// Anything that can turn a displacement into a trajectory.
pub trait TrajectoryPredictor {
    type Error: std::error::Error;

    /// Predict `N` origin-relative points for a move of `(dx, dy)`.
    fn predict(&self, dx: f32, dy: f32) -> Result<Vec<Point2D>, Self::Error>;
}

/// Convert every record to a training pair, failing on the first record
/// whose trajectory does not have exactly `points` points.
pub fn training_set(
    records: &[DatasetRecord],
    points: usize,
) -> Result<Vec<TrainingPair>, RecordError> {
    records
        .iter()
        .map(|record| record.training_pair(points))
        .collect()
}

/// Reshape a flat `[x0, y0, x1, y1, ...]` model output into points.
pub fn unflatten(output: &[f32], points: usize) -> Result<Vec<Point2D>, RecordError> {
    if output.len() != output_dim(points) {
        return Err(RecordError::Dimension {
            expected: output_dim(points),
            found: output.len(),
        });
    }
    Ok(output
        .chunks_exact(2)
        .map(|pair| Point2D::new(f64::from(pair[0]), f64::from(pair[1])))
        .collect())
}
