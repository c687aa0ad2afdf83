//! Persisted record schema.
//!
//! One JSON object per line:
//!
//! ```text
//! {"relative_move":{"dx":50,"dy":20},"trajectory":[[0,0],[5,2],...]}
//! ```
//!
//! Every coordinate is rounded half away from zero when the record is built,
//! so two implementations writing the same samples produce the same bytes.

use super::error::RecordError;
use super::Sample;
use crate::core::round_coordinate;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// Rounded displacement from origin to release point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeMove {
    pub dx: i64,
    pub dy: i64,
}

/// The on-disk shape of a committed sample.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub relative_move: RelativeMove,
    pub trajectory: Vec<[i64; 2]>,
}

/// Model input and flattened target for one record.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingPair {
    /// `[dx, dy]`
    pub input: [f32; 2],
    /// `[x0, y0, x1, y1, ...]`, length `2 * N`
    pub target: Vec<f32>,
}

impl DatasetRecord {
    pub fn from_sample(sample: &Sample) -> Self {
        let displacement = sample.displacement();
        Self {
            relative_move: RelativeMove {
                dx: round_coordinate(displacement.x),
                dy: round_coordinate(displacement.y),
            },
            trajectory: sample.trajectory().iter().map(|p| p.rounded()).collect(),
        }
    }

    /// Serialize as a single JSON line, without the trailing newline.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Convert to a training pair, requiring exactly `points` trajectory pairs.
    pub fn training_pair(&self, points: usize) -> Result<TrainingPair, RecordError> {
        if self.trajectory.len() != points {
            return Err(RecordError::Dimension {
                expected: 2 * points,
                found: 2 * self.trajectory.len(),
            });
        }
        Ok(TrainingPair {
            input: [self.relative_move.dx as f32, self.relative_move.dy as f32],
            target: self
                .trajectory
                .iter()
                .flat_map(|[x, y]| [*x as f32, *y as f32])
                .collect(),
        })
    }
}

/// Read every record from a JSONL stream. Blank lines are skipped.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<DatasetRecord>, RecordError> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| RecordError::Parse {
            line: index + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point2D;

    fn record() -> DatasetRecord {
        let sample = Sample::new(
            Point2D::new(49.5, 20.4),
            vec![Point2D::new(0.0, 0.0), Point2D::new(-2.5, 10.49), Point2D::new(49.6, 19.5)],
        );
        DatasetRecord::from_sample(&sample)
    }

    #[test]
    fn rounds_every_coordinate() {
        let record = record();
        assert_eq!(record.relative_move, RelativeMove { dx: 50, dy: 20 });
        assert_eq!(record.trajectory, vec![[0, 0], [-3, 10], [50, 20]]);
    }

    #[test]
    fn json_line_matches_schema() {
        let line = record().to_json_line().unwrap();
        assert_eq!(
            line,
            r#"{"relative_move":{"dx":50,"dy":20},"trajectory":[[0,0],[-3,10],[50,20]]}"#
        );
        assert!(!line.contains('\n'));
    }

    #[test]
    fn reads_records_and_skips_blank_lines() {
        let data = format!(
            "{}\n\n{}\n",
            record().to_json_line().unwrap(),
            record().to_json_line().unwrap()
        );
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records, vec![record(), record()]);
    }

    #[test]
    fn reports_line_of_malformed_record() {
        let data = format!("{}\n{{\"relative_move\":", record().to_json_line().unwrap());
        match read_records(data.as_bytes()) {
            Err(RecordError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn training_pair_flattens_trajectory() {
        let pair = record().training_pair(3).unwrap();
        assert_eq!(pair.input, [50.0, 20.0]);
        assert_eq!(pair.target, vec![0.0, 0.0, -3.0, 10.0, 50.0, 20.0]);
    }

    #[test]
    fn training_pair_rejects_wrong_length() {
        match record().training_pair(10) {
            Err(RecordError::Dimension { expected, found }) => {
                assert_eq!(expected, 20);
                assert_eq!(found, 6);
            }
            other => panic!("expected dimension error, got {other:?}"),
        }
    }
}
