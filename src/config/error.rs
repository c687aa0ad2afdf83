//! Configuration errors.

use thiserror::Error;

/// A single rule a configuration breaks.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Trajectory must have at least one point")]
    NoTrajectoryPoints,

    #[error("Marker radius must be positive (got {radius})")]
    NonPositiveRadius { radius: f64 },

    #[error("Near probability must lie in [0, 1] (got {probability})")]
    ProbabilityOutOfRange { probability: f64 },

    #[error("Near radius range [{min}, {max}] must be non-negative and ordered")]
    InvalidNearRadius { min: f64, max: f64 },

    #[error("Margin must be non-negative (got {margin})")]
    NegativeMargin { margin: f64 },

    #[error("Canvas {axis} ({extent}) must exceed twice the margin ({margin})")]
    CanvasTooSmall {
        axis: &'static str,
        extent: f64,
        margin: f64,
    },
}

/// Errors raised when loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", summarize(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn summarize(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
