//! Build errors for capture sessions.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a capture session.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Random source not specified. Call .seed(n), .entropy() or .random_source(r) before .build()")]
    MissingRandomSource,

    #[error("Session configuration rejected: {0}")]
    InvalidConfig(#[from] ConfigError),
}
