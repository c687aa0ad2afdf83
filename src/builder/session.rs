//! Builder for constructing capture sessions.

use crate::builder::error::BuildError;
use crate::config::CaptureConfig;
use crate::session::{CaptureSession, RandomSource};

/// Builder for constructing capture sessions with a fluent API.
///
/// # Example
///
/// ```
/// use trajectory_capture::builder::SessionBuilder;
/// use trajectory_capture::session::CapturePhase;
///
/// let session = SessionBuilder::new().seed(42).build().unwrap();
/// assert_eq!(session.phase(), CapturePhase::Idle);
/// ```
pub struct SessionBuilder<R: RandomSource = fastrand::Rng> {
    config: Option<CaptureConfig>,
    random: Option<R>,
}

impl SessionBuilder<fastrand::Rng> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            random: None,
        }
    }

    /// Use a seeded generator so placements are reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.random = Some(fastrand::Rng::with_seed(seed));
        self
    }

    /// Use a generator seeded from system entropy.
    pub fn entropy(mut self) -> Self {
        self.random = Some(fastrand::Rng::new());
        self
    }
}

impl Default for SessionBuilder<fastrand::Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> SessionBuilder<R> {
    /// Set the configuration (optional, defaults to [`CaptureConfig::default`]).
    pub fn config(mut self, config: CaptureConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the random source with any implementation.
    pub fn random_source<S: RandomSource>(self, random: S) -> SessionBuilder<S> {
        SessionBuilder {
            config: self.config,
            random: Some(random),
        }
    }

    /// Build the session.
    /// Returns an error if the random source is missing or the config is invalid.
    pub fn build(self) -> Result<CaptureSession<R>, BuildError> {
        let random = self.random.ok_or(BuildError::MissingRandomSource)?;
        let config = self.config.unwrap_or_default().validated()?;
        Ok(CaptureSession::new(config, random))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::session::{CapturePhase, SequenceRandom};

    #[test]
    fn builder_requires_random_source() {
        let result = SessionBuilder::new().build();
        assert!(matches!(result, Err(BuildError::MissingRandomSource)));
    }

    #[test]
    fn builder_validates_config() {
        let mut config = CaptureConfig::default();
        config.trajectory_points = 0;

        let result = SessionBuilder::new().seed(1).config(config).build();
        assert!(matches!(
            result,
            Err(BuildError::InvalidConfig(ConfigError::Invalid(_)))
        ));
    }

    #[test]
    fn builder_applies_config() {
        let mut config = CaptureConfig::default();
        config.trajectory_points = 16;

        let session = SessionBuilder::new()
            .config(config)
            .random_source(SequenceRandom::new(vec![0.5]))
            .build()
            .unwrap();

        assert_eq!(session.phase(), CapturePhase::Idle);
        assert_eq!(session.ledger().points_per_sample(), 16);
    }

    #[test]
    fn seeded_sessions_place_identical_targets() {
        let mut a = SessionBuilder::new().seed(9).build().unwrap();
        let mut b = SessionBuilder::new().seed(9).build().unwrap();

        let click = crate::session::InputEvent::pointer_down(400.0, 300.0);
        a.handle(click);
        b.handle(click);

        assert_eq!(a.target(), b.target());
        assert_ne!(a.id(), b.id());
    }
}
