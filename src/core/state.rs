//! Core State trait for capture lifecycle phases.
//!
//! The session's phase type implements this trait so the history log and
//! the display projection can name and classify phases without matching on
//! the concrete enum.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small immutable values describing where
/// a capture attempt currently is.
///
/// # Example
///
/// ```rust
/// use trajectory_capture::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum ReplayState {
///     Loading,
///     Playing,
///     Finished,
/// }
///
/// impl State for ReplayState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Loading => "Loading",
///             Self::Playing => "Playing",
///             Self::Finished => "Finished",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Finished)
///     }
/// }
///
/// assert!(ReplayState::Finished.is_final());
/// assert!(!ReplayState::Playing.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// No transitions leave a final state. Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
