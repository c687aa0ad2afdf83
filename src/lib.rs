//! Trajectory capture: turn pointer-drag demonstrations into fixed-length
//! training samples.
//!
//! A user clicks an origin marker, drags toward a randomly placed target and
//! clicks it. The raw path is resampled to `N` points evenly spaced by arc
//! length, stored relative to the origin, and kept in an undo-aware ledger
//! that exports newline-delimited JSON.
//!
//! The crate follows a "pure core, imperative shell" split:
//!
//! - [`core`]: geometry, the resampler and phase history, all pure
//! - [`session`]: the capture state machine, `handle(event) -> Step`
//! - [`ledger`]: committed samples, undo, and the append-only record format
//! - [`driver`]: the tick loop that performs exports
//!
//! Rendering, audio and model fitting are left to external collaborators.
//!
//! # Example
//!
//! ```rust
//! use trajectory_capture::builder::SessionBuilder;
//! use trajectory_capture::session::{CapturePhase, InputEvent, SequenceRandom};
//!
//! // Draws: near branch, angle 0, radius 100, first target color.
//! let mut session = SessionBuilder::new()
//!     .random_source(SequenceRandom::new(vec![0.5, 0.0, 80.0 / 130.0, 0.0]))
//!     .build()
//!     .unwrap();
//!
//! session.handle(InputEvent::pointer_down(400.0, 300.0));
//! session.handle(InputEvent::pointer_move(450.0, 300.0));
//! session.handle(InputEvent::pointer_move(500.0, 300.0));
//! let step = session.handle(InputEvent::pointer_down(500.0, 300.0));
//!
//! assert_eq!(step.phase, CapturePhase::Idle);
//! let record = session.ledger().samples()[0].to_record();
//! assert_eq!((record.relative_move.dx, record.relative_move.dy), (100, 0));
//! assert_eq!(record.trajectory.len(), 10);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod driver;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod session;

// Re-export commonly used types
pub use crate::builder::{BuildError, SessionBuilder};
pub use crate::config::CaptureConfig;
pub use crate::core::{resample, Point2D, State};
pub use crate::driver::{CaptureLoop, TickReport};
pub use crate::ledger::{DatasetFile, DatasetLedger, DatasetRecord, Sample};
pub use crate::logging::{LogBuffer, LogScope};
pub use crate::session::{CapturePhase, CaptureSession, Command, InputEvent, SessionEffect, Step};
