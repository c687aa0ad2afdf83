//! Capture session: the per-attempt state machine and its inputs and outputs.
//!
//! ```text
//! Idle --click origin--> Armed --pointer move--> Recording --click target--> Idle
//!   any phase --undo (ledger non-empty)--> Idle
//!   any phase --terminate--> Terminated
//! ```

mod effect;
mod event;
mod machine;
mod path;
mod phase;
mod placement;
mod view;

pub use effect::{SessionEffect, Step};
pub use event::{Command, InputEvent};
pub use machine::CaptureSession;
pub use path::PathBuffer;
pub use phase::CapturePhase;
pub use placement::{Placement, PlacementKind, PlacementPolicy, RandomSource, SequenceRandom};
pub use view::SessionView;
