//! Builder API for capture sessions, plus the `state_enum!` macro used to
//! declare phase types.

pub mod error;
pub mod macros;
pub mod session;

pub use error::BuildError;
pub use session::SessionBuilder;
