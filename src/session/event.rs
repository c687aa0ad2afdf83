//! Abstract input consumed by the capture session.

use crate::core::Point2D;
use serde::{Deserialize, Serialize};

/// Discrete commands issued outside the pointer stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Append every committed sample to the dataset file.
    Export,
    /// Withdraw the most recent committed sample.
    Undo,
    /// End the session.
    Terminate,
}

/// One input event, delivered in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerMove(Point2D),
    PointerDown(Point2D),
    Command(Command),
}

impl InputEvent {
    /// Short name recorded in the phase history.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PointerMove(_) => "pointer-move",
            Self::PointerDown(_) => "pointer-down",
            Self::Command(Command::Export) => "export",
            Self::Command(Command::Undo) => "undo",
            Self::Command(Command::Terminate) => "terminate",
        }
    }

    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove(Point2D::new(x, y))
    }

    pub fn pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown(Point2D::new(x, y))
    }
}

impl From<Command> for InputEvent {
    fn from(command: Command) -> Self {
        Self::Command(command)
    }
}
