use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum SimulatorError {
    // Reorder buffer contract violation: issue stage must check is_full()
    // before calling add().
    ReorderBufferFull(usize),

    // A record was asked to transition to a state not reachable from its
    // current state. Should be unreachable given the sum-typed transition
    // methods on InstructionRecord; kept for defensive checks at the
    // tracker's flush boundary.
    IllegalStateTransition(String),

    // Collaborator-boundary error: an Instruction record supplied by the
    // caller was missing a required field.
    InputMalformed(String),

    // System errors
    IoError(std::io::Error),
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::ReorderBufferFull(capacity) => {
                write!(f, "reorder buffer is full (capacity {})", capacity)
            },
            SimulatorError::IllegalStateTransition(detail) => {
                write!(f, "illegal instruction state transition: {}", detail)
            },
            SimulatorError::InputMalformed(detail) => {
                write!(f, "malformed instruction input: {}", detail)
            },
            SimulatorError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for SimulatorError {}

impl From<std::io::Error> for SimulatorError {
    fn from(error: std::io::Error) -> Self {
        SimulatorError::IoError(error)
    }
}
