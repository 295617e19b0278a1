//! Error types for the suspend/resume protocol.
//!
//! A [`ProtocolError`] always indicates a driver bug, not a data error:
//! the protocol is deterministic and synchronous, so a mistyped
//! resumption value or an out-of-order suspension can only come from
//! driving a machine incorrectly. There are no retries; every variant
//! is fatal to the generation in progress and must propagate.

use std::error::Error;
use std::fmt;

/// Violations of the suspend/resume contract between a machine and its
/// driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    /// A query suspension was resumed without a cell state.
    ExpectedState {
        /// Row of the unanswered query.
        row: i32,
        /// Column of the unanswered query.
        col: i32,
    },
    /// A cell state was supplied while no query was outstanding.
    UnexpectedState,
    /// A machine was resumed after it had already completed.
    Exhausted,
    /// The driver observed a suspension that is illegal in its current
    /// protocol phase.
    OutOfOrder {
        /// The phase the driver was in.
        phase: &'static str,
        /// The suspension it received.
        got: &'static str,
    },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedState { row, col } => {
                write!(f, "query for ({row}, {col}) resumed without a cell state")
            }
            Self::UnexpectedState => {
                write!(f, "cell state supplied with no query outstanding")
            }
            Self::Exhausted => write!(f, "machine resumed after completion"),
            Self::OutOfOrder { phase, got } => {
                write!(f, "received {got} while {phase}")
            }
        }
    }
}

impl Error for ProtocolError {}
