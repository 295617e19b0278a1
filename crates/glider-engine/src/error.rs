//! Error types for the generation pump.

use glider_core::ProtocolError;
use std::error::Error;
use std::fmt;

/// Errors from driving one generation through the pump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PumpError {
    /// The source grid and the simulator disagree on dimensions.
    DimensionMismatch {
        /// Rows of the source grid.
        grid_rows: u32,
        /// Columns of the source grid.
        grid_cols: u32,
        /// Rows of the simulator's domain.
        sim_rows: u32,
        /// Columns of the simulator's domain.
        sim_cols: u32,
    },
    /// The suspend/resume contract was violated mid-generation.
    ///
    /// Indicates a driver bug, not a data error; fatal to the
    /// generation in progress.
    Protocol(ProtocolError),
}

impl fmt::Display for PumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                grid_rows,
                grid_cols,
                sim_rows,
                sim_cols,
            } => write!(
                f,
                "grid is {grid_rows}x{grid_cols} but simulator covers {sim_rows}x{sim_cols}"
            ),
            Self::Protocol(e) => write!(f, "protocol violation: {e}"),
        }
    }
}

impl Error for PumpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Protocol(e) => Some(e),
            Self::DimensionMismatch { .. } => None,
        }
    }
}

impl From<ProtocolError> for PumpError {
    fn from(e: ProtocolError) -> Self {
        Self::Protocol(e)
    }
}
