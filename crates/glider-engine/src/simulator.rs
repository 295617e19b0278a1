//! The unbounded generation simulator.

use crate::stepper::CellStepper;
use glider_core::{ProtocolError, Reply, Resumable, Suspension};
use glider_grid::{Grid, GridError};

/// Drives [`CellStepper`]s across every grid position, forever.
///
/// Within one generation, positions are visited in strict row-major
/// order: `for row in 0..rows { for col in 0..cols { .. } }`. Each
/// cell's stepper runs to completion with every suspension relayed
/// outward verbatim, followed by one [`Suspension::Tick`]. A generation
/// is therefore exactly `rows * cols * (1 + 8 + 1 + 1)` suspensions,
/// deterministically ordered; after the last cell the cursor wraps to
/// `(0, 0)` and the next generation begins.
///
/// The simulator holds no grid and never completes on its own; a
/// driver simply stops pulling (see
/// [`run_generation`](crate::run_generation), which stops exactly at
/// each generation's final tick). It is not restartable; to start over,
/// construct a fresh simulator with the same dimensions.
#[derive(Debug)]
pub struct GenerationSimulator {
    rows: u32,
    cols: u32,
    row: i32,
    col: i32,
    cell: CellStepper,
    /// A tick has been emitted; the next resumption starts the next cell.
    at_boundary: bool,
}

impl GenerationSimulator {
    /// Create a simulator over a `rows x cols` domain.
    ///
    /// Dimension validation matches [`Grid::new`]: returns
    /// `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Grid::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Grid::MAX_DIM,
            });
        }
        if cols > Grid::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Grid::MAX_DIM,
            });
        }
        Ok(Self {
            rows,
            cols,
            row: 0,
            col: 0,
            cell: CellStepper::new(0, 0),
            at_boundary: false,
        })
    }

    /// Number of rows in the simulated domain.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the simulated domain.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Row-major advance, wrapping from the last cell back to `(0, 0)`.
    fn advance_cursor(&mut self) {
        self.col += 1;
        if self.col == self.cols as i32 {
            self.col = 0;
            self.row += 1;
            if self.row == self.rows as i32 {
                self.row = 0;
            }
        }
    }
}

impl Resumable for GenerationSimulator {
    fn resume(&mut self, reply: Reply) -> Result<Suspension, ProtocolError> {
        if self.at_boundary {
            // The tick acknowledgement carries no information; any
            // reply value is ignored. Start the next cell.
            self.advance_cursor();
            self.cell = CellStepper::new(self.row, self.col);
            self.at_boundary = false;
            return self.cell.resume(Reply::Empty);
        }
        match self.cell.resume(reply)? {
            Suspension::Complete(_) => {
                self.at_boundary = true;
                Ok(Suspension::Tick)
            }
            relayed @ (Suspension::Query(_) | Suspension::Transition(_)) => Ok(relayed),
            // A cell stepper yields only queries, one transition, and
            // its completion.
            Suspension::Tick => Err(ProtocolError::OutOfOrder {
                phase: "stepping a cell",
                got: "tick",
            }),
        }
    }
}
