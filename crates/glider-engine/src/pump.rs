//! The generation pump: the storage side of the protocol.
//!
//! The pump is the only component that touches two grids at once. It
//! pulls suspensions from a [`GenerationSimulator`], resolves every
//! query against the source grid, applies every transition to a fresh
//! target grid, and returns the target at the generation boundary.
//! The machines it drives never see either grid.

use crate::error::PumpError;
use crate::metrics::GenerationMetrics;
use crate::simulator::GenerationSimulator;
use glider_core::{ProtocolError, Reply, Resumable, Suspension};
use glider_grid::Grid;
use std::time::Instant;

/// The pump's position in one cell's protocol (the per-cell state
/// machine restarts after every tick).
#[derive(Clone, Copy, Debug)]
enum Phase {
    /// A cell's self-query is due.
    AwaitQuery,
    /// Neighbour queries continue, or the cell's write arrives.
    AwaitQueryOrWrite,
    /// The write is applied; only the cell boundary may follow.
    AwaitTick,
}

impl Phase {
    fn name(self) -> &'static str {
        match self {
            Self::AwaitQuery => "awaiting a query",
            Self::AwaitQueryOrWrite => "awaiting a query or write",
            Self::AwaitTick => "awaiting a tick",
        }
    }
}

/// Produce the next generation of `source` by driving `sim`.
///
/// Resolves queries via [`Grid::query`] on `source`, applies
/// transitions via [`Grid::assign`] on a freshly constructed target,
/// and stops pulling exactly at the generation's final tick (the
/// `rows * cols`-th). Pulling even one suspension further would read
/// into the next generation's first cell, whose queries belong to the
/// *next* source grid.
///
/// The same simulator instance is reused across generations: call this
/// again with the returned grid as the new source.
///
/// # Errors
///
/// - [`PumpError::DimensionMismatch`] if `source` and `sim` disagree on
///   dimensions (checked before anything is pulled).
/// - [`PumpError::Protocol`] if the suspension sequence violates the
///   per-cell state machine, a resumption value is mistyped, or the
///   simulator completes. Fatal to the generation; nothing is retried.
///
/// # Examples
///
/// ```
/// use glider_core::CellState;
/// use glider_engine::{run_generation, GenerationSimulator};
/// use glider_grid::Grid;
///
/// // A lone live cell dies of underpopulation.
/// let mut grid = Grid::new(3, 3).unwrap();
/// grid.assign(1, 1, CellState::Alive);
///
/// let mut sim = GenerationSimulator::new(3, 3).unwrap();
/// let next = run_generation(&grid, &mut sim).unwrap();
/// assert_eq!(next.live_count(), 0);
/// ```
pub fn run_generation(
    source: &Grid,
    sim: &mut GenerationSimulator,
) -> Result<Grid, PumpError> {
    run_generation_metered(source, sim).map(|(grid, _)| grid)
}

/// [`run_generation`], also returning the generation's
/// [`GenerationMetrics`].
pub fn run_generation_metered(
    source: &Grid,
    sim: &mut GenerationSimulator,
) -> Result<(Grid, GenerationMetrics), PumpError> {
    if sim.rows() != source.rows() || sim.cols() != source.cols() {
        return Err(PumpError::DimensionMismatch {
            grid_rows: source.rows(),
            grid_cols: source.cols(),
            sim_rows: sim.rows(),
            sim_cols: sim.cols(),
        });
    }

    let started = Instant::now();
    let mut metrics = GenerationMetrics::default();
    let mut target = source.empty_like();
    let mut phase = Phase::AwaitQuery;
    let mut remaining = source.cell_count();
    let mut reply = Reply::Empty;

    loop {
        let suspension = sim.resume(reply)?;
        match suspension {
            Suspension::Query(q) => {
                if matches!(phase, Phase::AwaitTick) {
                    return Err(out_of_order(phase, suspension));
                }
                reply = Reply::State(source.query(q.row, q.col));
                phase = Phase::AwaitQueryOrWrite;
                metrics.queries_resolved += 1;
            }
            Suspension::Transition(t) => {
                if !matches!(phase, Phase::AwaitQueryOrWrite) {
                    return Err(out_of_order(phase, suspension));
                }
                target.assign(t.row, t.col, t.state);
                reply = Reply::Empty;
                phase = Phase::AwaitTick;
                metrics.writes_applied += 1;
            }
            Suspension::Tick => {
                if !matches!(phase, Phase::AwaitTick) {
                    return Err(out_of_order(phase, suspension));
                }
                metrics.cells_completed += 1;
                remaining -= 1;
                if remaining == 0 {
                    metrics.total_us = started.elapsed().as_micros() as u64;
                    return Ok((target, metrics));
                }
                reply = Reply::Empty;
                phase = Phase::AwaitQuery;
            }
            Suspension::Complete(_) => {
                return Err(out_of_order(phase, suspension));
            }
        }
    }
}

fn out_of_order(phase: Phase, got: Suspension) -> PumpError {
    PumpError::Protocol(ProtocolError::OutOfOrder {
        phase: phase.name(),
        got: got.kind(),
    })
}
