//! Live-neighbour counting as a resumable machine.

use glider_core::{CellState, ProtocolError, Query, Reply, Resumable, Suspension};
use smallvec::SmallVec;

/// Probe order for the eight neighbouring cells: N, NE, E, SE, S, SW, W, NW.
///
/// Offsets are `(row, col)` deltas with north at `row + 1`. The order is
/// part of the observable protocol and must not change.
const COMPASS: [(i32, i32); 8] = [
    (1, 0),   // N
    (1, 1),   // NE
    (0, 1),   // E
    (-1, 1),  // SE
    (-1, 0),  // S
    (-1, -1), // SW
    (0, -1),  // W
    (1, -1),  // NW
];

/// Counts the live cells around one origin via the suspend/resume
/// protocol.
///
/// Each resumption alternately emits a [`Suspension::Query`] for the
/// next compass position or, after the eighth response, completes with
/// the number of `Alive` replies, an integer in `[0, 8]`. The counter
/// never reads a grid; whatever drives it answers the queries.
///
/// Neighbour positions may be transiently out of bounds (the origin can
/// sit on a grid edge); the resolver wraps them.
///
/// # Examples
///
/// ```
/// use glider_core::{CellState, Query, Reply, Resumable, Suspension};
/// use glider_engine::NeighbourCounter;
///
/// let mut counter = NeighbourCounter::new(10, 5);
///
/// // First activation emits the north query.
/// assert_eq!(
///     counter.resume(Reply::Empty).unwrap(),
///     Suspension::Query(Query { row: 11, col: 5 }),
/// );
///
/// // Answer all eight probes; two of them alive.
/// let mut last = counter.resume(Reply::State(CellState::Alive)).unwrap();
/// for i in 0..7 {
///     let state = if i == 0 { CellState::Alive } else { CellState::Dead };
///     last = counter.resume(Reply::State(state)).unwrap();
/// }
/// assert_eq!(last, Suspension::Complete(2));
/// ```
#[derive(Debug)]
pub struct NeighbourCounter {
    row: i32,
    col: i32,
    /// Number of queries emitted so far; doubles as the program counter.
    probed: usize,
    /// A query is outstanding and the next reply must answer it.
    awaiting: bool,
    states: SmallVec<[CellState; 8]>,
    done: bool,
}

impl NeighbourCounter {
    /// Create a counter for the cell at `(row, col)`.
    pub fn new(row: i32, col: i32) -> Self {
        Self {
            row,
            col,
            probed: 0,
            awaiting: false,
            states: SmallVec::new(),
            done: false,
        }
    }
}

impl Resumable for NeighbourCounter {
    fn resume(&mut self, reply: Reply) -> Result<Suspension, ProtocolError> {
        if self.done {
            return Err(ProtocolError::Exhausted);
        }
        if self.awaiting {
            match reply {
                Reply::State(state) => {
                    self.states.push(state);
                    self.awaiting = false;
                }
                Reply::Empty => {
                    let (dr, dc) = COMPASS[self.probed - 1];
                    return Err(ProtocolError::ExpectedState {
                        row: self.row + dr,
                        col: self.col + dc,
                    });
                }
            }
        } else if reply != Reply::Empty {
            return Err(ProtocolError::UnexpectedState);
        }

        if self.probed < COMPASS.len() {
            let (dr, dc) = COMPASS[self.probed];
            self.probed += 1;
            self.awaiting = true;
            Ok(Suspension::Query(Query {
                row: self.row + dr,
                col: self.col + dc,
            }))
        } else {
            self.done = true;
            let live = self.states.iter().filter(|s| s.is_alive()).count() as u8;
            Ok(Suspension::Complete(live))
        }
    }
}
