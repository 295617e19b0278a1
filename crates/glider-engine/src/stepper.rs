//! One cell's full update as a resumable machine.

use crate::counter::NeighbourCounter;
use glider_core::{rules, CellState, ProtocolError, Query, Reply, Resumable, Suspension, Transition};

/// Where a [`CellStepper`] is in its protocol.
#[derive(Debug)]
enum Phase {
    /// Not yet activated; the first resumption emits the self-query.
    Start,
    /// The self-query is outstanding.
    AwaitOwnState,
    /// Delegating to the embedded neighbour counter.
    Counting {
        own: CellState,
        counter: NeighbourCounter,
    },
    /// The transition has been emitted; the next reply acknowledges it.
    AwaitAck { live: u8 },
    /// Completed.
    Done,
}

/// Steps a single cell: self-read, neighbour count, rule application,
/// write request.
///
/// The stepper first emits a [`Suspension::Query`] for its own position
/// and expects the cell's current state back. It then delegates to a
/// [`NeighbourCounter`] for the same origin, relaying the counter's
/// queries and replies transparently; a driver cannot tell them apart
/// from the stepper's own. Once the count is in it applies
/// [`rules::next_state`] and emits a [`Suspension::Transition`] whose
/// resumption value is ignored, then completes with the neighbour count
/// (diagnostic only).
///
/// Per cell, a driver sees exactly: 1 self-query, 8 neighbour queries,
/// 1 transition, 1 completion.
#[derive(Debug)]
pub struct CellStepper {
    row: i32,
    col: i32,
    phase: Phase,
}

impl CellStepper {
    /// Create a stepper for the cell at `(row, col)`.
    pub fn new(row: i32, col: i32) -> Self {
        Self {
            row,
            col,
            phase: Phase::Start,
        }
    }
}

impl Resumable for CellStepper {
    fn resume(&mut self, reply: Reply) -> Result<Suspension, ProtocolError> {
        match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::Start => match reply {
                Reply::Empty => {
                    self.phase = Phase::AwaitOwnState;
                    Ok(Suspension::Query(Query {
                        row: self.row,
                        col: self.col,
                    }))
                }
                Reply::State(_) => {
                    self.phase = Phase::Start;
                    Err(ProtocolError::UnexpectedState)
                }
            },
            Phase::AwaitOwnState => match reply {
                Reply::State(own) => {
                    let mut counter = NeighbourCounter::new(self.row, self.col);
                    let first = counter.resume(Reply::Empty)?;
                    self.phase = Phase::Counting { own, counter };
                    Ok(first)
                }
                Reply::Empty => {
                    self.phase = Phase::AwaitOwnState;
                    Err(ProtocolError::ExpectedState {
                        row: self.row,
                        col: self.col,
                    })
                }
            },
            Phase::Counting { own, mut counter } => {
                let step = match counter.resume(reply) {
                    Ok(step) => step,
                    Err(e) => {
                        self.phase = Phase::Counting { own, counter };
                        return Err(e);
                    }
                };
                match step {
                    Suspension::Query(q) => {
                        self.phase = Phase::Counting { own, counter };
                        Ok(Suspension::Query(q))
                    }
                    Suspension::Complete(live) => {
                        self.phase = Phase::AwaitAck { live };
                        Ok(Suspension::Transition(Transition {
                            row: self.row,
                            col: self.col,
                            state: rules::next_state(own, live),
                        }))
                    }
                    // A neighbour counter yields only queries and completion.
                    other => {
                        self.phase = Phase::Counting { own, counter };
                        Err(ProtocolError::OutOfOrder {
                            phase: "counting neighbours",
                            got: other.kind(),
                        })
                    }
                }
            }
            Phase::AwaitAck { live } => {
                // The write acknowledgement carries no information; any
                // reply value is ignored.
                self.phase = Phase::Done;
                Ok(Suspension::Complete(live))
            }
            Phase::Done => Err(ProtocolError::Exhausted),
        }
    }
}
