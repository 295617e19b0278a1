//! Protocol messages exchanged between resumable machines and their driver.
//!
//! The cell-update logic never touches storage. It suspends, handing its
//! driver a [`Suspension`] describing what it needs (a read, a write, or
//! a boundary marker), and the driver carries the answer back in as a
//! [`Reply`]. The state lives wherever the driver says it lives.

use crate::cell::CellState;

/// A read-request for the state at a position.
///
/// Positions are signed and may be transiently out of grid bounds; the
/// resolver normalizes them through modulo arithmetic before touching
/// storage, so every query is answerable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Query {
    /// Row of the requested cell (wrapped by the resolver).
    pub row: i32,
    /// Column of the requested cell (wrapped by the resolver).
    pub col: i32,
}

/// A write-request carrying a cell's next state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Row of the written cell (wrapped by the resolver).
    pub row: i32,
    /// Column of the written cell (wrapped by the resolver).
    pub col: i32,
    /// The state the cell takes in the next generation.
    pub state: CellState,
}

/// What a resumable machine hands back to its driver at each step.
///
/// The variants a driver can observe depend on the machine: a neighbour
/// counter yields only `Query` and `Complete`; a cell stepper adds one
/// `Transition`; a generation simulator yields everything except
/// `Complete` (it never terminates on its own).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suspension {
    /// The machine needs a cell state; resume with [`Reply::State`].
    Query(Query),
    /// The machine requests a write; the next reply's value is ignored.
    Transition(Transition),
    /// One cell's update is fully resolved (self-read, eight neighbour
    /// reads, write). The next reply's value is ignored.
    Tick,
    /// The machine finished, yielding its live-neighbour count.
    ///
    /// The count exists for diagnostic and testing use; production
    /// drivers need not read it.
    Complete(u8),
}

impl Suspension {
    /// Short variant name for error reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Query(_) => "query",
            Self::Transition(_) => "transition",
            Self::Tick => "tick",
            Self::Complete(_) => "completion",
        }
    }
}

/// The value a driver carries back into a machine when resuming it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Resume with no payload: the first activation of a machine, or
    /// the acknowledgement of a [`Suspension::Transition`] or
    /// [`Suspension::Tick`].
    Empty,
    /// The cell state answering an outstanding [`Suspension::Query`].
    State(CellState),
}
