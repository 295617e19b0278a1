//! The [`Resumable`] trait: the seam between machines and drivers.

use crate::error::ProtocolError;
use crate::message::{Reply, Suspension};

/// A cooperatively-suspending unit of work, advanced by its driver.
///
/// A `Resumable` is an explicit state machine standing in for a
/// generator: each [`resume`](Resumable::resume) call carries the
/// previous suspension's answer in and hands the next [`Suspension`]
/// out. Control returns to the driver at every suspension point; nothing
/// runs between calls.
///
/// # Contract
///
/// - The first activation is `resume(Reply::Empty)`; supplying a state
///   before any query is outstanding is a [`ProtocolError`].
/// - A [`Suspension::Query`] must be answered with [`Reply::State`]
///   before the machine advances; answering with [`Reply::Empty`] is a
///   [`ProtocolError`].
/// - After a [`Suspension::Transition`] or [`Suspension::Tick`], the
///   next reply's value is ignored.
/// - Resuming a machine after [`Suspension::Complete`] is a
///   [`ProtocolError`].
/// - Machines are deterministic: the same reply sequence produces the
///   same suspension sequence.
///
/// # Object safety
///
/// This trait is object-safe; drivers may hold machines as
/// `Box<dyn Resumable>`.
///
/// # Examples
///
/// A minimal machine that reads one cell and completes:
///
/// ```
/// use glider_core::{CellState, ProtocolError, Query, Reply, Resumable, Suspension};
///
/// /// Reads one cell and completes with 1 if it was alive.
/// struct Probe {
///     row: i32,
///     col: i32,
///     asked: bool,
///     done: bool,
/// }
///
/// impl Resumable for Probe {
///     fn resume(&mut self, reply: Reply) -> Result<Suspension, ProtocolError> {
///         if self.done {
///             return Err(ProtocolError::Exhausted);
///         }
///         if !self.asked {
///             if reply != Reply::Empty {
///                 return Err(ProtocolError::UnexpectedState);
///             }
///             self.asked = true;
///             return Ok(Suspension::Query(Query { row: self.row, col: self.col }));
///         }
///         match reply {
///             Reply::State(s) => {
///                 self.done = true;
///                 Ok(Suspension::Complete(s.is_alive() as u8))
///             }
///             Reply::Empty => Err(ProtocolError::ExpectedState {
///                 row: self.row,
///                 col: self.col,
///             }),
///         }
///     }
/// }
///
/// let mut probe = Probe { row: 2, col: 3, asked: false, done: false };
/// assert_eq!(
///     probe.resume(Reply::Empty).unwrap(),
///     Suspension::Query(Query { row: 2, col: 3 }),
/// );
/// assert_eq!(
///     probe.resume(Reply::State(CellState::Alive)).unwrap(),
///     Suspension::Complete(1),
/// );
/// assert!(probe.resume(Reply::Empty).is_err());
/// ```
pub trait Resumable {
    /// Advance the machine one suspension point.
    ///
    /// `reply` answers the previous suspension (see the contract above
    /// for which replies are legal when). Returns the next suspension,
    /// or a [`ProtocolError`] if the reply violates the contract.
    fn resume(&mut self, reply: Reply) -> Result<Suspension, ProtocolError>;
}
