//! Core types and traits for the glider automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the glider workspace:
//! cell states, protocol messages, the pure update rule, the
//! [`Resumable`] driver seam, and protocol error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod message;
pub mod rules;
pub mod traits;

pub use cell::CellState;
pub use error::ProtocolError;
pub use message::{Query, Reply, Suspension, Transition};
pub use traits::Resumable;
