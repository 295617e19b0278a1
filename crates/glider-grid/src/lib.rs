//! Toroidal grid state store for the glider automaton engine.
//!
//! [`Grid`] is the only place cell state lives. The engine's machines
//! never see it: they suspend read and write requests, and the
//! generation pump resolves those against a source `Grid` and a target
//! `Grid` (see `glider-engine`).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
