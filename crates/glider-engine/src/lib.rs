//! Resumable cell machines and the generation pump for the glider
//! automaton.
//!
//! The computation side ([`NeighbourCounter`], [`CellStepper`],
//! [`GenerationSimulator`]) is pure protocol: each machine suspends
//! typed read and write requests ([`glider_core::Suspension`]) and is
//! advanced by driver-supplied replies. None of them can see a grid.
//! The storage side is the pump ([`run_generation`]), the only
//! component that holds two grids at once: it resolves every query
//! against the source grid and applies every write to the target.
//!
//! Everything here runs on a single logical thread of control; every
//! suspension point is cooperative and the ordering is fully
//! deterministic.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod counter;
pub mod error;
pub mod metrics;
pub mod pump;
pub mod simulator;
pub mod stepper;

pub use counter::NeighbourCounter;
pub use error::PumpError;
pub use metrics::GenerationMetrics;
pub use pump::{run_generation, run_generation_metered};
pub use simulator::GenerationSimulator;
pub use stepper::CellStepper;
