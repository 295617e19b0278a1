//! glider: a coroutine-protocol Conway's Game of Life engine.
//!
//! Cell-update logic is pure and knows nothing about where state lives:
//! each machine suspends typed read and write requests, and a driver
//! external to the logic resolves every read against a source grid and
//! commits every write to a target grid. This is the top-level facade
//! crate that re-exports the public API from all glider sub-crates; for
//! most users, adding `glider` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use glider::prelude::*;
//!
//! // Three cells in a row: a blinker.
//! let mut grid = Grid::new(5, 5).unwrap();
//! grid.assign(2, 1, CellState::Alive);
//! grid.assign(2, 2, CellState::Alive);
//! grid.assign(2, 3, CellState::Alive);
//!
//! let mut sim = GenerationSimulator::new(5, 5).unwrap();
//! let next = run_generation(&grid, &mut sim).unwrap();
//!
//! // The blinker rotated: a vertical triple on column 2.
//! assert!(next.query(1, 2).is_alive());
//! assert!(next.query(2, 2).is_alive());
//! assert!(next.query(3, 2).is_alive());
//! assert_eq!(next.live_count(), 3);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `glider-core` | Cell states, protocol messages, rules, the `Resumable` trait |
//! | [`grid`] | `glider-grid` | The toroidal grid store |
//! | [`engine`] | `glider-engine` | Resumable machines and the generation pump |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell states, protocol messages, rules, and core traits
/// (`glider-core`).
pub use glider_core as types;

/// The toroidal grid store (`glider-grid`).
pub use glider_grid as grid;

/// Resumable machines and the generation pump (`glider-engine`).
///
/// [`engine::GenerationSimulator`] produces the suspension stream;
/// [`engine::run_generation`] resolves it against grids.
pub use glider_engine as engine;

/// Common imports for typical glider usage.
///
/// ```rust
/// use glider::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use glider_core::{
        CellState, Query, Reply, Resumable, Suspension, Transition,
    };

    // Errors
    pub use glider_core::ProtocolError;
    pub use glider_engine::PumpError;
    pub use glider_grid::GridError;

    // Grid
    pub use glider_grid::Grid;

    // Engine
    pub use glider_engine::{
        run_generation, run_generation_metered, CellStepper, GenerationMetrics,
        GenerationSimulator, NeighbourCounter,
    };
}
