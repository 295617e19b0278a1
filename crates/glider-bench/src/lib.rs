//! Benchmark profiles for the glider automaton engine.
//!
//! Provides pre-built source grids for benchmarking and examples:
//!
//! - [`soup_profile`]: 30%-density random soup at a given size
//! - [`still_profile`]: a sparse field of block still lifes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use glider_core::CellState;
use glider_grid::Grid;
use glider_test_utils::random_soup;

/// Build a random-soup source grid: 30% of cells alive, deterministic
/// in `seed`.
pub fn soup_profile(rows: u32, cols: u32, seed: u64) -> Grid {
    random_soup(rows, cols, 0.3, seed)
}

/// Build a sparse still-life source grid: one block every 4x4 tile.
///
/// Still lifes keep every generation identical, which makes this
/// profile useful for measuring pure protocol overhead without
/// population drift.
pub fn still_profile(rows: u32, cols: u32) -> Grid {
    let mut grid = Grid::new(rows, cols).expect("benchmark dimensions are positive");
    for tile_row in (0..rows as i32).step_by(4) {
        for tile_col in (0..cols as i32).step_by(4) {
            if tile_row + 2 < rows as i32 && tile_col + 2 < cols as i32 {
                grid.assign(tile_row, tile_col, CellState::Alive);
                grid.assign(tile_row, tile_col + 1, CellState::Alive);
                grid.assign(tile_row + 1, tile_col, CellState::Alive);
                grid.assign(tile_row + 1, tile_col + 1, CellState::Alive);
            }
        }
    }
    grid
}
