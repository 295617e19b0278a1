//! Reusable grid fixtures.
//!
//! Three ways to build test grids:
//!
//! - [`grid_from_rows`]: ASCII art (`*` alive, `-` dead), mirroring
//!   [`Grid`]'s own rendering.
//! - [`seeded_grid`] + the named pattern tables: classic Life shapes
//!   placed by coordinate list.
//! - [`random_soup`]: deterministic random fill from a seed.

use glider_core::CellState;
use glider_grid::Grid;
use indexmap::IndexMap;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Vertical-phase blinker centred for a 5x5 grid (period 2).
pub const BLINKER: &[(i32, i32)] = &[(2, 1), (2, 2), (2, 3)];

/// Block still life.
pub const BLOCK: &[(i32, i32)] = &[(1, 1), (1, 2), (2, 1), (2, 2)];

/// Toad oscillator (period 2).
pub const TOAD: &[(i32, i32)] = &[(2, 2), (2, 3), (2, 4), (3, 1), (3, 2), (3, 3)];

/// Glider (translates one cell diagonally every four generations).
pub const GLIDER: &[(i32, i32)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// R-pentomino (long-lived methuselah).
pub const R_PENTOMINO: &[(i32, i32)] = &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)];

/// The named patterns above in a deterministic, insertion-ordered
/// registry.
pub fn pattern_library() -> IndexMap<&'static str, &'static [(i32, i32)]> {
    let mut library = IndexMap::new();
    library.insert("blinker", BLINKER);
    library.insert("block", BLOCK);
    library.insert("toad", TOAD);
    library.insert("glider", GLIDER);
    library.insert("r-pentomino", R_PENTOMINO);
    library
}

/// Build a grid from ASCII rows: `*` is alive, `-` is dead.
///
/// The input must be rectangular and non-empty. This is the inverse of
/// `Grid`'s `Display` output, so `grid_from_rows` of a rendering
/// round-trips.
///
/// # Panics
///
/// Panics on empty input, ragged rows, or characters other than `*`
/// and `-`. Fixtures are test inputs; malformed art is a test bug.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    assert!(!rows.is_empty(), "fixture grid needs at least one row");
    let cols = rows[0].len();
    let mut grid = Grid::new(rows.len() as u32, cols as u32)
        .expect("fixture dimensions are positive and small");
    for (r, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), cols, "fixture row {r} is ragged");
        for (c, ch) in line.chars().enumerate() {
            let state = match ch {
                '*' => CellState::Alive,
                '-' => CellState::Dead,
                other => panic!("fixture row {r} has unknown glyph {other:?}"),
            };
            grid.assign(r as i32, c as i32, state);
        }
    }
    grid
}

/// Build a `rows x cols` grid with the given cells set alive.
///
/// Coordinates wrap like every grid write, so patterns may be placed
/// relative to any origin.
///
/// # Panics
///
/// Panics if the dimensions are invalid (zero).
pub fn seeded_grid(rows: u32, cols: u32, cells: &[(i32, i32)]) -> Grid {
    let mut grid = Grid::new(rows, cols).expect("fixture dimensions are positive");
    for &(r, c) in cells {
        grid.assign(r, c, CellState::Alive);
    }
    grid
}

/// Build a deterministic random grid: each cell is alive with
/// probability `density`.
///
/// The same `(rows, cols, density, seed)` always produces the same
/// grid.
///
/// # Panics
///
/// Panics if the dimensions are invalid (zero).
pub fn random_soup(rows: u32, cols: u32, density: f64, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::new(rows, cols).expect("fixture dimensions are positive");
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            if rng.gen::<f64>() < density {
                grid.assign(row, col, CellState::Alive);
            }
        }
    }
    grid
}
