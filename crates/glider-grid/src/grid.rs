//! The toroidal two-dimensional cell store.

use crate::error::GridError;
use glider_core::CellState;
use std::fmt;

/// Resolve a single axis value onto the torus: `((v % n) + n) % n`.
///
/// Total for any `i32`, including values that are negative or beyond
/// the dimension.
fn wrap_axis(val: i32, len: u32) -> usize {
    let n = len as i32;
    (((val % n) + n) % n) as usize
}

/// A toroidal two-dimensional grid of [`CellState`]s.
///
/// Dimensions are fixed for the grid's lifetime and strictly positive.
/// Addressing wraps on both axes, so edges connect to opposite edges and
/// every signed `(row, col)` pair names a cell; queries and writes are
/// total functions.
///
/// Within a generation exactly one writer mutates a grid, and only while
/// it is the uncommitted target of the generation in progress; `&mut`
/// access encodes that at compile time. Once returned from the pump a
/// grid is read by the next generation through `&Grid` only.
///
/// # Examples
///
/// ```
/// use glider_core::CellState;
/// use glider_grid::Grid;
///
/// let mut grid = Grid::new(5, 9).unwrap();
/// grid.assign(4, 0, CellState::Alive);
///
/// // Toroidal wraparound: row -1 is row 4, column -1 is column 8.
/// assert_eq!(grid.query(-1, 0), CellState::Alive);
/// assert_eq!(grid.query(-1, 9), CellState::Alive);
/// assert_eq!(grid.query(0, -1), grid.query(0, 8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new all-`Dead` grid with `rows * cols` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Dead; (rows as usize) * (cols as usize)],
        })
    }

    /// A fresh all-`Dead` grid with the same dimensions.
    ///
    /// Infallible: the dimensions were validated when `self` was built.
    /// This is how the pump constructs each generation's target.
    pub fn empty_like(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: vec![CellState::Dead; self.cells.len()],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false` — construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of cells currently `Alive`.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    fn index(&self, row: i32, col: i32) -> usize {
        wrap_axis(row, self.rows) * (self.cols as usize) + wrap_axis(col, self.cols)
    }

    /// The state stored at `(row mod rows, col mod cols)`.
    ///
    /// Total: any signed coordinate resolves to a cell.
    pub fn query(&self, row: i32, col: i32) -> CellState {
        self.cells[self.index(row, col)]
    }

    /// Set the state at the wrapped position.
    pub fn assign(&mut self, row: i32, col: i32, state: CellState) {
        let idx = self.index(row, col);
        self.cells[idx] = state;
    }
}

impl fmt::Display for Grid {
    /// Renders all rows, one line of `cols` glyphs per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                write!(f, "{}", self.query(row, col).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(4, 7).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.cell_count(), 28);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn new_zero_dimension_returns_error() {
        assert_eq!(Grid::new(0, 5), Err(GridError::EmptyGrid));
        assert_eq!(Grid::new(5, 0), Err(GridError::EmptyGrid));
        assert_eq!(Grid::new(0, 0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Grid::new(big, 5),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            Grid::new(5, big),
            Err(GridError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    #[test]
    fn empty_like_preserves_dimensions_only() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.assign(1, 1, CellState::Alive);
        let fresh = grid.empty_like();
        assert_eq!(fresh.rows(), 3);
        assert_eq!(fresh.cols(), 4);
        assert_eq!(fresh.live_count(), 0);
    }

    // ── Wraparound tests ────────────────────────────────────────

    #[test]
    fn negative_row_wraps_to_last_row() {
        let mut grid = Grid::new(5, 9).unwrap();
        grid.assign(4, 0, CellState::Alive);
        assert_eq!(grid.query(-1, 0), grid.query(4, 0));
        assert_eq!(grid.query(-1, 0), CellState::Alive);
    }

    #[test]
    fn negative_col_wraps_to_last_col() {
        let mut grid = Grid::new(5, 9).unwrap();
        grid.assign(0, 8, CellState::Alive);
        assert_eq!(grid.query(0, -1), grid.query(0, 8));
        assert_eq!(grid.query(0, -1), CellState::Alive);
    }

    #[test]
    fn assign_through_wrapped_coordinates() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.assign(-1, -1, CellState::Alive);
        assert_eq!(grid.query(2, 2), CellState::Alive);
        grid.assign(3, 3, CellState::Dead);
        assert_eq!(grid.query(0, 0), CellState::Dead);
    }

    // ── Display tests ───────────────────────────────────────────

    #[test]
    fn display_renders_every_row() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.assign(0, 0, CellState::Alive);
        grid.assign(2, 3, CellState::Alive);
        assert_eq!(grid.to_string(), "*---\n----\n---*\n");
    }

    #[test]
    fn display_line_count_matches_rows() {
        let grid = Grid::new(5, 9).unwrap();
        let rendered = grid.to_string();
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.lines().all(|line| line.len() == 9));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn query_is_total(
            rows in 1u32..20,
            cols in 1u32..20,
            row in proptest::num::i32::ANY,
            col in proptest::num::i32::ANY,
        ) {
            let grid = Grid::new(rows, cols).unwrap();
            // Must not panic for any signed coordinate.
            prop_assert_eq!(grid.query(row, col), CellState::Dead);
        }

        #[test]
        fn query_agrees_with_wrapped_coordinate(
            rows in 1u32..20,
            cols in 1u32..20,
            row in -100i32..100,
            col in -100i32..100,
        ) {
            let mut grid = Grid::new(rows, cols).unwrap();
            grid.assign(row, col, CellState::Alive);
            let n = rows as i32;
            let m = cols as i32;
            let wr = ((row % n) + n) % n;
            let wc = ((col % m) + m) % m;
            prop_assert_eq!(grid.query(wr, wc), CellState::Alive);
            prop_assert_eq!(grid.live_count(), 1);
        }
    }
}
