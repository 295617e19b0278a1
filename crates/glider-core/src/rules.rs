//! The pure cell-update rule.
//!
//! Knows nothing about grids, positions, or the suspend/resume protocol:
//! the inputs are a state and a count, the output is a state.

use crate::cell::CellState;

/// Compute a cell's next state from its current state and the number of
/// live cells in its eight-cell neighbourhood.
///
/// - `Alive` with fewer than 2 live neighbours dies (underpopulation).
/// - `Alive` with more than 3 live neighbours dies (overpopulation).
/// - `Alive` with 2 or 3 live neighbours survives.
/// - `Dead` with exactly 3 live neighbours becomes `Alive` (birth).
/// - `Dead` otherwise stays `Dead`.
///
/// # Examples
///
/// ```
/// use glider_core::{rules, CellState};
///
/// assert_eq!(rules::next_state(CellState::Alive, 1), CellState::Dead);
/// assert_eq!(rules::next_state(CellState::Alive, 2), CellState::Alive);
/// assert_eq!(rules::next_state(CellState::Dead, 3), CellState::Alive);
/// assert_eq!(rules::next_state(CellState::Dead, 2), CellState::Dead);
/// ```
pub fn next_state(state: CellState, live_neighbours: u8) -> CellState {
    match (state, live_neighbours) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Alive, _) => CellState::Dead,
        (CellState::Dead, 3) => CellState::Alive,
        (CellState::Dead, _) => CellState::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Exhaustive rule table ───────────────────────────────────

    #[test]
    fn alive_cell_full_table() {
        let expected = [
            CellState::Dead,  // 0: underpopulation
            CellState::Dead,  // 1: underpopulation
            CellState::Alive, // 2: survives
            CellState::Alive, // 3: survives
            CellState::Dead,  // 4: overpopulation
            CellState::Dead,  // 5
            CellState::Dead,  // 6
            CellState::Dead,  // 7
            CellState::Dead,  // 8
        ];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(next_state(CellState::Alive, n as u8), *want, "alive, n={n}");
        }
    }

    #[test]
    fn dead_cell_full_table() {
        for n in 0u8..=8 {
            let want = if n == 3 {
                CellState::Alive
            } else {
                CellState::Dead
            };
            assert_eq!(next_state(CellState::Dead, n), want, "dead, n={n}");
        }
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn alive_survives_iff_two_or_three(n in 0u8..=8) {
            let next = next_state(CellState::Alive, n);
            prop_assert_eq!(next == CellState::Alive, n == 2 || n == 3);
        }

        #[test]
        fn dead_births_iff_exactly_three(n in 0u8..=8) {
            let next = next_state(CellState::Dead, n);
            prop_assert_eq!(next == CellState::Alive, n == 3);
        }
    }
}
