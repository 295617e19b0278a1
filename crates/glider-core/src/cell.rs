//! The two cell states of the automaton.

use std::fmt;

/// State of a single cell.
///
/// The automaton is binary: a cell is either `Alive` or `Dead`. Grids
/// start all-`Dead`; births and deaths are decided each generation by
/// [`rules::next_state`](crate::rules::next_state).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// The cell is live this generation.
    Alive,
    /// The cell is empty this generation.
    #[default]
    Dead,
}

impl CellState {
    /// `true` for [`CellState::Alive`].
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Single-character rendering: `*` for alive, `-` for dead.
    pub fn glyph(self) -> char {
        match self {
            Self::Alive => '*',
            Self::Dead => '-',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dead() {
        assert_eq!(CellState::default(), CellState::Dead);
    }

    #[test]
    fn glyphs_match_display() {
        assert_eq!(CellState::Alive.glyph(), '*');
        assert_eq!(CellState::Dead.glyph(), '-');
        assert_eq!(CellState::Alive.to_string(), "*");
        assert_eq!(CellState::Dead.to_string(), "-");
    }

    #[test]
    fn is_alive() {
        assert!(CellState::Alive.is_alive());
        assert!(!CellState::Dead.is_alive());
    }
}
