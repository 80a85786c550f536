//! Cells in the cellular automaton.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// The Dead state.
    #[default]
    Dead,
    /// The Alive state.
    Alive,
}

impl State {
    /// Whether the cell is alive.
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, State::Alive)
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            State::Alive
        } else {
            State::Dead
        }
    }
}

impl From<State> for bool {
    #[inline]
    fn from(state: State) -> Self {
        state.is_alive()
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed. The row is the first index of a
/// [`Board`](crate::Board), the column the second.
pub type Coord = (i32, i32);
