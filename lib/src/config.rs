//! Deployment settings.

use crate::{
    error::Error,
    grid::{plaintext_board, plaintext_size, Board},
    search::Status,
    simulation::Simulation,
};
use educe::Educe;
use log::debug;
use rand::{thread_rng, Rng};
use uuid::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings of the service that hosts the simulations.
///
/// These are policies, not properties of the cellular automaton,
/// so the [`Simulation`] itself never looks at them.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Settings {
    /// Maximal number of rows, and maximal number of columns, of a board.
    #[educe(Default = 100)]
    pub max_board_size: usize,

    /// Maximal number of generations to compute while looking for
    /// a final state.
    #[educe(Default = 1000)]
    pub max_attempts: u64,
}

impl Settings {
    /// Sets up new settings with the given limits.
    pub fn new(max_board_size: usize, max_attempts: u64) -> Self {
        Settings {
            max_board_size,
            max_attempts,
        }
    }

    /// Sets the maximal board size.
    pub fn set_max_board_size(mut self, max_board_size: usize) -> Self {
        self.max_board_size = max_board_size;
        self
    }

    /// Sets the maximal number of attempts.
    pub fn set_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Checks that the board is rectangular, and has at least one row and one
    /// column, and at most [`max_board_size`](#structfield.max_board_size)
    /// rows and columns.
    pub fn check_board(&self, board: &Board) -> Result<(), Error> {
        let rows = board.len();
        let columns = board.first().map_or(0, Vec::len);
        if rows == 0 || columns == 0 || rows > self.max_board_size || columns > self.max_board_size
        {
            return Err(Error::BoardSize(self.max_board_size, rows, columns));
        }
        for (row, states) in board.iter().enumerate() {
            if states.len() != columns {
                return Err(Error::JaggedBoard(row, states.len(), columns));
            }
        }
        Ok(())
    }

    /// Reads a board in [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// The size of the pattern is checked against
    /// [`max_board_size`](#structfield.max_board_size) before any cell is read.
    pub fn read_plaintext(&self, input: &str) -> Result<Board, Error> {
        let (rows, columns) = plaintext_size(input);
        if rows == 0 || columns == 0 || rows > self.max_board_size || columns > self.max_board_size
        {
            return Err(Error::BoardSize(self.max_board_size, rows, columns));
        }
        plaintext_board(input, rows, columns)
    }

    /// Starts a new simulation with a fresh random identifier.
    pub fn start(&self, board: Board, owner: Option<i32>) -> Result<Simulation, Error> {
        self.check_board(&board)?;
        let id = Builder::from_random_bytes(thread_rng().gen()).into_uuid();
        debug!(
            "Starting simulation {} with a {}x{} board",
            id,
            board.len(),
            board[0].len()
        );
        Simulation::new(id, owner, board)
    }

    /// Looks for a final state within [`max_attempts`](#structfield.max_attempts)
    /// generations.
    ///
    /// See [`find_final`](crate::find_final).
    pub fn find_final(&self, simulation: &mut Simulation) -> Status {
        crate::search::find_final(simulation, self.max_attempts)
    }
}
