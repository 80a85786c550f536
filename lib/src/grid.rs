//! The grid.

use crate::{
    cells::{Coord, State},
    error::Error,
    rules::Life,
};
use ca_formats::plaintext::Plaintext;
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    mem,
    str::FromStr,
};

/// A rectangular boolean matrix, `board[row][column]`.
///
/// This is the only representation exchanged with callers outside
/// the engine.
pub type Board = Vec<Vec<bool>>;

/// Offsets of the eight cells in the Moore neighborhood.
const NBHD: [Coord; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size grid of cells.
///
/// Cells outside the grid are always dead. They are never wrapped around.
///
/// Two grids are equal if they have the same dimensions and the same
/// cells. The rule is not compared.
#[derive(Clone, Educe)]
#[educe(Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows.
    rows: i32,

    /// Number of columns.
    columns: i32,

    /// The rule of the cellular automaton.
    #[educe(PartialEq(ignore))]
    rule: Life,

    /// The cells of the current generation, in row-major order.
    cells: Box<[State]>,

    /// A buffer of the same size as `cells`, to compute the next generation.
    ///
    /// Its content is meaningless outside [`update`](Self::update).
    #[educe(Debug(ignore), PartialEq(ignore))]
    next: Box<[State]>,
}

impl Grid {
    /// Creates a new grid with all cells dead.
    ///
    /// Returns [`Error::InvalidDimension`] if `rows` or `columns` is not positive.
    pub fn new(rows: i32, columns: i32) -> Result<Self, Error> {
        if rows <= 0 || columns <= 0 {
            return Err(Error::InvalidDimension);
        }
        let size = (rows as usize)
            .checked_mul(columns as usize)
            .ok_or(Error::InvalidDimension)?;
        Ok(Grid {
            rows,
            columns,
            rule: Life::default(),
            cells: vec![State::Dead; size].into_boxed_slice(),
            next: vec![State::Dead; size].into_boxed_slice(),
        })
    }

    /// Creates a new grid from a rectangular matrix of states.
    ///
    /// `states[row][column]` is copied to the cell at `(row, column)`.
    pub fn from_states<S: AsRef<[bool]>>(states: &[S]) -> Result<Self, Error> {
        let columns = states.first().map_or(0, |row| row.as_ref().len());
        let to_i32 = |n: usize| i32::try_from(n).map_err(|_| Error::InvalidDimension);
        let mut grid = Grid::new(to_i32(states.len())?, to_i32(columns)?)?;
        for (row, states) in states.iter().enumerate() {
            let states = states.as_ref();
            if states.len() != columns {
                return Err(Error::JaggedBoard(row, states.len(), columns));
            }
            let start = row * columns;
            for (cell, &alive) in grid.cells[start..start + columns].iter_mut().zip(states) {
                *cell = State::from(alive);
            }
        }
        Ok(grid)
    }

    /// Sets the rule.
    pub fn set_rule(mut self, rule: Life) -> Self {
        self.rule = rule;
        self
    }

    /// The rule of the cellular automaton.
    #[inline]
    pub const fn rule(&self) -> Life {
        self.rule
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub const fn columns(&self) -> i32 {
        self.columns
    }

    /// The index of a cell in `cells`, or `None` if it is outside the grid.
    #[inline]
    fn index(&self, (row, column): Coord) -> Option<usize> {
        if row >= 0 && row < self.rows && column >= 0 && column < self.columns {
            Some(row as usize * self.columns as usize + column as usize)
        } else {
            None
        }
    }

    /// Gets the state of a cell. Cells outside the grid are dead.
    #[inline]
    pub fn get_cell(&self, coord: Coord) -> State {
        self.index(coord)
            .map_or(State::Dead, |index| self.cells[index])
    }

    /// Sets the state of a cell. Does nothing if the cell is outside the grid.
    #[inline]
    pub fn set_cell(&mut self, coord: Coord, state: State) {
        if let Some(index) = self.index(coord) {
            self.cells[index] = state;
        }
    }

    /// Number of living cells in the Moore neighborhood of a cell.
    #[inline]
    fn alive_nbhd(&self, (row, column): Coord) -> u8 {
        NBHD.iter()
            .filter(|&&(dr, dc)| self.get_cell((row + dr, column + dc)).is_alive())
            .count() as u8
    }

    /// Advances the grid to the next generation.
    ///
    /// The whole generation is computed from the current cells into a
    /// separate buffer, which then replaces the current cells.
    pub fn update(&mut self) {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let index = row as usize * self.columns as usize + column as usize;
                let state = self
                    .rule
                    .transition(self.cells[index], self.alive_nbhd((row, column)));
                self.next[index] = state;
            }
        }
        mem::swap(&mut self.cells, &mut self.next);
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// A copy of the current states as a rectangular boolean matrix.
    pub fn states(&self) -> Board {
        self.cells
            .chunks(self.columns as usize)
            .map(|row| row.iter().map(|&state| state.into()).collect())
            .collect()
    }
}

/// Displays the grid in [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
///
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `O`.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns as usize) {
            for state in row.iter() {
                f.write_str(if state.is_alive() { "O" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Rows and columns of a pattern in [Plaintext](https://conwaylife.com/wiki/Plaintext)
/// format, without reading its cells.
///
/// That is, the number of lines and the length of the longest line,
/// not counting comment lines starting with `!`.
pub(crate) fn plaintext_size(input: &str) -> (usize, usize) {
    input
        .lines()
        .filter(|line| !line.starts_with('!'))
        .fold((0, 0), |(rows, columns), line| {
            (rows + 1, columns.max(line.trim_end().len()))
        })
}

/// Reads a [Plaintext](https://conwaylife.com/wiki/Plaintext) pattern
/// into a board with the given dimensions.
///
/// Short lines are padded with dead cells.
pub(crate) fn plaintext_board(input: &str, rows: usize, columns: usize) -> Result<Board, Error> {
    let mut board = vec![vec![false; columns]; rows];
    let pattern =
        Plaintext::new(input).map_err(|e| Error::ParsePlaintextError(e.to_string()))?;
    for cell in pattern {
        let (x, y) = cell.map_err(|e| Error::ParsePlaintextError(e.to_string()))?;
        if let (Ok(row), Ok(column)) = (usize::try_from(y), usize::try_from(x)) {
            if let Some(alive) = board.get_mut(row).and_then(|states| states.get_mut(column)) {
                *alive = true;
            }
        }
    }
    Ok(board)
}

/// Parses a grid in [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
///
/// Lines starting with `!` are comments. `O` and `*` are living cells,
/// `.` are dead cells. Short lines are padded with dead cells.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (rows, columns) = plaintext_size(input);
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidDimension);
        }
        Grid::from_states(&plaintext_board(input, rows, columns)?)
    }
}
