//! A simulation of a grid, with an identity and the previous generation.

use crate::{
    error::Error,
    grid::{Board, Grid},
    rules::Life,
};
use log::trace;
use std::mem;
use uuid::Uuid;

/// A Game of Life simulation.
///
/// It owns a [`Grid`], and keeps a copy of the previous generation
/// to tell whether the grid has stopped changing.
///
/// A simulation is not meant to be shared: every operation that
/// advances it takes `&mut self`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Simulation {
    /// The unique identifier of the simulation.
    pub(crate) id: Uuid,

    /// The identifier of the owner, if any.
    pub(crate) owner: Option<i32>,

    /// The grid.
    pub(crate) grid: Grid,

    /// The states of the current generation.
    pub(crate) current: Board,

    /// The states of the previous generation.
    ///
    /// `None` before the first advance.
    pub(crate) previous: Option<Board>,

    /// Number of generations advanced since the initial board.
    pub(crate) generation: u64,
}

impl Simulation {
    /// Creates a new simulation from the initial board.
    ///
    /// The board is not checked against any size limit here;
    /// see [`Settings::check_board`](crate::Settings::check_board).
    pub fn new(id: Uuid, owner: Option<i32>, initial: Board) -> Result<Self, Error> {
        let grid = Grid::from_states(&initial)?;
        Ok(Simulation {
            id,
            owner,
            grid,
            current: initial,
            previous: None,
            generation: 0,
        })
    }

    /// Sets the rule.
    pub fn set_rule(mut self, rule: Life) -> Self {
        self.grid = self.grid.set_rule(rule);
        self
    }

    /// The unique identifier of the simulation.
    #[inline]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The identifier of the owner, if any.
    #[inline]
    pub const fn owner(&self) -> Option<i32> {
        self.owner
    }

    /// Number of generations advanced since the initial board.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The rule of the cellular automaton.
    #[inline]
    pub const fn rule(&self) -> Life {
        self.grid.rule()
    }

    /// The grid.
    #[inline]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The states of the current generation.
    #[inline]
    pub fn current_state(&self) -> &Board {
        &self.current
    }

    /// The states of the previous generation, if the simulation
    /// has ever advanced.
    #[inline]
    pub fn previous_state(&self) -> Option<&Board> {
        self.previous.as_ref()
    }

    /// Advances the simulation by one generation.
    pub fn next_generation(&mut self) {
        self.grid.update();
        let current = self.grid.states();
        self.previous = Some(mem::replace(&mut self.current, current));
        self.generation += 1;
        trace!("Simulation {} advanced to generation {}", self.id, self.generation);
    }

    /// Advances the simulation by `n` generations.
    ///
    /// Does nothing when `n` is 0.
    pub fn advance_by(&mut self, n: u64) {
        for _ in 0..n {
            self.next_generation();
        }
    }

    /// Whether the simulation has reached a final state, i.e., the current
    /// generation is identical to the previous one.
    ///
    /// Always `false` before the first advance. Oscillators and spaceships
    /// never reach a final state.
    pub fn is_final_state(&self) -> bool {
        self.previous
            .as_ref()
            .map_or(false, |previous| *previous == self.current)
    }
}
