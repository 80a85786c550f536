//! __Conway's Game of Life__ as a hosted simulation.
//!
//! A client uploads a rectangular boolean board, which becomes a
//! [`Simulation`] with a unique identifier. The simulation can then be
//! advanced by any number of generations, or until it reaches a final
//! state, i.e., a generation identical to the one before it.
//!
//! Cells outside the board are always dead.
//!
//! # Example
//!
//! ```rust
//! use lifegame_lib::{Settings, Status};
//!
//! let settings = Settings::default();
//! let board = vec![
//!     vec![true, false, false],
//!     vec![false, true, false],
//!     vec![false, false, true],
//! ];
//! let mut simulation = settings.start(board, None).unwrap();
//!
//! assert_eq!(settings.find_final(&mut simulation), Status::Final);
//! assert_eq!(simulation.current_state(), &vec![vec![false; 3]; 3]);
//! ```

mod cells;
mod config;
mod error;
mod grid;
pub mod rules;
mod save;
mod search;
mod simulation;

pub use cells::{Coord, State};
pub use config::Settings;
pub use error::Error;
pub use grid::{Board, Grid};
pub use search::{find_final, Status};
pub use simulation::Simulation;
pub use uuid::Uuid;

#[cfg(feature = "serde")]
pub use save::SimulationSer;
