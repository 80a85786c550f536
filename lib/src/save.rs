#![cfg(feature = "serde")]
//! Saves the simulation.

use crate::{
    error::Error,
    grid::Board,
    rules::Life,
    simulation::Simulation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A representation of the simulation which can be easily serialized.
///
/// This is what gets stored between two requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSer {
    /// The unique identifier of the simulation.
    pub id: Uuid,

    /// The identifier of the owner, if any.
    #[serde(default)]
    pub owner: Option<i32>,

    /// The rule string.
    #[serde(default = "default_rule")]
    pub rule: String,

    /// Number of generations advanced since the initial board.
    #[serde(default)]
    pub generation: u64,

    /// The states of the current generation.
    pub current: Board,

    /// The states of the previous generation.
    #[serde(default)]
    pub previous: Option<Board>,
}

fn default_rule() -> String {
    Life::CONWAY.to_string()
}

impl SimulationSer {
    /// Restores the simulation from the `SimulationSer`.
    pub fn simulation(&self) -> Result<Simulation, Error> {
        let rule: Life = self.rule.parse()?;
        let mut simulation = Simulation::new(self.id, self.owner, self.current.clone())?
            .set_rule(rule);
        if let Some(previous) = &self.previous {
            let same_shape = previous.len() == self.current.len()
                && previous
                    .iter()
                    .zip(&self.current)
                    .all(|(p, c)| p.len() == c.len());
            if !same_shape {
                return Err(Error::DimensionMismatch);
            }
            simulation.previous = Some(previous.clone());
        }
        simulation.generation = self.generation;
        Ok(simulation)
    }
}

impl Simulation {
    /// Saves the simulation as a [`SimulationSer`].
    pub fn ser(&self) -> SimulationSer {
        SimulationSer {
            id: self.id,
            owner: self.owner,
            rule: self.rule().to_string(),
            generation: self.generation,
            current: self.current.clone(),
            previous: self.previous.clone(),
        }
    }
}
