//! Looking for a final state.

use crate::simulation::Simulation;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of looking for a final state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// A final state is reached.
    Final,
    /// The maximal number of attempts is reached without reaching
    /// a final state.
    ///
    /// This is what happens to oscillators and spaceships.
    Exhausted,
}

/// Advances the simulation one generation at a time, until it reaches
/// a final state, or `max_attempts` generations have been computed.
///
/// Returns [`Status::Final`] if a final state is reached,
/// [`Status::Exhausted`] otherwise. When `max_attempts` is 0, nothing
/// is computed and the result is always [`Status::Exhausted`].
///
/// The simulation is advanced in both cases. It is up to the caller
/// whether to keep the advanced simulation.
pub fn find_final(simulation: &mut Simulation, max_attempts: u64) -> Status {
    for _ in 0..max_attempts {
        simulation.next_generation();
        if simulation.is_final_state() {
            debug!(
                "Simulation {} reached a final state at generation {}",
                simulation.id(),
                simulation.generation()
            );
            return Status::Final;
        }
    }
    debug!(
        "Simulation {} did not reach a final state within {} attempts",
        simulation.id(),
        max_attempts
    );
    Status::Exhausted
}
