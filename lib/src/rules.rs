//! Cellular automata rules.
//!
//! Only totalistic Life-like rules are supported. For the notations of
//! rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::{cells::State, error::Error};
use ca_rules::ParseLife;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Totalistic Life-like rules.
///
/// The default rule is Conway's Game of Life, `B3/S23`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Life {
    /// Bit `n` is set if a dead cell with `n` living neighbors is born.
    birth: u16,
    /// Bit `n` is set if a living cell with `n` living neighbors survives.
    survival: u16,
}

impl Life {
    /// Conway's Game of Life.
    pub const CONWAY: Self = Life {
        birth: 1 << 3,
        survival: 1 << 2 | 1 << 3,
    };

    /// Constructs a new rule from the `b` and `s` data.
    ///
    /// Neighbor counts greater than 8 are ignored.
    pub fn new(b: Vec<u8>, s: Vec<u8>) -> Self {
        let mask = |counts: Vec<u8>| -> u16 {
            counts
                .into_iter()
                .filter(|&n| n <= 8)
                .fold(0, |mask, n| mask | (1 << n))
        };
        Life {
            birth: mask(b),
            survival: mask(s),
        }
    }

    /// Whether the rule contains `B0`.
    ///
    /// Cells outside the grid are always dead, so under such a rule
    /// the cells on the edges behave differently from the inner ones.
    #[inline]
    pub const fn has_b0(&self) -> bool {
        self.birth & 1 != 0
    }

    /// The state of a cell in the next generation, given its current
    /// state and the number of living cells in its Moore neighborhood.
    #[inline]
    pub const fn transition(&self, state: State, alive_nbhd: u8) -> State {
        let table = match state {
            State::Alive => self.survival,
            State::Dead => self.birth,
        };
        if alive_nbhd <= 8 && table & (1 << alive_nbhd) != 0 {
            State::Alive
        } else {
            State::Dead
        }
    }
}

impl Default for Life {
    fn default() -> Self {
        Life::CONWAY
    }
}

impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b, s)
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rule: Life = ParseLife::parse_rule(input)?;
        Ok(rule)
    }
}

/// Displays the rule in `B/S` notation, e.g. `B3/S23`.
impl Display for Life {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in (0..=8).filter(|&n| self.birth & (1 << n) != 0) {
            write!(f, "{}", n)?;
        }
        f.write_str("/S")?;
        for n in (0..=8).filter(|&n| self.survival & (1 << n) != 0) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
