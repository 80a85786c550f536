//! All kinds of errors in this crate.

use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Rows and columns should be positive.
    InvalidDimension,
    /// Row {0} has {1} cells, but the first row has {2}.
    JaggedBoard(usize, usize, usize),
    /// The board must have at least one cell and at most {0}x{0} cells, got {1}x{2}.
    BoardSize(usize, usize, usize),
    /// The previous state and the current state have different dimensions.
    DimensionMismatch,
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// Invalid Plaintext pattern: {0}
    ParsePlaintextError(String),
}
