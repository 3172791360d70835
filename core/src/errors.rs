//! Errors produced while building or running an automaton.

use num::BigUint;
use thiserror::Error;

/// Result type returned by fallible automaton routines.
pub type CaResult<T> = Result<T, CaError>;

/// Error encountered while constructing, configuring, or displaying an
/// automaton.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum CaError {
    /// The rule is inconsistent with its neighbourhood or number of states.
    #[error("invalid rule: {0}")]
    InvalidRule(#[from] InvalidRule),
    /// The rule number cannot be represented with the given neighbourhood and
    /// number of states.
    #[error("rule #{id} is out of range; only {count} rules exist for this neighbourhood and number of states")]
    OutOfRange {
        /// Requested rule number.
        id: BigUint,
        /// Number of representable rules.
        count: BigUint,
    },
    /// A symbol map does not have a symbol for every state it must display.
    #[error("symbol map has {got} symbols but {needed} are needed")]
    IncompleteSymbolMap {
        /// Minimum number of symbols required.
        needed: usize,
        /// Number of symbols actually present.
        got: usize,
    },
    /// The grid has no cells.
    #[error("grid must contain at least one cell")]
    EmptyGrid,
    /// A cell holds a state that the rule does not have.
    #[error("cell #{pos} has state #{state}, but the rule only has {states} states")]
    CellOutOfRange {
        /// Position of the offending cell.
        pos: usize,
        /// State of the offending cell.
        state: u8,
        /// Number of states in the rule.
        states: usize,
    },
}

/// Reason why a rule is invalid.
#[allow(missing_docs)]
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum InvalidRule {
    #[error("a rule needs at least 2 states, not {0}")]
    TooFewStates(usize),
    #[error("a rule can have at most 256 states, not {0}")]
    TooManyStates(usize),
    #[error("neighbourhood must contain at least one cell")]
    EmptyNeighbourhood,
    #[error("rule table has {got} entries but should have {expected}")]
    WrongTableLength { expected: usize, got: usize },
    #[error("rule table entry #{index} is state #{state}, which is out of range")]
    TransitionOutOfRange { index: usize, state: u8 },
    #[error("rule table would be too big")]
    TooBig,
}
