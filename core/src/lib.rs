//! One-dimensional cellular automaton rules and simulation backend.
//!
//! An automaton is a circular row of cells, each in one of `k` states, that is
//! updated every generation by looking up the states of each cell's
//! neighbourhood in a rule table.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

mod automaton;
mod errors;
pub mod io;
pub mod math;
mod nbhd;
pub mod sim;

pub use automaton::Automaton1D;
pub use errors::{CaError, CaResult, InvalidRule};
pub use nbhd::{Neighbourhood, NeighbourhoodParseError};

pub mod prelude {
    //! Commonly used types.

    pub use crate::automaton::Automaton1D;
    pub use crate::errors::{CaError, CaResult, InvalidRule};
    pub use crate::io::{render, render_digits, SymbolMap};
    pub use crate::nbhd::Neighbourhood;
    pub use crate::sim::rule::{decimal_to_rule_table, Rule1D};
    pub use num::BigUint;
}
