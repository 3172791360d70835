//! Everything related to the description of a cellular automaton rule,
//! primarily the transition table.

use itertools::Itertools;
use num::BigUint;
use std::fmt;
use std::sync::Arc;

pub mod aliases;

use crate::errors::{CaError, CaResult, InvalidRule};
use crate::math;
use crate::nbhd::Neighbourhood;
pub use aliases::*;

/// Converts a rule number to a rule table for a neighbourhood of `nbhd_size`
/// cells with `states` states each.
///
/// The rule table is the rule number written in base `states`, left-padded
/// with zeros to exactly `states ^ nbhd_size` digits.
pub fn decimal_to_rule_table(
    decimal: &BigUint,
    nbhd_size: usize,
    states: usize,
) -> CaResult<Vec<u8>> {
    let table_len = math::rule_table_len(nbhd_size, states)?;
    let digits = math::decimal_to_base_n(decimal, states)?;
    // `digits` has minimal length, so it fits iff `decimal < states^table_len`.
    if digits.len() > table_len {
        return Err(CaError::OutOfRange {
            id: decimal.clone(),
            count: math::rule_count(nbhd_size, states)?,
        });
    }
    let mut table = vec![0; table_len];
    table[table_len - digits.len()..].copy_from_slice(&digits);
    Ok(table)
}

/// 1D cellular automaton rule: a neighbourhood, a number of states, and a
/// transition table.
///
/// This is immutable once constructed, so the table always matches the
/// neighbourhood and number of states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule1D {
    nbhd: Neighbourhood,
    states: usize,
    table: Vec<u8>,
}
impl Rule1D {
    /// Constructs a rule from an explicit transition table.
    ///
    /// `table[i]` is the next state of a cell whose neighbourhood, read as a
    /// base `states` number with the first offset as the most significant
    /// digit, is `i`.
    pub fn new(nbhd: Neighbourhood, states: usize, table: Vec<u8>) -> CaResult<Self> {
        let expected = math::rule_table_len(nbhd.len(), states)?;
        if table.len() != expected {
            return Err(InvalidRule::WrongTableLength {
                expected,
                got: table.len(),
            }
            .into());
        }
        if let Some((index, &state)) = table
            .iter()
            .find_position(|&&state| state as usize >= states)
        {
            return Err(InvalidRule::TransitionOutOfRange { index, state }.into());
        }
        Ok(Self {
            nbhd,
            states,
            table,
        })
    }
    /// Constructs a rule from a rule number, which is the transition table
    /// written as a single base `states` number.
    pub fn from_id(nbhd: Neighbourhood, states: usize, id: &BigUint) -> CaResult<Self> {
        let table = decimal_to_rule_table(id, nbhd.len(), states)?;
        Self::new(nbhd, states, table)
    }

    /// Returns the rule as an `Arc<Rule1D>`.
    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Returns the neighbourhood.
    pub fn nbhd(&self) -> &Neighbourhood {
        &self.nbhd
    }
    /// Returns the number of cell states.
    pub fn states(&self) -> usize {
        self.states
    }
    /// Returns the maximum cell state value, which is one less than the number
    /// of cell states.
    pub fn max_state(&self) -> u8 {
        (self.states - 1) as u8
    }
    /// Returns the transition table.
    pub fn table(&self) -> &[u8] {
        &self.table
    }
    /// Returns the rule number.
    pub fn id(&self) -> BigUint {
        math::base_n_to_decimal(&self.table, self.states)
    }

    /// Returns the next state of a cell whose neighbourhood has the given
    /// states, in neighbourhood order. `nbhd_cells` must have one valid state
    /// per neighbourhood offset.
    pub(crate) fn next_state(&self, nbhd_cells: &[u8]) -> u8 {
        self.table[math::neighbourhood_index_unchecked(nbhd_cells, self.states)]
    }
    /// Returns an iterator over every neighbourhood configuration and the
    /// state it produces, in table order.
    pub fn transitions(&self) -> impl '_ + Iterator<Item = (Vec<u8>, u8)> {
        let nbhd_size = self.nbhd.len();
        self.table.iter().enumerate().map(move |(i, &next)| {
            (
                math::index_to_neighbourhood_unchecked(i, nbhd_size, self.states),
                next,
            )
        })
    }
    /// Returns the transition table as a string of base `states` digits, or a
    /// comma-separated list of states if there are more than 36 states.
    pub fn table_digits(&self) -> String {
        if self.states <= 36 {
            self.table
                .iter()
                .filter_map(|&s| std::char::from_digit(s as u32, self.states as u32))
                .collect()
        } else {
            self.table.iter().join(",")
        }
    }

    /// Returns an error if `cells` is empty or contains a state that is not
    /// valid for this rule.
    pub(crate) fn check_cells(&self, cells: &[u8]) -> CaResult<()> {
        if cells.is_empty() {
            return Err(CaError::EmptyGrid);
        }
        match cells
            .iter()
            .position(|&state| state as usize >= self.states)
        {
            Some(pos) => Err(CaError::CellOutOfRange {
                pos,
                state: cells[pos],
                states: self.states,
            }),
            None => Ok(()),
        }
    }

    /// Computes the next generation of a circular grid of cells.
    ///
    /// Every new state is computed from `cells` alone, so the result does not
    /// depend on the order cells are visited.
    pub fn transition(&self, cells: &[u8]) -> CaResult<Vec<u8>> {
        self.check_cells(cells)?;
        Ok(self.transition_unchecked(cells))
    }
    /// Same as `transition()`, but assumes that `cells` is nonempty and that
    /// every cell is a valid state for this rule.
    pub(crate) fn transition_unchecked(&self, cells: &[u8]) -> Vec<u8> {
        let len = cells.len();
        // Reduce each offset modulo the grid size once so that it can be
        // added to any position without going negative.
        let wrapped_offsets = self
            .nbhd
            .offsets()
            .iter()
            .map(|&o| o.rem_euclid(len as isize) as usize)
            .collect_vec();

        let mut nbhd_cells = vec![0; wrapped_offsets.len()];
        (0..len)
            .map(|i| {
                for (cell, &offset) in nbhd_cells.iter_mut().zip(&wrapped_offsets) {
                    *cell = cells[(i + offset) % len];
                }
                self.next_state(&nbhd_cells)
            })
            .collect()
    }
}

impl fmt::Display for Rule1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {} (k={}, nbhd={})", self.id(), self.states, self.nbhd)
    }
}
