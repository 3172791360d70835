//! Text rendering of a row of cells.
//!
//! Nothing here depends on an automaton; these functions only format a slice
//! of cell states.

use itertools::Itertools;

use crate::errors::{CaError, CaResult};

/// Mapping from cell state to the character used to display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMap {
    symbols: Vec<char>,
}
impl From<&str> for SymbolMap {
    fn from(s: &str) -> Self {
        Self::new(s.chars())
    }
}
impl SymbolMap {
    /// Constructs a symbol map where state `i` is displayed using the `i`th
    /// symbol.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }
    /// Constructs a symbol map that must be able to display every one of
    /// `states` states.
    pub fn for_states(symbols: impl IntoIterator<Item = char>, states: usize) -> CaResult<Self> {
        let ret = Self::new(symbols);
        if ret.len() < states {
            return Err(CaError::IncompleteSymbolMap {
                needed: states,
                got: ret.len(),
            });
        }
        Ok(ret)
    }

    /// Returns the number of states that have a symbol.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }
    /// Returns `true` if there are no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
    /// Returns the symbol for a state, if there is one.
    pub fn get(&self, state: u8) -> Option<char> {
        self.symbols.get(state as usize).copied()
    }
}

/// Renders a row of cells as a line of text, using `symbols` to display each
/// state.
pub fn render(cells: &[u8], symbols: &SymbolMap) -> CaResult<String> {
    cells
        .iter()
        .map(|&cell| {
            symbols.get(cell).ok_or(CaError::IncompleteSymbolMap {
                needed: cell as usize + 1,
                got: symbols.len(),
            })
        })
        .collect()
}

/// Renders a row of cells as the concatenation of their state numbers.
pub fn render_digits(cells: &[u8]) -> String {
    cells.iter().join("")
}
