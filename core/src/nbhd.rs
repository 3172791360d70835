//! Neighbourhoods: which cells determine a cell's next state.

use itertools::Itertools;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::errors::InvalidRule;

/// Ordered list of cell offsets, relative to the cell being updated, whose
/// states determine that cell's next state.
///
/// The order of the offsets determines the order of digits in a rule table
/// index: the first offset is the most significant digit. Offsets may repeat
/// and do not need to be contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Neighbourhood {
    offsets: Vec<isize>,
}
impl Neighbourhood {
    /// Constructs a neighbourhood from a list of offsets, where negative
    /// offsets are to the left and positive offsets are to the right.
    pub fn new(offsets: Vec<isize>) -> Result<Self, InvalidRule> {
        if offsets.is_empty() {
            return Err(InvalidRule::EmptyNeighbourhood);
        }
        Ok(Self { offsets })
    }
    /// Returns the neighbourhood `{-1,0,1}` used by elementary cellular
    /// automata.
    pub fn elementary() -> Self {
        Self {
            offsets: vec![-1, 0, 1],
        }
    }
    /// Returns the neighbourhood containing every offset from `-radius` to
    /// `radius`, inclusive.
    ///
    /// Returns `InvalidRule::TooBig` if `2 * radius + 1` offsets cannot be
    /// counted in an `isize`.
    pub fn range(radius: usize) -> Result<Self, InvalidRule> {
        let r = isize::try_from(radius)
            .ok()
            .filter(|r| r.checked_mul(2).and_then(|d| d.checked_add(1)).is_some())
            .ok_or(InvalidRule::TooBig)?;
        Ok(Self {
            offsets: (-r..=r).collect(),
        })
    }

    /// Returns the offsets, in order.
    pub fn offsets(&self) -> &[isize] {
        &self.offsets
    }
    /// Returns the number of cells in the neighbourhood.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }
    /// Returns `false`. Neighbourhoods are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
    /// Returns the maximum distance from the updated cell to any cell in its
    /// neighbourhood.
    pub fn radius(&self) -> usize {
        self.offsets
            .iter()
            .map(|o| o.unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Neighbourhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.offsets.iter().join(","))
    }
}

/// Error returned when parsing a neighbourhood.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NeighbourhoodParseError {
    /// An offset is not an integer.
    #[error("invalid offset {0:?}")]
    BadOffset(String),
    /// There are no offsets.
    #[error("{0}")]
    Invalid(#[from] InvalidRule),
}

impl FromStr for Neighbourhood {
    type Err = NeighbourhoodParseError;

    /// Parses a comma-separated list of offsets, optionally surrounded by
    /// braces, such as `{-1,0,1}`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(s);
        let offsets = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse()
                    .map_err(|_| NeighbourhoodParseError::BadOffset(part.to_owned()))
            })
            .collect::<Result<Vec<isize>, _>>()?;
        Ok(Self::new(offsets)?)
    }
}
