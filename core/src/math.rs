//! Numeral-base arithmetic used to encode rules and index rule tables.

use num::{BigUint, Zero};
use std::convert::TryFrom;

use crate::errors::{CaError, CaResult, InvalidRule};

/// Maximum number of entries in a rule table.
pub const MAX_RULE_TABLE_LEN: usize = 1 << 24;

/// Returns an error if `states` is not a valid number of cell states.
pub fn check_state_count(states: usize) -> Result<(), InvalidRule> {
    match states {
        0..=1 => Err(InvalidRule::TooFewStates(states)),
        2..=256 => Ok(()),
        _ => Err(InvalidRule::TooManyStates(states)),
    }
}

/// Returns the number of entries in the rule table for a neighbourhood of
/// `nbhd_size` cells with `states` states each, which is `states ^
/// nbhd_size`.
pub fn rule_table_len(nbhd_size: usize, states: usize) -> CaResult<usize> {
    check_state_count(states)?;
    if nbhd_size == 0 {
        return Err(InvalidRule::EmptyNeighbourhood.into());
    }
    u32::try_from(nbhd_size)
        .ok()
        .and_then(|exp| states.checked_pow(exp))
        .filter(|&len| len <= MAX_RULE_TABLE_LEN)
        .ok_or_else(|| InvalidRule::TooBig.into())
}

/// Returns the number of distinct rules for a neighbourhood of `nbhd_size`
/// cells with `states` states each, which is `states ^ (states ^
/// nbhd_size)`.
pub fn rule_count(nbhd_size: usize, states: usize) -> CaResult<BigUint> {
    let table_len = rule_table_len(nbhd_size, states)?;
    Ok(num::pow(BigUint::from(states), table_len))
}

/// Converts a number to base `base`, returning its digits with the most
/// significant digit first.
///
/// The result has the fewest digits that can represent `decimal`, so zero is
/// a single `0` digit.
pub fn decimal_to_base_n(decimal: &BigUint, base: usize) -> CaResult<Vec<u8>> {
    check_state_count(base)?;
    // `check_state_count()` bounds the base to `2..=256`.
    Ok(decimal.to_radix_be(base as u32))
}

/// Converts a sequence of base `base` digits, with the most significant digit
/// first, back to a number.
pub fn base_n_to_decimal(digits: &[u8], base: usize) -> BigUint {
    let base = BigUint::from(base);
    digits.iter().fold(BigUint::zero(), |acc, &digit| {
        acc * &base + BigUint::from(digit)
    })
}

/// Returns the rule table index for a neighbourhood whose cells have the
/// given states, by reading the states as a base `states` number with the
/// first cell as the most significant digit.
pub fn neighbourhood_index(cells: &[u8], states: usize) -> CaResult<usize> {
    check_state_count(states)?;
    if let Some(pos) = cells.iter().position(|&cell| cell as usize >= states) {
        return Err(CaError::CellOutOfRange {
            pos,
            state: cells[pos],
            states,
        });
    }
    cells
        .iter()
        .try_fold(0_usize, |acc, &cell| {
            acc.checked_mul(states)?.checked_add(cell as usize)
        })
        .ok_or_else(|| InvalidRule::TooBig.into())
}

/// Same as `neighbourhood_index()`, but assumes that `states` is valid, that
/// every cell is less than `states`, and that the result fits in a `usize`.
pub(crate) fn neighbourhood_index_unchecked(cells: &[u8], states: usize) -> usize {
    cells
        .iter()
        .fold(0, |acc, &cell| acc * states + cell as usize)
}

/// Returns the states of a neighbourhood of `nbhd_size` cells that has the
/// given rule table index. This is the inverse of `neighbourhood_index()`.
pub fn index_to_neighbourhood(
    index: usize,
    nbhd_size: usize,
    states: usize,
) -> CaResult<Vec<u8>> {
    check_state_count(states)?;
    Ok(index_to_neighbourhood_unchecked(index, nbhd_size, states))
}

/// Same as `index_to_neighbourhood()`, but assumes that `states` is valid.
pub(crate) fn index_to_neighbourhood_unchecked(
    mut index: usize,
    nbhd_size: usize,
    states: usize,
) -> Vec<u8> {
    let mut cells = vec![0; nbhd_size];
    for cell in cells.iter_mut().rev() {
        *cell = (index % states) as u8;
        index /= states;
    }
    cells
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_decimal_to_base_n() {
        let to_base = |n: u64, base| decimal_to_base_n(&BigUint::from(n), base).unwrap();
        assert_eq!(vec![0], to_base(0, 2));
        assert_eq!(vec![1], to_base(1, 2));
        assert_eq!(vec![1, 1, 1, 1, 0], to_base(30, 2));
        assert_eq!(vec![1, 0, 0, 0], to_base(27, 3));
        assert_eq!(vec![2, 2, 2], to_base(26, 3));
        assert_eq!(vec![1, 0], to_base(256, 256));
    }

    #[test]
    fn test_decimal_to_base_n_bad_base() {
        let n = BigUint::from(5_u8);
        assert_eq!(
            Err(CaError::InvalidRule(InvalidRule::TooFewStates(1))),
            decimal_to_base_n(&n, 1),
        );
        assert_eq!(
            Err(CaError::InvalidRule(InvalidRule::TooManyStates(257))),
            decimal_to_base_n(&n, 257),
        );
    }

    #[test]
    fn test_rule_table_len() {
        assert_eq!(Ok(8), rule_table_len(3, 2));
        assert_eq!(Ok(27), rule_table_len(3, 3));
        assert_eq!(Ok(2), rule_table_len(1, 2));
        assert_eq!(
            Err(CaError::InvalidRule(InvalidRule::EmptyNeighbourhood)),
            rule_table_len(0, 2),
        );
        assert_eq!(
            Err(CaError::InvalidRule(InvalidRule::TooBig)),
            rule_table_len(25, 2),
        );
        assert_eq!(
            Err(CaError::InvalidRule(InvalidRule::TooBig)),
            rule_table_len(usize::MAX, 256),
        );
    }

    #[test]
    fn test_rule_count() {
        assert_eq!(Ok(BigUint::from(256_u32)), rule_count(3, 2));
        assert_eq!(Ok(BigUint::from(7_625_597_484_987_u64)), rule_count(3, 3));
        assert_eq!(Ok(BigUint::from(1_u8) << 32), rule_count(5, 2));
    }

    #[test]
    fn test_neighbourhood_index() {
        assert_eq!(Ok(0), neighbourhood_index(&[0, 0, 0], 2));
        assert_eq!(Ok(4), neighbourhood_index(&[1, 0, 0], 2));
        assert_eq!(Ok(1), neighbourhood_index(&[0, 0, 1], 2));
        assert_eq!(Ok(7), neighbourhood_index(&[1, 1, 1], 2));
        assert_eq!(Ok(9 + 2), neighbourhood_index(&[1, 0, 2], 3));
        assert_eq!(Ok(0), neighbourhood_index(&[], 2));
    }

    #[test]
    fn test_neighbourhood_index_bad_input() {
        assert_eq!(
            Err(CaError::InvalidRule(InvalidRule::TooFewStates(0))),
            neighbourhood_index(&[0, 1], 0),
        );
        assert_eq!(
            Err(CaError::CellOutOfRange {
                pos: 1,
                state: 5,
                states: 2
            }),
            neighbourhood_index(&[1, 5, 0], 2),
        );
        assert_eq!(
            Err(CaError::InvalidRule(InvalidRule::TooBig)),
            neighbourhood_index(&[255; 16], 256),
        );
        assert_eq!(
            Err(CaError::InvalidRule(InvalidRule::TooFewStates(0))),
            index_to_neighbourhood(5, 3, 0),
        );
        assert_eq!(
            Err(CaError::InvalidRule(InvalidRule::TooManyStates(1000))),
            index_to_neighbourhood(5, 3, 1000),
        );
        assert_eq!(Ok(vec![1, 0, 2]), index_to_neighbourhood(11, 3, 3));
    }

    proptest! {
        /// Tests that converting to base N and back is lossless and uses as
        /// few digits as possible.
        #[test]
        fn test_base_n_round_trip(n: u64, base in 2..=256_usize) {
            let decimal = BigUint::from(n);
            let digits = decimal_to_base_n(&decimal, base).unwrap();
            assert!(digits.iter().all(|&d| (d as usize) < base));
            assert_eq!(decimal, base_n_to_decimal(&digits, base));

            let len = digits.len();
            assert!(num::pow(BigUint::from(base), len) > decimal);
            if len > 1 {
                assert!(num::pow(BigUint::from(base), len - 1) <= decimal);
            }
        }

        /// Tests that `index_to_neighbourhood()` inverts
        /// `neighbourhood_index()`.
        #[test]
        fn test_neighbourhood_index_inverse(
            states in 2..=6_usize,
            cells in prop::collection::vec(0..6_u8, 1..=6),
        ) {
            let cells: Vec<u8> = cells.into_iter().map(|c| c % states as u8).collect();
            let index = neighbourhood_index(&cells, states).unwrap();
            assert!(index < states.pow(cells.len() as u32));
            assert_eq!(
                Ok(cells.clone()),
                index_to_neighbourhood(index, cells.len(), states),
            );
        }
    }
}
