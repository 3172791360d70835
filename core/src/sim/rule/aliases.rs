//! Well-known elementary rules.
//!
//! Wolfram's numbering treats the neighbourhood `111` as the most significant
//! bit, which is the opposite of rule numbers here, so these are built from
//! explicit tables.

use super::Rule1D;
use crate::nbhd::Neighbourhood;

/// Returns the 2-state elementary rule with the given Wolfram code, using the
/// neighbourhood `{-1,0,1}`.
pub fn elementary(wolfram_code: u8) -> Rule1D {
    let table = (0..8).map(|i| (wolfram_code >> i) & 1).collect();
    Rule1D {
        nbhd: Neighbourhood::elementary(),
        states: 2,
        table,
    }
}

/// Rule 30: chaotic, used for random number generation.
pub fn rule_30() -> Rule1D {
    elementary(30)
}
/// Rule 90: Sierpinski triangle.
pub fn rule_90() -> Rule1D {
    elementary(90)
}
/// Rule 110: Turing complete.
pub fn rule_110() -> Rule1D {
    elementary(110)
}
/// Rule 184: traffic flow.
pub fn rule_184() -> Rule1D {
    elementary(184)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elementary_tables() {
        assert_eq!(&[0, 1, 1, 1, 1, 0, 0, 0], rule_30().table());
        assert_eq!(&[0, 1, 0, 1, 1, 0, 1, 0], rule_90().table());
        assert_eq!(&[0, 1, 1, 1, 0, 1, 1, 0], rule_110().table());
        assert_eq!(&[0, 0, 0, 1, 1, 1, 0, 1], rule_184().table());
        for code in 0..=255 {
            let rule = elementary(code);
            assert_eq!(
                rule,
                Rule1D::new(rule.nbhd().clone(), 2, rule.table().to_vec()).unwrap(),
            );
        }
    }
}
