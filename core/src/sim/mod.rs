//! Rules and the functions that apply them.

pub mod rule;

pub use rule::Rule1D;
