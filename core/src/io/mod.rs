//! Formats for displaying cellular automata.

pub mod render;

pub use render::{render, render_digits, SymbolMap};
