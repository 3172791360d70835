//! High-level CA interface.

use num::BigUint;
use std::sync::Arc;

use crate::errors::CaResult;
use crate::nbhd::Neighbourhood;
use crate::sim::rule::Rule1D;

/// 1D cellular automaton simulation, including a circular grid of cells, a
/// rule, and a generation count.
///
/// The rule is fixed for the lifetime of the automaton; only the cells
/// change. `step()` takes `&mut self`, so no view of the cells returned by
/// `cells()` can outlive a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton1D {
    rule: Arc<Rule1D>,
    cells: Vec<u8>,
    generations: u64,
}
impl Automaton1D {
    /// Constructs an automaton from a rule and an initial grid of cells.
    pub fn new(rule: impl Into<Arc<Rule1D>>, cells: Vec<u8>) -> CaResult<Self> {
        let rule = rule.into();
        rule.check_cells(&cells)?;
        Ok(Self {
            rule,
            cells,
            generations: 0,
        })
    }
    /// Constructs an automaton from an explicit transition table.
    pub fn from_table(
        nbhd: Neighbourhood,
        states: usize,
        table: Vec<u8>,
        cells: Vec<u8>,
    ) -> CaResult<Self> {
        Self::new(Rule1D::new(nbhd, states, table)?, cells)
    }
    /// Constructs an automaton from a rule number.
    pub fn from_id(
        nbhd: Neighbourhood,
        states: usize,
        id: &BigUint,
        cells: Vec<u8>,
    ) -> CaResult<Self> {
        Self::new(Rule1D::from_id(nbhd, states, id)?, cells)
    }

    /// Returns the rule.
    pub fn rule(&self) -> &Arc<Rule1D> {
        &self.rule
    }
    /// Returns the transition table of the rule.
    pub fn rule_table(&self) -> &[u8] {
        self.rule.table()
    }
    /// Returns the neighbourhood of the rule.
    pub fn neighbourhood(&self) -> &Neighbourhood {
        self.rule.nbhd()
    }
    /// Returns the number of cell states.
    pub fn states(&self) -> usize {
        self.rule.states()
    }

    /// Returns the cells of the current generation.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
    /// Replaces the cells of the current generation. The generation count is
    /// left unchanged.
    pub fn set_cells(&mut self, cells: Vec<u8>) -> CaResult<()> {
        self.rule.check_cells(&cells)?;
        self.cells = cells;
        Ok(())
    }
    /// Returns the number of cells in the grid.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    /// Returns `false`. The grid always has at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }
    /// Returns the number of cells with a nonzero state.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }
    /// Returns the number of generations that have elapsed.
    pub fn generation_count(&self) -> u64 {
        self.generations
    }

    /// Advances the automaton by one generation and returns the new cells.
    pub fn step(&mut self) -> &[u8] {
        self.cells = self.rule.transition_unchecked(&self.cells);
        self.generations += 1;
        &self.cells
    }
    /// Advances the automaton by the given number of generations.
    pub fn step_by(&mut self, gens: usize) {
        for _ in 0..gens {
            self.step();
        }
    }
    /// Records `gens` generations, starting with the current one, stepping
    /// after each. Each row of the result is one generation.
    pub fn generate_pattern(&mut self, gens: usize) -> Vec<Vec<u8>> {
        let mut pattern = Vec::with_capacity(gens);
        for _ in 0..gens {
            pattern.push(self.cells.clone());
            self.step();
        }
        pattern
    }
}
