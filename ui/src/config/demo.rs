use linecell_core::Neighbourhood;

use super::Seed;

/// Single automaton to run and print.
#[derive(Debug)]
pub struct DemoConfig {
    pub nbhd: Neighbourhood,
    pub states: usize,
    pub table: Vec<u8>,
    pub grid_size: usize,
    pub seed: Seed,
    pub generations: usize,
    pub symbols: String,
}
impl Default for DemoConfig {
    fn default() -> Self {
        // Rule 30 from a single cell.
        Self {
            nbhd: Neighbourhood::elementary(),
            states: 2,
            table: vec![0, 1, 1, 1, 1, 0, 0, 0],
            grid_size: 145,
            seed: vec![(73, 1)],
            generations: 73,
            symbols: " #".to_owned(),
        }
    }
}
