use linecell_core::Neighbourhood;

use super::Seed;

/// Runs every rule number in order, up to a limit, for a few generations
/// each.
#[derive(Debug)]
pub struct SweepConfig {
    pub enabled: bool,
    pub nbhd: Neighbourhood,
    pub states: usize,
    pub grid_size: usize,
    pub seed: Seed,
    pub generations: usize,
    pub symbols: String,
    /// Maximum number of rules to run. (There are 7.6 trillion 3-state rules
    /// with a neighbourhood of 3 cells.)
    pub max_rules: u64,
}
impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            nbhd: Neighbourhood::elementary(),
            states: 3,
            grid_size: 145,
            seed: vec![(72, 1), (73, 2), (74, 1)],
            generations: 20,
            symbols: " #@".to_owned(),
            max_rules: 100,
        }
    }
}
