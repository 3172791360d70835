mod demo;
mod sweep;

pub use demo::*;
pub use sweep::*;

#[derive(Debug)]
pub struct Config {
    pub log_level: log::Level,
    pub demo: DemoConfig,
    pub sweep: SweepConfig,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: log::Level::Info,
            demo: DemoConfig::default(),
            sweep: SweepConfig::default(),
        }
    }
}

/// Live cells to place in an otherwise empty grid, as `(position, state)`
/// pairs.
pub type Seed = Vec<(usize, u8)>;
