//! Terminal frontend that prints the generations of 1D cellular automata.

#![warn(missing_docs)]

use anyhow::Context;
use log::info;

mod config;
mod demo;

use config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    simple_logger::init_with_level(config.log_level)?;
    info!("Starting LineCell v{} ...", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run_demo(&config.demo, &mut out).context("Error running demo")?;
    if config.sweep.enabled {
        demo::run_sweep(&config.sweep, &mut out).context("Error running rule sweep")?;
    }
    Ok(())
}
