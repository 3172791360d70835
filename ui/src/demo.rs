//! Drivers that build automata from the config and print their generations.

use anyhow::{ensure, Context, Result};
use log::{debug, info, warn};
use std::io::Write;

use linecell_core::math::rule_count;
use linecell_core::prelude::*;

use crate::config::{DemoConfig, Seed, SweepConfig};

/// Builds the initial grid: every cell dead except the seed cells.
fn initial_cells(grid_size: usize, seed: &Seed) -> Result<Vec<u8>> {
    let mut cells = vec![0; grid_size];
    for &(pos, state) in seed {
        ensure!(
            pos < grid_size,
            "seed cell #{} is outside the grid of {} cells",
            pos,
            grid_size
        );
        cells[pos] = state;
    }
    Ok(cells)
}

/// Prints `gens` generations of an automaton, one per line.
fn print_generations(
    automaton: &mut Automaton1D,
    gens: usize,
    symbols: &SymbolMap,
    out: &mut impl Write,
) -> Result<()> {
    for _ in 0..gens {
        writeln!(out, "{}", render(automaton.cells(), symbols)?)?;
        automaton.step();
    }
    Ok(())
}

/// Runs the automaton described by `config`.
pub fn run_demo(config: &DemoConfig, out: &mut impl Write) -> Result<()> {
    let symbols = SymbolMap::for_states(config.symbols.chars(), config.states)?;
    let cells = initial_cells(config.grid_size, &config.seed)?;
    let mut automaton = Automaton1D::from_table(
        config.nbhd.clone(),
        config.states,
        config.table.clone(),
        cells,
    )?;
    debug!("Built {}", automaton.rule());
    info!(
        "Running {} generations on {} cells",
        config.generations,
        automaton.len(),
    );
    print_generations(&mut automaton, config.generations, &symbols, out)
}

/// Runs each rule number in turn, starting from zero, as described by
/// `config`.
pub fn run_sweep(config: &SweepConfig, out: &mut impl Write) -> Result<()> {
    let symbols = SymbolMap::for_states(config.symbols.chars(), config.states)?;
    let cells = initial_cells(config.grid_size, &config.seed)?;
    let total = rule_count(config.nbhd.len(), config.states)?;
    let count = if total > BigUint::from(config.max_rules) {
        warn!(
            "Only running the first {} of {} rules",
            config.max_rules,
            total
        );
        BigUint::from(config.max_rules)
    } else {
        total
    };

    let mut id = BigUint::from(0_u8);
    while id < count {
        let mut automaton =
            Automaton1D::from_id(config.nbhd.clone(), config.states, &id, cells.clone())
                .with_context(|| format!("Error building rule #{}", id))?;
        debug!("Built {}", automaton.rule());
        writeln!(out, "Rule: {}", id)?;
        print_generations(&mut automaton, config.generations, &symbols, out)?;
        writeln!(out)?;
        id += 1_u32;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = vec![];
        f(&mut out).expect("Driver failed");
        String::from_utf8(out).expect("Output is not UTF-8")
    }

    #[test]
    fn test_default_demo() {
        let config = DemoConfig::default();
        let s = output(|out| run_demo(&config, out));
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(73, lines.len());
        assert!(lines.iter().all(|line| line.chars().count() == 145));
        assert_eq!(Some(73), lines[0].find('#'));
        assert_eq!(1, lines[0].matches('#').count());
        assert_eq!(3, lines[1].matches('#').count());
    }

    #[test]
    fn test_small_sweep() {
        // With a single-cell neighbourhood, the four 2-state rules are "die",
        // "stay", "invert", and "live".
        let mut config = SweepConfig {
            enabled: true,
            nbhd: Neighbourhood::range(0).unwrap(),
            states: 2,
            grid_size: 3,
            seed: vec![(1, 1)],
            generations: 2,
            symbols: ".#".to_owned(),
            max_rules: 10,
        };
        let s = output(|out| run_sweep(&config, out));
        assert_eq!(
            "Rule: 0\n.#.\n...\n\n\
             Rule: 1\n.#.\n.#.\n\n\
             Rule: 2\n.#.\n#.#\n\n\
             Rule: 3\n.#.\n###\n\n",
            s,
        );

        config.max_rules = 2;
        let s = output(|out| run_sweep(&config, out));
        assert_eq!("Rule: 0\n.#.\n...\n\nRule: 1\n.#.\n.#.\n\n", s);
    }

    #[test]
    fn test_bad_config() {
        let config = DemoConfig {
            symbols: "#".to_owned(),
            ..DemoConfig::default()
        };
        assert!(run_demo(&config, &mut std::io::sink()).is_err());

        let config = DemoConfig {
            seed: vec![(145, 1)],
            ..DemoConfig::default()
        };
        assert!(run_demo(&config, &mut std::io::sink()).is_err());

        let config = DemoConfig {
            table: vec![0, 1, 1],
            ..DemoConfig::default()
        };
        let err = run_demo(&config, &mut std::io::sink()).unwrap_err();
        assert!(err.downcast_ref::<CaError>().is_some());
    }
}
