use std::{
    fs,
    io::{stderr, stdout},
    process::exit,
};

use anyhow::{Context, Result};
use clap::Parser;
use termion::{color, style};
use tracing::info;

use gol2::{life106, Grid};

pub use config::Config;
mod config;

fn run(config: &Config) -> Result<()> {
    let content = fs::read_to_string(&config.input)
        .with_context(|| format!("could not load file: {}", config.input.display()))?;
    let actives = life106::deserialize(&content)
        .with_context(|| format!("invalid Life 1.06 input: {}", config.input.display()))?;

    let mut grid = Grid::new(actives);
    info!(
        population = grid.population(),
        iterations = config.iterations,
        "starting simulation"
    );
    for _ in 0..config.iterations {
        grid.advance_generation();
    }
    info!(
        generation = grid.generation(),
        population = grid.population(),
        tracked = grid.tracked(),
        "simulation finished"
    );

    life106::serialize(&mut stdout().lock(), &grid.live_positions())
        .context("could not write result")?;
    Ok(())
}

fn report(error: &anyhow::Error) {
    if termion::is_tty(&stderr()) {
        let red = color::Fg(color::Red);
        let reset = style::Reset;
        eprintln!("{red}[error]{reset} {error:#}");
    } else {
        eprintln!("[error] {error:#}");
    }
}

pub fn main() {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(stderr)
        .init();

    if let Err(error) = run(&config) {
        report(&error);
        exit(1);
    }
}
