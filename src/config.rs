//! Command-line configuration of the driver.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Runs a Life 1.06 pattern for a number of generations and prints the result.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Life 1.06 file holding the initial live cells.
    #[arg(value_name = "INPUT_PATH")]
    pub input: PathBuf,

    /// Number of generations to advance.
    #[arg(value_name = "NUM_ITERATIONS")]
    pub iterations: u64,

    /// Log level written to stderr, one of error, warn, info, debug, trace.
    #[arg(long, env = "GOL2_LOG", default_value_t = Level::WARN)]
    pub log: Level,

    /// Raises the log level once per occurrence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn log_level(&self) -> Level {
        const LEVELS: [Level; 5] = [
            Level::ERROR,
            Level::WARN,
            Level::INFO,
            Level::DEBUG,
            Level::TRACE,
        ];
        let base = LEVELS
            .iter()
            .position(|level| *level == self.log)
            .unwrap_or(1);
        LEVELS[(base + self.verbose as usize).min(LEVELS.len() - 1)]
    }
}
