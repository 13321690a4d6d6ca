use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::Level;

use crate::extract::extract;
use crate::report::{render, summarize};

#[derive(Parser)]
#[command(version, name = "search-perf")]
pub struct Cli {
    /// Benchmark log to summarize
    pub input: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (can be specified multiple times.) The first level sets level
    /// "info", second sets level "debug", and third sets level "trace" for the logger.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn handle_calls() -> Result<()> {
    let cli = Cli::parse();
    let logger_level = match cli.verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(logger_level.as_str())).init();

    let log_text = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read benchmark log '{}'", cli.input.display()))?;

    let tables = extract(&log_text)
        .with_context(|| format!("Failed to parse benchmark log '{}'", cli.input.display()))?;
    let summary = summarize(&tables)?;
    let report = render(&summary);

    match &cli.output {
        Some(path) => fs::write(path, report)
            .with_context(|| format!("Failed to write report to '{}'", path.display()))?,
        None => print!("{report}"),
    }

    Ok(())
}
