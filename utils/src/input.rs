use std::path::{Path, PathBuf};

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("failed to read puzzle input from {}", .path.display())]
    #[diagnostic(
        code(input::read),
        help("pass the input file as the first argument or place it at inputs/dayNN.txt")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Command line shared by every day's binary
#[derive(Debug, Parser)]
#[command(version, about = "Solve one day's puzzle and print both answers")]
pub struct Cli {
    /// Puzzle input file [default: inputs/dayNN.txt]
    pub input: Option<PathBuf>,
}

impl Cli {
    pub fn input_path(&self, day: u8) -> PathBuf {
        self.input.clone().unwrap_or_else(|| default_path(day))
    }
}

pub fn default_path(day: u8) -> PathBuf {
    PathBuf::from(format!("inputs/day{day:02}.txt"))
}

/// Reads the whole input file into memory
#[tracing::instrument]
pub fn read_input(path: &Path) -> Result<String, InputError> {
    let input = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(bytes = input.len(), lines = input.lines().count(), "loaded puzzle input");
    Ok(input)
}

/// Parses the command line and loads the input for `day`
pub fn load(day: u8) -> Result<String, InputError> {
    let cli = Cli::parse();
    read_input(&cli.input_path(day))
}
