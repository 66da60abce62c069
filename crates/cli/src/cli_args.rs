//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate and decides which session mode a run uses.

use clap::Parser;

/// Command-line arguments for the `srs` binary.
///
/// Without `--script` the binary shows the interactive menu.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use student_records_cli::cli_args::{Args, Mode};
///
/// let args = Args::parse_from(["srs", "--script", "enrollments.txt"]);
/// assert_eq!(args.mode(), Mode::Script("enrollments.txt".to_string()));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the settings file YAML.
    ///
    /// If not provided, defaults to `~/.student-records/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Run commands from a file, one per line, instead of showing the menu.
    ///
    /// Use `-` to read commands from standard input.
    #[arg(long, short = 's')]
    pub script: Option<String>,

    /// Disable colored output.
    #[arg(long, action)]
    pub no_color: bool,
}

/// How a session receives its commands.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Mode {
    /// Menu-driven prompts on the terminal
    Interactive,
    /// One command per line from a file, or stdin for `-`
    Script(String),
}

impl Args {
    #[must_use]
    pub fn mode(&self) -> Mode {
        match &self.script {
            Some(path) => Mode::Script(path.clone()),
            None => Mode::Interactive,
        }
    }
}
