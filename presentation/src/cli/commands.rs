//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for `list` and the results printed after `take`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// CLI arguments for online-quiz
#[derive(Parser, Debug)]
#[command(name = "online-quiz")]
#[command(author, version, about = "Timed multiple-choice quizzes: API server and terminal client")]
#[command(long_about = r#"
online-quiz serves multiple-choice quizzes over a small JSON API and lets you
take them in the terminal.

Correct answers never leave the server until a quiz has been submitted.
Sessions are timed, and leaving the terminal counts as a violation; too many
violations submit the quiz automatically.

Configuration files are loaded from (in priority order):
1. QUIZ_* environment variables   e.g. QUIZ_SERVER__API_KEY
2. --config <path>                Explicit config file
3. ./quiz.toml or ./.quiz.toml    Project-level config
4. ~/.config/online-quiz/config.toml   Global config

Example:
  online-quiz serve --bind 0.0.0.0:5079
  online-quiz list
  online-quiz take 2
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the quiz API server
    Serve {
        /// Address to listen on (overrides server.bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// List the available quizzes
    List,

    /// Take a quiz in the terminal
    Take {
        /// Quiz ID (see `list`)
        id: u32,
    },

    /// Show configuration file locations and the effective configuration
    ShowConfig,
}
