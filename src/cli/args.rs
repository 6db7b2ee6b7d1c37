//! Command-line argument parsing for styletune
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// styletune - tune prompt style from user feedback
#[derive(Parser, Debug)]
#[command(name = "styletune")]
#[command(version)]
#[command(about = "Adaptive prompt-style tuning from sparse human feedback", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed the action selector for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the exploration rate (0.0 to 1.0)
    #[arg(long, value_name = "RATE")]
    pub exploration_rate: Option<f64>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand (defaults to chat)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Start an interactive session
    Chat,

    /// Print the state tag for a message
    Classify {
        /// Message to classify
        message: String,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Display the effective configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Subcommand to run, chat when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Chat)
    }

    /// Fold flag overrides into a loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.learner.seed = Some(seed);
        }
        if let Some(rate) = self.exploration_rate {
            config.learner.exploration_rate = rate;
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Check if the REPL should echo rendered prompts
    pub fn show_prompts(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}
