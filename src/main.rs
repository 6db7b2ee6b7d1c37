//! styletune - CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serde_json::json;

use styletune::cli::{Args, Commands};
use styletune::learner::{classifier, identify_state};
use styletune::logging;
use styletune::repl::ReplSession;
use styletune::Config;

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.clone()).context("Failed to load configuration")?;
    args.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    let verbosity = args.verbosity();
    logging::init_tracing(&logging::level_for(verbosity, &config.telemetry.log_level));

    match args.command() {
        Commands::Chat => {
            let mut session = ReplSession::new(&config, verbosity)?;
            session.run()?;
        }
        Commands::Classify { message, json } => {
            let state = identify_state(&message);
            if json {
                let categories: Vec<&str> = classifier::matched_categories(&message)
                    .iter()
                    .map(|category| category.as_str())
                    .collect();
                let report = json!({
                    "message": message,
                    "state": state,
                    "categories": categories,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", state);
            }
        }
        Commands::Config => {
            if let Some(path) = args.config.clone().or_else(Config::default_path) {
                println!("{}", format!("# {}", path.display()).dimmed());
            }
            println!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
