//! Interactive host session
//!
//! Stands in for the chat page: plain lines are user messages turned into
//! prompts, slash commands deliver feedback and inspect the learner. No
//! model is called and nothing is persisted except readline history.

pub mod commands;
pub mod display;
pub mod input;

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::Verbosity;
use crate::config::Config;
use crate::learner::StyleLearner;
use crate::repl::commands::{is_command, Command};
use crate::repl::input::InputHandler;

/// REPL session coordinator
pub struct ReplSession {
    input_handler: InputHandler,
    learner: StyleLearner,
    verbosity: Verbosity,
}

impl ReplSession {
    /// Create a session owning a fresh learner
    pub fn new(config: &Config, verbosity: Verbosity) -> Result<Self> {
        let input_handler = match Self::history_path() {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };

        Ok(ReplSession {
            input_handler,
            learner: StyleLearner::with_config(config),
            verbosity,
        })
    }

    /// Readline history file: ~/.styletune/history
    pub fn history_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".styletune").join("history"))
    }

    /// Run until /exit, Ctrl-D or Ctrl-C
    pub fn run(&mut self) -> Result<()> {
        display::show_banner(env!("CARGO_PKG_VERSION"), self.learner.exploration_rate());

        while let Some(line) = self.input_handler.read_line()? {
            if !self.handle_input(&line) {
                break;
            }
        }

        self.input_handler.save_history()?;
        display::show_stats(&self.learner);
        Ok(())
    }

    /// Handle one line. Returns false when the session should end.
    pub fn handle_input(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return true;
        }

        if !is_command(input) {
            let (prompt, action) = self.learner.generate_optimized_prompt(input);
            let state = self
                .learner
                .last_decision()
                .map(|decision| decision.state.clone())
                .unwrap_or_default();
            display::show_prompt(&state, action, &prompt, self.verbosity.show_prompts());
            return true;
        }

        match commands::parse(input) {
            Command::Help => display::show_help(),
            Command::Exit => return false,
            Command::Feedback { tag } => {
                let applied = self.learner.last_decision().is_some();
                let reward = self.learner.apply_feedback(&tag);
                display::show_reward(reward, applied);
            }
            Command::Reward { value } => {
                let applied = self.learner.last_decision().is_some() && value.is_finite();
                self.learner.process_feedback(value);
                display::show_reward(value, applied);
            }
            Command::State { message } => {
                let state = self.learner.identify_state(&message);
                display::show_state(&message, &state);
            }
            Command::Table => display::show_table(&self.learner),
            Command::Stats => display::show_stats(&self.learner),
            Command::Unknown { input } => display::show_unknown(&input),
        }

        true
    }

    pub fn learner(&self) -> &StyleLearner {
        &self.learner
    }
}
