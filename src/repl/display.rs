//! Terminal output for the interactive session

use colored::*;

use crate::learner::{StyleLearner, TuningAction};
use crate::repl::commands::HELP;

/// Show welcome banner
pub fn show_banner(version: &str, exploration_rate: f64) {
    let width = 64;
    println!("\n{}", "=".repeat(width).cyan());
    println!("{}", format!("  styletune {} - interactive session", version).bold().cyan());
    println!(
        "{}",
        format!("  Exploration rate: {:.2} | State is discarded on exit", exploration_rate).dimmed()
    );
    println!("{}\n", "=".repeat(width).cyan());
    println!(
        "Type a message (or {} for commands, {} to quit)\n",
        "/help".green(),
        "/exit".green()
    );
}

pub fn show_help() {
    println!("\n{}", "Available Commands:".bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    for (usage, description) in HELP {
        println!("  {:<22} {}", usage.green(), description);
    }
    println!();
}

/// Print the outcome of one prompt generation
pub fn show_prompt(state: &str, action: TuningAction, prompt: &str, show_prompt: bool) {
    println!(
        "{} {}  {} {}",
        "state:".dimmed(),
        state.yellow(),
        "action:".dimmed(),
        action.as_str().green()
    );
    if show_prompt {
        println!("{}", "-".repeat(60).dimmed());
        println!("{}", prompt);
        println!("{}", "-".repeat(60).dimmed());
    }
    println!(
        "{}",
        "Rate it with /helpful, /empathy, /practical or /not-helpful".dimmed()
    );
}

pub fn show_reward(reward: f64, applied: bool) {
    if applied {
        println!("{}", format!("Reward {:+.2} recorded.", reward).green());
    } else {
        println!(
            "{}",
            "No prompt to attribute this feedback to yet.".yellow()
        );
    }
}

pub fn show_state(message: &str, state: &str) {
    println!("{} -> {}", message.dimmed(), state.yellow());
}

/// Print learned values and per-state parameters
pub fn show_table(learner: &StyleLearner) {
    let states = learner.known_states();
    if states.is_empty() {
        println!("{}", "Nothing learned yet.".yellow());
        return;
    }

    println!("\n{}", "Learned values:".bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    for state in states {
        let best = learner.best_action(&state);
        println!("  {} (greedy: {})", state.yellow().bold(), best.as_str().green());

        for action in TuningAction::ALL {
            println!(
                "    {:<16} {:>8.4}",
                action.as_str(),
                learner.value(&state, action)
            );
        }

        let params = learner.state_parameters(&state);
        let rendered: Vec<String> = params
            .entries()
            .iter()
            .map(|(name, value)| format!("{}={:.2}", name, value))
            .collect();
        println!("    {}", rendered.join(" ").dimmed());
    }
    println!();
}

pub fn show_stats(learner: &StyleLearner) {
    let stats = learner.stats();

    println!("\n{}", "Session Status:".bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    println!("  Session:           {}", learner.session_id());
    println!("  Prompts:           {}", stats.prompts_generated);
    println!(
        "  Explore/exploit:   {}/{}",
        stats.explorations, stats.exploitations
    );
    println!("  Feedback applied:  {}", stats.feedback_applied);
    println!("  Feedback ignored:  {}", stats.feedback_ignored);
    println!("  Average reward:    {:.3}", stats.average_reward());
    if let Some(decision) = learner.last_decision() {
        println!(
            "  Awaiting feedback: {} / {}",
            decision.state.yellow(),
            decision.action.as_str().green()
        );
    }
    println!();
}

pub fn show_unknown(input: &str) {
    println!("{}", format!("Unknown command: {}", input).red());
    println!("Type {} for available commands", "/help".cyan());
}
