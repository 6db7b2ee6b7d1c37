//! Slash commands for the interactive session

use crate::learner::FeedbackCategory;

/// REPL command types
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Exit,
    /// Feedback by category tag; unknown tags still reach the learner
    Feedback { tag: String },
    /// Raw numeric reward
    Reward { value: f64 },
    /// Classify without generating a prompt
    State { message: String },
    Table,
    Stats,
    Unknown { input: String },
}

/// Check if input is a command (starts with /)
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}

/// Parse input string into a command
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();
    let unknown = || Command::Unknown {
        input: input.to_string(),
    };

    let Some(body) = trimmed.strip_prefix('/') else {
        return unknown();
    };

    let (name, rest) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (body, ""),
    };

    match name.to_lowercase().as_str() {
        "help" | "h" => Command::Help,
        "exit" | "quit" | "q" => Command::Exit,
        "helpful" | "good" => feedback(FeedbackCategory::Helpful),
        "empathy" => feedback(FeedbackCategory::MoreEmpathy),
        "practical" => feedback(FeedbackCategory::MorePractical),
        "not-helpful" | "bad" => feedback(FeedbackCategory::NotHelpful),
        "feedback" if !rest.is_empty() => Command::Feedback {
            tag: rest.to_string(),
        },
        "reward" => match rest.parse::<f64>() {
            Ok(value) => Command::Reward { value },
            Err(_) => unknown(),
        },
        "state" => Command::State {
            message: rest.to_string(),
        },
        "table" => Command::Table,
        "stats" | "status" => Command::Stats,
        _ => unknown(),
    }
}

fn feedback(category: FeedbackCategory) -> Command {
    Command::Feedback {
        tag: category.as_str().to_string(),
    }
}

/// Help lines: (usage, description)
pub const HELP: &[(&str, &str)] = &[
    ("/helpful, /good", "Last response was helpful (reward 1.0)"),
    ("/empathy", "Ask for more empathy (reward 0.8)"),
    ("/practical", "Ask for more practical advice (reward 0.8)"),
    ("/not-helpful, /bad", "Last response was not helpful (reward -1.0)"),
    ("/feedback <tag>", "Send any feedback tag"),
    ("/reward <number>", "Send a raw reward"),
    ("/state <text>", "Show the state a message maps to"),
    ("/table", "Show learned values and style parameters"),
    ("/stats", "Show session statistics"),
    ("/help, /h", "Show this help message"),
    ("/exit, /quit, /q", "Exit"),
];
