//! styletune - adaptive prompt-style tuning
//!
//! A per-session learner that classifies user text into an emotional state,
//! picks a tuning action for that state, renders an instruction prompt for a
//! downstream generator, and learns action values from user feedback.
//!
//! # Architecture
//!
//! - **learner**: classifier, policy, prompt renderer, value table, engine
//! - **telemetry**: per-session event log and counters
//! - **config** / **errors**: ambient configuration and error types
//! - **cli** / **repl** / **logging**: the interactive host binary

pub mod errors;
pub mod config;
pub mod learner;
pub mod telemetry;

// Host binary support
pub mod cli;
pub mod logging;
pub mod repl;

// Re-export commonly used types
pub use config::Config;
pub use errors::{Result, TunerError};
pub use learner::{StyleLearner, StyleParameters, TuningAction};
