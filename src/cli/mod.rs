//! CLI module for styletune
//!
//! Handles command-line argument parsing for the host binary.

pub mod args;

pub use args::{Args, Commands, Verbosity};
