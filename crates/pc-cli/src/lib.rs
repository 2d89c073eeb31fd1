//! Punchclock CLI library.
//!
//! This crate provides the `clock` command-line interface.

mod cli;
pub mod commands;
mod config;
pub mod prompt;

pub use cli::{Cli, Commands};
pub use config::Config;
