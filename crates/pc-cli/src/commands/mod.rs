//! CLI subcommand implementations.

pub mod delete;
pub mod list;
pub mod plot;
pub mod punch;
pub mod show;
pub mod total;
pub mod util;
