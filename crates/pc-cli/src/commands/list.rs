//! List and running commands.

use std::io::Write;

use anyhow::Result;
use pc_core::TimerName;
use pc_store::{Backend, Punchclock};

/// Prints every clock name, one per line.
pub fn run<W: Write, B: Backend>(writer: &mut W, clock: &Punchclock<B>) -> Result<()> {
    print_names(writer, &clock.names()?, "No clocks yet.")
}

/// Prints the clocks that are currently clocked in.
pub fn running<W: Write, B: Backend>(writer: &mut W, clock: &Punchclock<B>) -> Result<()> {
    print_names(writer, &clock.running()?, "No clocks running.")
}

fn print_names<W: Write>(writer: &mut W, names: &[TimerName], empty: &str) -> Result<()> {
    if names.is_empty() {
        writeln!(writer, "{empty}")?;
        return Ok(());
    }
    for name in names {
        writeln!(writer, "{name}")?;
    }
    Ok(())
}
