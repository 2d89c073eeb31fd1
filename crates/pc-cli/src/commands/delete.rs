//! Delete command.

use std::io::Write;

use anyhow::Result;
use pc_core::TimerName;
use pc_store::{Backend, Punchclock};

/// Deletes `name` and its whole history.
pub fn run<W: Write, B: Backend>(
    writer: &mut W,
    clock: &mut Punchclock<B>,
    name: &TimerName,
) -> Result<()> {
    clock.delete(name)?;
    writeln!(writer, "Deleted {name}.")?;
    Ok(())
}
