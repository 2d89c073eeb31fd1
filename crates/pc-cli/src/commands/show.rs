//! Show command for the most recent entry of a clock.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDateTime;
use pc_core::{Status, TimerName};
use pc_store::{Backend, Punchclock};

use super::util::{format_elapsed, format_stamp};

pub fn run<W: Write, B: Backend>(
    writer: &mut W,
    clock: &Punchclock<B>,
    name: &TimerName,
    now: NaiveDateTime,
) -> Result<()> {
    match clock.status(name, now)? {
        Status::Empty => writeln!(writer, "{name} has no entries.")?,
        Status::Open { start, elapsed } => {
            writeln!(writer, "started: {}", format_stamp(start))?;
            writeln!(writer, "now: {}", format_stamp(now))?;
            writeln!(writer, "elapsed time: {}", format_elapsed(elapsed))?;
        }
        Status::Closed {
            start,
            end,
            elapsed,
        } => {
            writeln!(writer, "started: {}", format_stamp(start))?;
            writeln!(writer, "ended: {}", format_stamp(end))?;
            writeln!(writer, "elapsed time: {}", format_elapsed(elapsed))?;
        }
    }
    Ok(())
}
