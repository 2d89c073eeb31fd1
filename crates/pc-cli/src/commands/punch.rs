//! `clock in` and `clock out`.

use std::io::Write;

use anyhow::Result;
use chrono::{Duration, NaiveDateTime};
use pc_core::{ClockError, TimerName};
use pc_store::{Backend, ClockedIn, Confirm, Punchclock, PunchclockError};

use super::util::format_elapsed;

/// Clocks into `name`, asking `confirm` before creating a new clock.
///
/// A refused transition is reported on `writer` and is not an error.
pub fn clock_in<W, B, C>(
    writer: &mut W,
    clock: &mut Punchclock<B>,
    name: &TimerName,
    now: NaiveDateTime,
    confirm: &mut C,
) -> Result<()>
where
    W: Write,
    B: Backend,
    C: Confirm + ?Sized,
{
    match clock.clock_in(name, now, confirm) {
        Ok(ClockedIn::Created) => writeln!(writer, "Created {name}. Clocked in!")?,
        Ok(ClockedIn::Resumed) => writeln!(writer, "Clocked in!")?,
        Ok(ClockedIn::Declined) => writeln!(writer, "{name} was not created.")?,
        Err(err) if err.is_user_facing() => writeln!(writer, "{}", capitalize(&err.to_string()))?,
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Clocks out of `name` and reports the elapsed time.
pub fn clock_out<W: Write, B: Backend>(
    writer: &mut W,
    clock: &mut Punchclock<B>,
    name: &TimerName,
    now: NaiveDateTime,
) -> Result<()> {
    match clock.clock_out(name, now) {
        Ok(elapsed) => {
            writeln!(writer, "Clocked out!")?;
            writeln!(writer, "elapsed time: {}", format_elapsed(elapsed))?;
        }
        Err(PunchclockError::Clock(err @ ClockError::InvalidInterval { .. })) => {
            writeln!(writer, "Clocked out!")?;
            writeln!(writer, "warning: {err}, counting this entry as zero")?;
            writeln!(writer, "elapsed time: {}", format_elapsed(Duration::zero()))?;
        }
        Err(err) if err.is_user_facing() => writeln!(writer, "{}", capitalize(&err.to_string()))?,
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
