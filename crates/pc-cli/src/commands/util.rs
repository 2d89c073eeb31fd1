//! Shared utilities for CLI commands.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime};
use pc_store::{DirBackend, IntervalStore, Punchclock};

use crate::Config;

/// Time of day as shown in charts, e.g. `09:30 PM`.
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Day label as shown in charts, e.g. `Mon 2024/01/01`.
pub const DAY_LABEL_FORMAT: &str = "%a %Y/%m/%d";

/// Opens the punchclock store under the configured storage root.
pub fn open_punchclock(config: &Config) -> Result<Punchclock<DirBackend>> {
    let backend = DirBackend::open(&config.storage_root).with_context(|| {
        format!(
            "failed to open storage at {}",
            config.storage_root.display()
        )
    })?;
    Ok(Punchclock::new(IntervalStore::new(backend)))
}

/// Formats a timestamp as ISO 8601, e.g. `2024-01-01T09:00:00.250`.
pub fn format_stamp(stamp: NaiveDateTime) -> String {
    stamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// Formats a duration as `H:MM:SS`, prefixed with whole days when there are any.
///
/// Sub-second precision is dropped.
pub fn format_elapsed(elapsed: Duration) -> String {
    let sign = if elapsed < Duration::zero() { "-" } else { "" };
    let total = elapsed.num_seconds().unsigned_abs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    match days {
        0 => format!("{sign}{hours}:{minutes:02}:{seconds:02}"),
        1 => format!("{sign}1 day, {hours}:{minutes:02}:{seconds:02}"),
        _ => format!("{sign}{days} days, {hours}:{minutes:02}:{seconds:02}"),
    }
}
