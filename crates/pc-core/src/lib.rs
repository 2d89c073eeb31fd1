//! Core domain logic for punchclock timers.
//!
//! This crate contains the fundamental types and logic for:
//! - Entries: open/closed clock-in intervals and their validated sequence
//! - Clock state machine: in/out alternation on a timer's history
//! - Day buckets: splitting entries into per-date time-of-day spans
//! - Totals: summing bucketed time since a calendar date
//! - Report windows: date ranges handed to a plotting layer

mod aggregate;
pub mod bucket;
pub mod clock;
pub mod date;
pub mod entry;
pub mod report;
pub mod types;

pub use aggregate::total_since;
pub use bucket::{DayBuckets, DaySpan, SpanEnd, bucketize};
pub use clock::{ClockError, Status, Timeline, Transition};
pub use date::{DateParseError, now, parse_date};
pub use entry::{CorruptEntry, PunchEntry};
pub use report::{DayRow, date_range, recent_window};
pub use types::{TimerName, ValidationError};
