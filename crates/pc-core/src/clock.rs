//! Clock state machine.
//!
//! A timer is `OPEN` when its last entry has a start but no end, and `CLOSED`
//! otherwise (including an empty history). Clock-in is only accepted while
//! closed and clock-out only while open, so the stored sequence always
//! alternates in/out.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::aggregate::total_since;
use crate::bucket::{DayBuckets, bucketize};
use crate::entry::{CorruptEntry, PunchEntry};

/// The two user actions on a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    ClockIn,
    ClockOut,
}

impl Transition {
    /// User-facing explanation for why this transition was refused.
    pub const fn rejection(self) -> &'static str {
        match self {
            Self::ClockIn => "you need to clock out before you clock back in",
            Self::ClockOut => "you need to clock in before you clock back out",
        }
    }
}

/// Errors from the clock state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// Clock-in while open or clock-out while closed. Nothing was changed.
    #[error("{}", .attempted.rejection())]
    InvalidTransition { attempted: Transition },

    /// The entry was closed with an end before its start.
    ///
    /// The interval has still been recorded; reporting treats it as zero time.
    #[error("clock-out at {end} is before clock-in at {start}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// The stored history does not describe a valid entry sequence.
    #[error("corrupt timer history: {0}")]
    CorruptState(#[from] CorruptEntry),
}

impl ClockError {
    /// Returns true for errors the user can recover from without touching storage.
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidTransition { .. } | Self::InvalidInterval { .. }
        )
    }
}

/// Snapshot of a timer's most recent entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The timer has no entries.
    Empty,
    /// Clocked in since `start`.
    Open {
        start: NaiveDateTime,
        elapsed: Duration,
    },
    /// Last interval ran from `start` to `end`.
    Closed {
        start: NaiveDateTime,
        end: NaiveDateTime,
        elapsed: Duration,
    },
}

/// A timer's validated entry history.
///
/// Only the last entry may be open; entries are kept in append order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<PunchEntry>,
}

impl Timeline {
    /// Wraps an entry sequence, rejecting an open entry anywhere but last.
    pub fn new(entries: Vec<PunchEntry>) -> Result<Self, CorruptEntry> {
        let last = entries.len().saturating_sub(1);
        if let Some(index) = entries
            .iter()
            .take(last)
            .position(PunchEntry::is_open)
        {
            return Err(CorruptEntry::OpenNotLast { index });
        }
        Ok(Self { entries })
    }

    /// Builds a timeline from stored timestamp lists.
    pub fn from_stamps(raw: &[Vec<NaiveDateTime>]) -> Result<Self, CorruptEntry> {
        let entries = raw
            .iter()
            .enumerate()
            .map(|(index, stamps)| PunchEntry::from_stamps(stamps, index))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// A brand-new timer history: a single open entry starting at `now`.
    pub fn started(now: NaiveDateTime) -> Self {
        Self {
            entries: vec![PunchEntry::open(now)],
        }
    }

    pub fn entries(&self) -> &[PunchEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&PunchEntry> {
        self.entries.last()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the last entry is still running.
    pub fn is_open(&self) -> bool {
        self.last().is_some_and(PunchEntry::is_open)
    }

    /// Describes the most recent entry, measuring an open one up to `now`.
    pub fn status(&self, now: NaiveDateTime) -> Status {
        match self.last() {
            None => Status::Empty,
            Some(&PunchEntry::Open { start }) => Status::Open {
                start,
                elapsed: now - start,
            },
            Some(&PunchEntry::Closed { start, end }) => Status::Closed {
                start,
                end,
                elapsed: end - start,
            },
        }
    }

    /// Appends a new open entry. Rejected while already clocked in.
    pub fn clock_in(&mut self, now: NaiveDateTime) -> Result<(), ClockError> {
        if self.is_open() {
            return Err(ClockError::InvalidTransition {
                attempted: Transition::ClockIn,
            });
        }
        self.entries.push(PunchEntry::open(now));
        tracing::debug!(%now, entries = self.entries.len(), "clocked in");
        Ok(())
    }

    /// Closes the running entry and returns its duration.
    ///
    /// Rejected while clocked out. When `now` is before the entry's start the
    /// entry is still closed, and `InvalidInterval` is returned so the caller
    /// can persist the change and then report it.
    pub fn clock_out(&mut self, now: NaiveDateTime) -> Result<Duration, ClockError> {
        let Some(last) = self.entries.last_mut() else {
            return Err(ClockError::InvalidTransition {
                attempted: Transition::ClockOut,
            });
        };
        let PunchEntry::Open { start } = *last else {
            return Err(ClockError::InvalidTransition {
                attempted: Transition::ClockOut,
            });
        };

        *last = PunchEntry::Closed { start, end: now };
        if now < start {
            tracing::warn!(%start, end = %now, "clock moved backwards, interval recorded as zero");
            return Err(ClockError::InvalidInterval { start, end: now });
        }
        tracing::debug!(%start, end = %now, "clocked out");
        Ok(now - start)
    }

    /// Per-date time-of-day spans, with an open entry running until `now`.
    pub fn buckets(&self, now: NaiveDateTime) -> DayBuckets {
        bucketize(&self.entries, now)
    }

    /// Total time on or after `since`.
    pub fn total_since(&self, since: NaiveDate, now: NaiveDateTime) -> Duration {
        total_since(&self.buckets(now), since)
    }
}
