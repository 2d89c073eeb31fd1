//! Punch entries: one clock-in/clock-out pair, possibly still running.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use serde::ser::SerializeSeq;
use thiserror::Error;

/// A single clock-in interval.
///
/// The open/closed distinction is carried by the variant, so an entry can
/// never hold zero or three timestamps once it has been constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunchEntry {
    /// Clocked in, not yet clocked out.
    Open { start: NaiveDateTime },
    /// A completed interval.
    Closed {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// A stored entry sequence that violates the open/closed layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorruptEntry {
    /// The raw entry did not hold one or two timestamps.
    #[error("entry {index} has {len} timestamps, expected 1 or 2")]
    StampCount { index: usize, len: usize },

    /// An open entry appeared before the end of the sequence.
    #[error("entry {index} is still open but later entries follow it")]
    OpenNotLast { index: usize },
}

impl PunchEntry {
    /// Creates an open entry starting at `start`.
    pub const fn open(start: NaiveDateTime) -> Self {
        Self::Open { start }
    }

    /// Returns when the entry was clocked in.
    pub const fn start(&self) -> NaiveDateTime {
        match *self {
            Self::Open { start } | Self::Closed { start, .. } => start,
        }
    }

    /// Returns when the entry was clocked out, if it has been.
    pub const fn end(&self) -> Option<NaiveDateTime> {
        match *self {
            Self::Open { .. } => None,
            Self::Closed { end, .. } => Some(end),
        }
    }

    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Returns the end, substituting `now` for an open entry.
    pub fn end_or(&self, now: NaiveDateTime) -> NaiveDateTime {
        self.end().unwrap_or(now)
    }

    /// Raw `end - start`, using `now` as the end of an open entry.
    ///
    /// Negative when the clock moved backwards between clock-in and clock-out.
    pub fn elapsed(&self, now: NaiveDateTime) -> Duration {
        self.end_or(now) - self.start()
    }

    /// Builds an entry from its stored timestamp list.
    ///
    /// `index` is the entry's position in the sequence and is only used to
    /// describe the failure.
    pub fn from_stamps(stamps: &[NaiveDateTime], index: usize) -> Result<Self, CorruptEntry> {
        match *stamps {
            [start] => Ok(Self::Open { start }),
            [start, end] => Ok(Self::Closed { start, end }),
            _ => Err(CorruptEntry::StampCount {
                index,
                len: stamps.len(),
            }),
        }
    }

    /// Returns the stored timestamp list: `[start]` or `[start, end]`.
    pub fn to_stamps(&self) -> Vec<NaiveDateTime> {
        match *self {
            Self::Open { start } => vec![start],
            Self::Closed { start, end } => vec![start, end],
        }
    }
}

impl Serialize for PunchEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let stamps = self.to_stamps();
        let mut seq = serializer.serialize_seq(Some(stamps.len()))?;
        for stamp in &stamps {
            seq.serialize_element(stamp)?;
        }
        seq.end()
    }
}
