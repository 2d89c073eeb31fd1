//! Day bucketing.
//!
//! Converts a timer's entries into a mapping from calendar date to the
//! time-of-day spans worked on that date. Entries crossing midnight are split:
//! the first date runs to the end of the day, every date strictly in between
//! is a full day, and the last date starts at midnight.
//!
//! Buckets are a derived view. They are rebuilt from the entries on every
//! query and never stored.

use std::collections::BTreeMap;
use std::collections::btree_map;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::entry::PunchEntry;

/// The latest representable time of day, 23:59:59.999999.
pub fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap()
}

/// Where a span stops within its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanEnd {
    /// Stopped at this time of day.
    At(NaiveTime),
    /// Ran until the end of the day.
    Midnight,
}

impl Serialize for SpanEnd {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::At(time) => time.serialize(serializer),
            Self::Midnight => serializer.serialize_str("24:00:00"),
        }
    }
}

/// A span of activity within a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DaySpan {
    pub start: NaiveTime,
    pub end: SpanEnd,
}

impl DaySpan {
    pub const fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end: SpanEnd::At(end),
        }
    }

    /// From `start` until the end of the day.
    pub const fn until_midnight(start: NaiveTime) -> Self {
        Self {
            start,
            end: SpanEnd::Midnight,
        }
    }

    /// Midnight to midnight.
    pub const fn full_day() -> Self {
        Self::until_midnight(NaiveTime::MIN)
    }

    /// The end as a time of day; a span running to midnight ends at 23:59:59.999999.
    pub fn end_time(&self) -> NaiveTime {
        match self.end {
            SpanEnd::At(end) => end,
            SpanEnd::Midnight => end_of_day(),
        }
    }

    /// Length of the span, never negative.
    ///
    /// A span running to midnight measures up to 24:00, so a split entry's
    /// spans add up to exactly its original length.
    pub fn duration(&self) -> Duration {
        let raw = match self.end {
            SpanEnd::At(end) => end - self.start,
            SpanEnd::Midnight => Duration::days(1) - (self.start - NaiveTime::MIN),
        };
        raw.max(Duration::zero())
    }
}

/// Per-date spans of activity, ordered by date.
///
/// Dates without activity are absent; a present date always has at least one span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DayBuckets(BTreeMap<NaiveDate, Vec<DaySpan>>);

impl DayBuckets {
    pub fn get(&self, date: NaiveDate) -> Option<&[DaySpan]> {
        self.0.get(&date).map(Vec::as_slice)
    }

    /// Dates and their spans in ascending date order.
    pub fn iter(&self) -> btree_map::Iter<'_, NaiveDate, Vec<DaySpan>> {
        self.0.iter()
    }

    /// Dates with activity in ascending order.
    pub fn dates(&self) -> impl DoubleEndedIterator<Item = NaiveDate> + '_ {
        self.0.keys().copied()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.0.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.0.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, date: NaiveDate, span: DaySpan) {
        self.0.entry(date).or_default().push(span);
    }
}

/// Splits `entries` into per-date spans.
///
/// An open entry is treated as ending at `now`. Within a date, spans appear in
/// entry order.
pub fn bucketize(entries: &[PunchEntry], now: NaiveDateTime) -> DayBuckets {
    let mut buckets = DayBuckets::default();
    for entry in entries {
        add_entry(&mut buckets, entry.start(), entry.end_or(now));
    }
    buckets
}

fn add_entry(buckets: &mut DayBuckets, start: NaiveDateTime, end: NaiveDateTime) {
    let (start_date, end_date) = (start.date(), end.date());

    if start_date == end_date {
        // A same-day regression keeps its reversed times; the span measures zero.
        buckets.push(start_date, DaySpan::new(start.time(), end.time()));
        return;
    }

    if end < start {
        tracing::warn!(%start, %end, "entry ends before it starts, counting it as zero");
        buckets.push(start_date, DaySpan::new(start.time(), start.time()));
        return;
    }

    buckets.push(start_date, DaySpan::until_midnight(start.time()));
    for day in start_date
        .iter_days()
        .skip(1)
        .take_while(|day| *day < end_date)
    {
        buckets.push(day, DaySpan::full_day());
    }
    // Ending exactly at midnight leaves nothing on the last date.
    if end.time() != NaiveTime::MIN {
        buckets.push(end_date, DaySpan::new(NaiveTime::MIN, end.time()));
    }
}
