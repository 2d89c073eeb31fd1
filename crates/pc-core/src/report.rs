//! Date windows over day buckets, ready for plotting.

use std::num::NonZeroU32;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::bucket::{DayBuckets, DaySpan};

/// One day of a report: the date and whatever was worked on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRow {
    pub date: NaiveDate,
    pub spans: Vec<DaySpan>,
}

impl DayRow {
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Rows for every day from `start` to `end` inclusive.
///
/// A reversed range is swapped. With `skip_empty`, days without spans are left out.
pub fn date_range(
    buckets: &DayBuckets,
    start: NaiveDate,
    end: NaiveDate,
    skip_empty: bool,
) -> Vec<DayRow> {
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|date| DayRow {
            date,
            spans: buckets.get(date).map(<[DaySpan]>::to_vec).unwrap_or_default(),
        })
        .filter(|row| !(skip_empty && row.is_empty()))
        .collect()
}

/// The most recent window of `max_days` to report on.
///
/// With `skip_empty` the window covers the last `max_days` dates that have
/// activity (or all of them when there are fewer), and is `None` for an empty
/// history. Otherwise it ends `today` and starts `max_days` days before.
pub fn recent_window(
    buckets: &DayBuckets,
    max_days: NonZeroU32,
    skip_empty: bool,
    today: NaiveDate,
) -> Option<(NaiveDate, NaiveDate)> {
    if skip_empty {
        let end = buckets.last_date()?;
        let start = buckets
            .dates()
            .rev()
            .take(max_days.get() as usize)
            .last()
            .unwrap_or(end);
        return Some((start, end));
    }
    let start = today
        .checked_sub_days(Days::new(u64::from(max_days.get())))
        .unwrap_or(NaiveDate::MIN);
    Some((start, today))
}
