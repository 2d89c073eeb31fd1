//! Plot commands: a per-day chart of when a clock was running.
//!
//! Each day is one row with a 48-cell bar, one cell per half hour, followed by
//! the spans worked that day.

use std::io::Write;
use std::num::NonZeroU32;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use pc_core::{DayBuckets, DayRow, DaySpan, SpanEnd, TimerName, date_range, recent_window};
use pc_store::{Backend, Punchclock};
use serde::Serialize;

use super::util::{DAY_LABEL_FORMAT, TIME_FORMAT};

const CELLS: u32 = 48;
const CELL_SECONDS: u32 = 86_400 / CELLS;
const LABEL_WIDTH: usize = 14;
const AXIS: &str = "0           6           12          18";

/// How to lay out a chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotOptions {
    /// Leave out days with nothing recorded.
    pub skip_empty: bool,
    /// Print the chart data as JSON instead of drawing it.
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Chart<'a> {
    name: &'a TimerName,
    start: NaiveDate,
    end: NaiveDate,
    days: &'a [DayRow],
}

/// Charts the most recent `max_days` of `name`.
pub fn recent<W: Write, B: Backend>(
    writer: &mut W,
    clock: &Punchclock<B>,
    name: &TimerName,
    max_days: NonZeroU32,
    options: PlotOptions,
    now: NaiveDateTime,
) -> Result<()> {
    let buckets = clock.buckets(name, now)?;
    let Some((start, end)) = recent_window(&buckets, max_days, options.skip_empty, now.date())
    else {
        writeln!(writer, "Nothing recorded in {name} yet.")?;
        return Ok(());
    };
    render(writer, name, &buckets, start, end, options)
}

/// Charts `name` from `start` to `end` inclusive.
pub fn between<W: Write, B: Backend>(
    writer: &mut W,
    clock: &Punchclock<B>,
    name: &TimerName,
    (start, end): (NaiveDate, NaiveDate),
    options: PlotOptions,
    now: NaiveDateTime,
) -> Result<()> {
    let buckets = clock.buckets(name, now)?;
    render(writer, name, &buckets, start, end, options)
}

fn render<W: Write>(
    writer: &mut W,
    name: &TimerName,
    buckets: &DayBuckets,
    start: NaiveDate,
    end: NaiveDate,
    options: PlotOptions,
) -> Result<()> {
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    let rows = date_range(buckets, start, end, options.skip_empty);

    if options.json {
        let chart = Chart {
            name,
            start,
            end,
            days: &rows,
        };
        serde_json::to_writer_pretty(&mut *writer, &chart)?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(
        writer,
        "{name} punchclock {} - {}",
        start.format(DAY_LABEL_FORMAT),
        end.format(DAY_LABEL_FORMAT)
    )?;
    writeln!(writer, "{:LABEL_WIDTH$}  {AXIS}", "")?;
    for row in &rows {
        let line = format!(
            "{:LABEL_WIDTH$} |{}| {}",
            row.date.format(DAY_LABEL_FORMAT).to_string(),
            bar(&row.spans),
            span_labels(&row.spans)
        );
        writeln!(writer, "{}", line.trim_end())?;
    }
    Ok(())
}

fn bar(spans: &[DaySpan]) -> String {
    (0..CELLS)
        .map(|cell| {
            let (cell_start, cell_end) = (cell * CELL_SECONDS, (cell + 1) * CELL_SECONDS);
            let filled = spans.iter().any(|span| {
                let (start, end) = span_seconds(span);
                start < cell_end && end > cell_start
            });
            if filled { '█' } else { '·' }
        })
        .collect()
}

fn span_seconds(span: &DaySpan) -> (u32, u32) {
    let end = match span.end {
        SpanEnd::At(end) => end.num_seconds_from_midnight(),
        SpanEnd::Midnight => 86_400,
    };
    (span.start.num_seconds_from_midnight(), end)
}

fn span_labels(spans: &[DaySpan]) -> String {
    spans
        .iter()
        .map(|span| {
            format!(
                "{} - {}",
                span.start.format(TIME_FORMAT),
                span.end_time().format(TIME_FORMAT)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
