//! Total command: time clocked since a date.

use std::io::Write;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use pc_core::TimerName;
use pc_store::{Backend, Punchclock};

use super::util::format_elapsed;

pub fn run<W: Write, B: Backend>(
    writer: &mut W,
    clock: &Punchclock<B>,
    name: &TimerName,
    since: NaiveDate,
    now: NaiveDateTime,
) -> Result<()> {
    let total = clock.total_since(name, since, now)?;
    writeln!(
        writer,
        "Total time elapsed in {name} since {since}: {}",
        format_elapsed(total)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pc_core::{PunchEntry, Timeline};
    use pc_store::{IntervalStore, MemoryBackend};

    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn total(since: &str) -> String {
        let name = TimerName::new("proj").unwrap();
        let mut store = IntervalStore::new(MemoryBackend::new());
        let timeline = Timeline::new(vec![
            PunchEntry::Closed {
                start: at("2024-01-01T09:00:00"),
                end: at("2024-01-03T09:00:00"),
            },
            PunchEntry::open(at("2024-01-04T08:00:00")),
        ])
        .unwrap();
        store.save(&name, &timeline).unwrap();
        let clock = Punchclock::new(store);

        let mut output = Vec::new();
        let since = NaiveDate::parse_from_str(since, "%Y-%m-%d").unwrap();
        run(&mut output, &clock, &name, since, at("2024-01-04T10:30:00")).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn totals_whole_history() {
        assert_snapshot!(total("2024-01-01"), @"Total time elapsed in proj since 2024-01-01: 2 days, 2:30:00");
    }

    #[test]
    fn totals_from_the_middle_of_a_split_entry() {
        assert_snapshot!(total("2024-01-02"), @"Total time elapsed in proj since 2024-01-02: 1 day, 11:30:00");
    }

    #[test]
    fn totals_after_everything_is_zero() {
        assert_snapshot!(total("2024-02-01"), @"Total time elapsed in proj since 2024-02-01: 0:00:00");
    }
}
