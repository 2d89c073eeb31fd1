//! Since-date totals over day buckets.

use chrono::{Duration, NaiveDate};

use crate::bucket::{DayBuckets, DaySpan};

/// Sums every span on or after `since`.
///
/// Dates are visited newest first and the walk stops at the first date before
/// `since`. Spans from clock regressions count as zero.
pub fn total_since(buckets: &DayBuckets, since: NaiveDate) -> Duration {
    buckets
        .iter()
        .rev()
        .take_while(|(date, _)| **date >= since)
        .flat_map(|(_, spans)| spans)
        .map(DaySpan::duration)
        .sum()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::bucket::bucketize;
    use crate::entry::PunchEntry;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn history() -> Vec<PunchEntry> {
        vec![
            PunchEntry::Closed {
                start: at("2024-01-01T09:00:00"),
                end: at("2024-01-01T17:00:00"),
            },
            PunchEntry::Closed {
                start: at("2024-01-02T22:00:00"),
                end: at("2024-01-03T02:00:00"),
            },
            PunchEntry::Closed {
                start: at("2024-01-05T10:00:00"),
                end: at("2024-01-05T11:30:00"),
            },
        ]
    }

    fn filtered_total(buckets: &DayBuckets, since: NaiveDate) -> Duration {
        buckets
            .iter()
            .filter(|(date, _)| **date >= since)
            .flat_map(|(_, spans)| spans)
            .map(DaySpan::duration)
            .sum()
    }

    #[test]
    fn counts_everything_from_the_first_date() {
        let buckets = bucketize(&history(), at("2024-02-01T00:00:00"));
        assert_eq!(
            total_since(&buckets, date("2024-01-01")),
            Duration::minutes(8 * 60 + 4 * 60 + 90)
        );
    }

    #[test]
    fn counts_only_the_part_of_a_split_entry_after_since() {
        let buckets = bucketize(&history(), at("2024-02-01T00:00:00"));
        assert_eq!(
            total_since(&buckets, date("2024-01-03")),
            Duration::minutes(2 * 60 + 90)
        );
    }

    #[test]
    fn since_after_all_entries_is_zero() {
        let buckets = bucketize(&history(), at("2024-02-01T00:00:00"));
        assert_eq!(total_since(&buckets, date("2024-01-06")), Duration::zero());
    }

    #[test]
    fn open_entry_counts_up_to_now() {
        let entries = vec![PunchEntry::open(at("2024-01-10T08:00:00"))];
        let buckets = bucketize(&entries, at("2024-01-10T08:45:00"));
        assert_eq!(
            total_since(&buckets, date("2024-01-10")),
            Duration::minutes(45)
        );
    }

    #[test]
    fn total_never_grows_as_since_moves_later() {
        let buckets = bucketize(&history(), at("2024-02-01T00:00:00"));
        let mut previous = Duration::MAX;
        for day in date("2023-12-30").iter_days().take(10) {
            let total = total_since(&buckets, day);
            assert!(total <= previous, "total grew at {day}");
            previous = total;
        }
    }

    #[test]
    fn early_exit_matches_a_full_filter() {
        let buckets = bucketize(&history(), at("2024-02-01T00:00:00"));
        for day in date("2023-12-30").iter_days().take(10) {
            assert_eq!(total_since(&buckets, day), filtered_total(&buckets, day));
        }
    }
}
