//! Conversion between a timer's history and its stored bytes.

use chrono::NaiveDateTime;
use pc_core::{PunchEntry, Timeline};

use crate::error::StoreError;

/// Encodes a history as a JSON array of timestamp arrays.
pub fn encode(entries: &[PunchEntry]) -> Result<Vec<u8>, StoreError> {
    Ok(serde_json::to_vec(entries)?)
}

/// Decodes stored bytes for the timer `name`.
///
/// Bytes that are not a list of timestamp lists fail with `Encoding`; a list
/// that breaks the entry layout fails with `Corrupt`.
pub fn decode(name: &str, bytes: &[u8]) -> Result<Timeline, StoreError> {
    let raw: Vec<Vec<NaiveDateTime>> = serde_json::from_slice(bytes)?;
    Timeline::from_stamps(&raw).map_err(|source| StoreError::Corrupt {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use pc_core::CorruptEntry;

    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").unwrap()
    }

    #[test]
    fn preserves_microseconds() {
        let entries = vec![
            PunchEntry::Closed {
                start: at("2024-01-01T09:00:00.123456"),
                end: at("2024-01-01T17:00:00.000001"),
            },
            PunchEntry::open(at("2024-01-02T08:59:59.999999")),
        ];
        let bytes = encode(&entries).unwrap();
        let timeline = decode("proj", &bytes).unwrap();
        assert_eq!(timeline.entries(), entries.as_slice());
    }

    #[test]
    fn empty_history_roundtrips() {
        let bytes = encode(&[]).unwrap();
        assert_eq!(bytes, b"[]");
        assert!(decode("proj", &bytes).unwrap().is_empty());
    }

    #[test]
    fn rejects_wrong_stamp_count() {
        let bytes = br#"[["2024-01-01T09:00:00","2024-01-01T10:00:00","2024-01-01T11:00:00"]]"#;
        let err = decode("proj", bytes).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Corrupt {
                source: CorruptEntry::StampCount { index: 0, len: 3 },
                ..
            }
        ));
    }

    #[test]
    fn rejects_open_entry_in_the_middle() {
        let bytes = br#"[["2024-01-01T09:00:00"],["2024-01-02T09:00:00","2024-01-02T10:00:00"]]"#;
        let err = decode("proj", bytes).unwrap_err();
        assert_eq!(
            err.to_string(),
            "corrupt history for \"proj\": entry 0 is still open but later entries follow it"
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            decode("proj", b"not json"),
            Err(StoreError::Encoding(_))
        ));
        assert!(matches!(
            decode("proj", br#"[["yesterday"]]"#),
            Err(StoreError::Encoding(_))
        ));
    }
}
