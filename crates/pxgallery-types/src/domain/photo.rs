use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A photo whose capture time was recovered from its filename.
///
/// Timestamps are wall-clock times as the camera wrote them; no zone is
/// attached. Records are ordered by timestamp first and identifier second,
/// so sorting a listing is deterministic even when two shots share a second.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub timestamp: NaiveDateTime,
    pub identifier: String,
}

impl PhotoRecord {
    pub fn new(identifier: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            identifier: identifier.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 5)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_orders_by_timestamp_then_identifier() {
        let mut records = vec![
            PhotoRecord::new("b.jpg", at(9, 0, 0)),
            PhotoRecord::new("c.jpg", at(8, 59, 59)),
            PhotoRecord::new("a.jpg", at(9, 0, 0)),
        ];
        records.sort();

        let names: Vec<_> = records.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(names, vec!["c.jpg", "a.jpg", "b.jpg"]);
    }
}
