mod builder;
mod config;
mod labels;

pub use config::{ClusterConfig, DEFAULT_THRESHOLD_MINUTES};
pub use labels::{LABEL_DATE_FORMAT, SessionLabeler};

use builder::SessionBuilder;
use pxgallery_types::{PhotoRecord, SessionMap};

/// Sort records chronologically; ties fall back to the identifier.
pub fn sort_records(records: &mut [PhotoRecord]) {
    records.sort();
}

/// Partition time-sorted records into sessions.
///
/// A new session starts whenever the gap to the previous photo is strictly
/// greater than the configured threshold. Each closed session is labeled with
/// the date of its last photo and a per-date ordinal.
///
/// Empty input yields an empty map. Unsorted input is not rejected; negative
/// gaps simply never split, so the grouping stays deterministic.
pub fn cluster_sessions(records: &[PhotoRecord], config: &ClusterConfig) -> SessionMap {
    let mut sessions = SessionMap::new();
    let mut labeler = SessionLabeler::new();

    let mut iter = records.iter();
    let Some(first) = iter.next() else {
        return sessions;
    };

    let mut current = SessionBuilder::new(first.clone());

    for record in iter {
        let gap = record.timestamp - current.last_time();

        if config.splits(gap) {
            let closed = std::mem::replace(&mut current, SessionBuilder::new(record.clone()));
            sessions.push(closed.close(&mut labeler));
        } else {
            current.push(record.clone());
        }
    }

    sessions.push(current.close(&mut labeler));

    tracing::debug!(
        photos = records.len(),
        sessions = sessions.len(),
        threshold_minutes = config.threshold.num_minutes(),
        "clustered photos into sessions"
    );

    sessions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 5)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let sessions = cluster_sessions(&[], &ClusterConfig::default());
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_single_photo_is_one_session() {
        let records = vec![PhotoRecord::new("A", at(9, 0))];
        let sessions = cluster_sessions(&records, &ClusterConfig::default());

        assert_eq!(sessions.len(), 1);
        assert_eq!(
            sessions.labels().collect::<Vec<_>>(),
            vec!["June 05, 2024 - Session 1"]
        );
    }

    #[test]
    fn test_triggering_photo_opens_next_session_once() {
        let records = vec![
            PhotoRecord::new("A", at(9, 0)),
            PhotoRecord::new("B", at(9, 10)),
            PhotoRecord::new("C", at(10, 0)),
        ];
        let sessions = cluster_sessions(&records, &ClusterConfig::default());

        let groups: Vec<Vec<&str>> = sessions.iter().map(|s| s.identifiers().collect()).collect();
        assert_eq!(groups, vec![vec!["A", "B"], vec!["C"]]);
    }

    #[test]
    fn test_unsorted_input_is_deterministic() {
        let records = vec![
            PhotoRecord::new("C", at(10, 0)),
            PhotoRecord::new("A", at(9, 0)),
            PhotoRecord::new("B", at(11, 0)),
        ];
        let first = cluster_sessions(&records, &ClusterConfig::default());
        let second = cluster_sessions(&records, &ClusterConfig::default());

        assert_eq!(first, second);
        assert_eq!(first.photo_count(), 3);
    }

    #[test]
    fn test_sort_records_breaks_ties_by_identifier() {
        let mut records = vec![
            PhotoRecord::new("b", at(9, 0)),
            PhotoRecord::new("a", at(9, 0)),
        ];
        sort_records(&mut records);
        assert_eq!(records[0].identifier, "a");
    }
}
