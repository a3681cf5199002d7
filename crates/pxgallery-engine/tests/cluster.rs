use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use pxgallery_engine::{
    ClusterConfig, NamingConvention, cluster_sessions, group_photos, sessions_from_names,
    sort_records,
};
use pxgallery_types::{PhotoRecord, SessionMap};

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 5)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn photo(name: &str, offset: TimeDelta) -> PhotoRecord {
    PhotoRecord::new(name, base_time() + offset)
}

fn groups(sessions: &SessionMap) -> Vec<Vec<String>> {
    sessions
        .iter()
        .map(|s| s.identifiers().map(str::to_string).collect())
        .collect()
}

/// A day of shooting with uneven gaps, including one exactly at the threshold.
fn irregular_day() -> Vec<PhotoRecord> {
    let offsets_minutes = [0, 2, 32, 33, 90, 91, 200, 230, 231, 600, 1500];
    offsets_minutes
        .iter()
        .enumerate()
        .map(|(i, m)| photo(&format!("p{:02}", i), TimeDelta::minutes(*m)))
        .collect()
}

#[test]
fn test_three_photo_scenario() {
    let records = vec![
        photo("A", TimeDelta::zero()),
        photo("B", TimeDelta::minutes(10)),
        photo("C", TimeDelta::minutes(60)),
    ];

    let sessions = cluster_sessions(&records, &ClusterConfig::default());

    assert_eq!(groups(&sessions), vec![vec!["A", "B"], vec!["C"]]);
    insta::assert_debug_snapshot!(sessions.labels().collect::<Vec<_>>(), @r###"
    [
        "June 05, 2024 - Session 1",
        "June 05, 2024 - Session 2",
    ]
    "###);
}

#[test]
fn test_photos_within_five_minutes_form_one_session() {
    let records: Vec<_> = (0..6)
        .map(|i| photo(&format!("shot{}", i), TimeDelta::seconds(i * 55)))
        .collect();

    let sessions = cluster_sessions(&records, &ClusterConfig::default());

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions.photo_count(), 6);
}

#[test]
fn test_gap_equal_to_threshold_does_not_split() {
    let records = vec![
        photo("A", TimeDelta::zero()),
        photo("B", TimeDelta::minutes(30)),
    ];

    let sessions = cluster_sessions(&records, &ClusterConfig::default());

    assert_eq!(groups(&sessions), vec![vec!["A", "B"]]);
}

#[test]
fn test_gap_just_over_threshold_splits() {
    let records = vec![
        photo("A", TimeDelta::zero()),
        photo("B", TimeDelta::minutes(30) + TimeDelta::seconds(1)),
    ];

    let sessions = cluster_sessions(&records, &ClusterConfig::default());

    assert_eq!(groups(&sessions), vec![vec!["A"], vec!["B"]]);
}

#[test]
fn test_isolated_photo_is_its_own_session() {
    let records = vec![
        photo("A", TimeDelta::zero()),
        photo("B", TimeDelta::minutes(5)),
        photo("lonely", TimeDelta::minutes(120)),
        photo("C", TimeDelta::minutes(240)),
        photo("D", TimeDelta::minutes(241)),
    ];

    let sessions = cluster_sessions(&records, &ClusterConfig::default());

    assert_eq!(
        groups(&sessions),
        vec![vec!["A", "B"], vec!["lonely"], vec!["C", "D"]]
    );
}

#[test]
fn test_labels_across_two_dates() {
    let records = vec![
        photo("A", TimeDelta::zero()),
        photo("B", TimeDelta::days(1)),
    ];

    let sessions = cluster_sessions(&records, &ClusterConfig::default());

    assert_eq!(
        sessions.labels().collect::<Vec<_>>(),
        vec!["June 05, 2024 - Session 1", "June 06, 2024 - Session 1"]
    );
}

#[test]
fn test_three_sessions_same_date_numbered_chronologically() {
    let records = vec![
        photo("A", TimeDelta::zero()),
        photo("B", TimeDelta::hours(2)),
        photo("C", TimeDelta::hours(4)),
    ];

    let sessions = cluster_sessions(&records, &ClusterConfig::default());

    assert_eq!(
        sessions.labels().collect::<Vec<_>>(),
        vec![
            "June 05, 2024 - Session 1",
            "June 05, 2024 - Session 2",
            "June 05, 2024 - Session 3",
        ]
    );
}

#[test]
fn test_midnight_session_counts_toward_closing_date() {
    // The 23:50 -> 00:10 session closes on June 6, so the later June 6
    // session becomes number two.
    let records = vec![
        photo("A", TimeDelta::zero()),
        photo("B", TimeDelta::hours(14) + TimeDelta::minutes(50)),
        photo("C", TimeDelta::hours(15) + TimeDelta::minutes(10)),
        photo("D", TimeDelta::hours(20)),
    ];

    let sessions = cluster_sessions(&records, &ClusterConfig::default());

    assert_eq!(
        sessions.labels().collect::<Vec<_>>(),
        vec![
            "June 05, 2024 - Session 1",
            "June 06, 2024 - Session 1",
            "June 06, 2024 - Session 2",
        ]
    );
    assert_eq!(groups(&sessions)[1], vec!["B", "C"]);
}

#[test]
fn test_label_uses_date_of_last_photo() {
    // 23:50 -> 00:10 stays together and is filed under the later date.
    let records = vec![
        photo("late", TimeDelta::hours(14) + TimeDelta::minutes(50)),
        photo("early", TimeDelta::hours(15) + TimeDelta::minutes(10)),
    ];

    let sessions = cluster_sessions(&records, &ClusterConfig::default());

    assert_eq!(
        sessions.labels().collect::<Vec<_>>(),
        vec!["June 06, 2024 - Session 1"]
    );
}

#[test]
fn test_partition_and_gap_invariants() {
    let records = irregular_day();
    let config = ClusterConfig::default();

    let sessions = cluster_sessions(&records, &config);

    // Every record appears exactly once, in order.
    let flattened: Vec<PhotoRecord> = sessions
        .iter()
        .flat_map(|s| s.photos.iter().cloned())
        .collect();
    assert_eq!(flattened, records);

    // Within a session gaps never exceed the threshold.
    for session in &sessions {
        assert!(!session.is_empty());
        for pair in session.photos.windows(2) {
            assert!(pair[1].timestamp - pair[0].timestamp <= config.threshold);
        }
    }

    // Across boundaries gaps always exceed it.
    for pair in sessions.as_slice().windows(2) {
        let gap = pair[1].start().unwrap() - pair[0].end().unwrap();
        assert!(gap > config.threshold);
    }

    // Labels are unique.
    let mut labels: Vec<_> = sessions.labels().collect();
    let total = labels.len();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), total);
}

#[test]
fn test_irregular_day_grouping() {
    let sessions = cluster_sessions(&irregular_day(), &ClusterConfig::default());

    assert_eq!(
        groups(&sessions),
        vec![
            vec!["p00", "p01", "p02", "p03"],
            vec!["p04", "p05"],
            vec!["p06", "p07", "p08"],
            vec!["p09"],
            vec!["p10"],
        ]
    );
}

#[test]
fn test_clustering_is_idempotent() {
    let records = irregular_day();
    let config = ClusterConfig::default();

    let first = cluster_sessions(&records, &config);
    let second = cluster_sessions(&records, &config);

    assert_eq!(first, second);
}

#[test]
fn test_threshold_is_configurable() {
    let records = irregular_day();

    let tight = cluster_sessions(&records, &ClusterConfig::from_minutes(1));
    let loose = cluster_sessions(&records, &ClusterConfig::from_minutes(24 * 60));

    assert_eq!(tight.len(), 8);
    assert_eq!(loose.len(), 1);
}

#[test]
fn test_group_photos_sorts_first() {
    let mut shuffled = irregular_day();
    shuffled.reverse();

    let sessions = group_photos(shuffled, &ClusterConfig::default());

    let mut expected = irregular_day();
    sort_records(&mut expected);
    assert_eq!(sessions, cluster_sessions(&expected, &ClusterConfig::default()));
}

#[test]
fn test_malformed_names_excluded_from_listing() {
    let names = [
        "PXL_20240605_090000000.jpg",
        "PXL_20240605.jpg",
        "PXL_20240605_091000000.jpg",
        "IMG_20240605_091500.jpg",
        "PXL_20240605_100000000.JPG",
        "README.md",
    ];

    let sessions = sessions_from_names(
        names,
        &NamingConvention::default(),
        &ClusterConfig::default(),
    );

    assert_eq!(
        groups(&sessions),
        vec![
            vec!["PXL_20240605_090000000.jpg", "PXL_20240605_091000000.jpg"],
            vec!["PXL_20240605_100000000.JPG"],
        ]
    );
}
