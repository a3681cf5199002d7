use pxgallery_testing::{TestWorld, fixtures};

#[test]
fn test_scan_reports_every_file_with_reason() {
    let world = fixtures::NOISE
        .iter()
        .fold(TestWorld::new(), |w, name| w.with_file(name, b"x"))
        .with_photo(&fixtures::pxl_name("20240605", "090000"));

    let result = world.run(&["--format", "json", "scan"]).unwrap();
    assert!(result.success(), "scan failed: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["timestamped_count"], 1);
    assert_eq!(json["content"]["skipped_count"], 4);

    let entries = json["content"]["entries"].as_array().unwrap();
    let reason = |name: &str| {
        entries
            .iter()
            .find(|e| e["name"] == name)
            .and_then(|e| e["skip_reason"].as_str())
            .map(str::to_string)
    };

    assert_eq!(reason("IMG_0001.jpg").as_deref(), Some("unrecognized prefix"));
    assert_eq!(
        reason("PXL_20240605.jpg").as_deref(),
        Some("missing date/time segments")
    );
    assert_eq!(
        reason("PXL_20241305_090000000.jpg").as_deref(),
        Some("invalid date token")
    );
    assert_eq!(reason("notes.txt").as_deref(), Some("unsupported extension"));
    assert_eq!(reason("PXL_20240605_090000000.jpg"), None);
}

#[test]
fn test_scan_plain_output() {
    let world = TestWorld::new()
        .with_file("PXL_20240605_090000000.jpg", b"x")
        .with_file("notes.txt", b"x");

    let result = world.run(&["scan", "--compact"]).unwrap();

    assert!(result.success());
    insta::assert_snapshot!(result.stdout(), @r"
    ℹ️ Found 1 timestamped photo

      PXL_20240605_090000000.jpg  2024-06-05 09:00:00
      notes.txt                   skipped: unsupported extension

    💡 Tips:
      • Group them into sessions: pxgallery sessions
    ");
}

#[test]
fn test_scan_succeeds_when_nothing_matches() {
    let world = TestWorld::new().with_file("IMG_0001.jpg", b"x");

    let result = world.run(&["--format", "json", "scan"]).unwrap();

    assert!(result.success());
    let json = result.json().unwrap();
    assert_eq!(json["badge"]["level"], "warning");
    assert_eq!(json["content"]["timestamped_count"], 0);
}
