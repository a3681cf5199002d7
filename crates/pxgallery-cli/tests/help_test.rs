use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn pxgallery() -> Command {
    Command::cargo_bin("pxgallery").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    pxgallery()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("build")
                .and(predicate::str::contains("sessions"))
                .and(predicate::str::contains("scan"))
                .and(predicate::str::contains("init"))
                .and(predicate::str::contains("--log-level")),
        );
}

#[test]
fn test_build_help_lists_overrides() {
    pxgallery()
        .args(["build", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--threshold")
                .and(predicate::str::contains("--source"))
                .and(predicate::str::contains("--output"))
                .and(predicate::str::contains("--no-media")),
        );
}

#[test]
fn test_view_mode_flags_conflict() {
    pxgallery()
        .args(["sessions", "--quiet", "--verbose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_missing_command_is_an_error() {
    pxgallery().assert().failure();
}
