// tests/integration_test.rs
use std::process::Command;

use app_meta::{Field, Metadata, RawMetadata};
use chrono::{TimeZone, Utc};

fn app_meta() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_app-meta"));
    for field in Field::ALL {
        cmd.env_remove(field.env_var());
    }
    cmd.env_remove("APP_META_LOG");
    cmd
}

#[test]
fn test_app_meta_help() {
    let output = app_meta().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("app-meta"));
    assert!(stdout.contains("Validate and display build-time application metadata"));
}

#[test]
fn test_show_fixture() {
    let output = app_meta()
        .args(["--config", "tests/fixtures/appmeta.toml", "show"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Demo Application"));
    assert!(stdout.contains("bb2fecb"));
    assert!(stdout.contains("2019-08-23T18:00:00Z"));
    assert!(stdout.contains("rc.456"));
}

#[test]
fn test_get_field_and_default() {
    let output = app_meta()
        .args(["--config", "tests/fixtures/appmeta.toml", "get", "license"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "MIT");

    let output = app_meta()
        .args(["--config", "tests/fixtures/minimal.toml", "get", "title", "--default", "n/a"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "n/a");

    let output = app_meta()
        .args(["--config", "tests/fixtures/invalid.toml", "get", "name"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_get_prints_normalized_url() {
    let output = app_meta()
        .args(["get", "--help"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("normalized form"));

    let output = app_meta()
        .args(["--env", "--config", "tests/fixtures/minimal.toml", "get", "url"])
        .env("APP_META_URL", "https://example.com")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "https://example.com/");
}

#[test]
fn test_get_unknown_field_is_usage_error() {
    let output = app_meta()
        .args(["get", "homepage"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_date_with_layout() {
    let output = app_meta()
        .args([
            "--config",
            "tests/fixtures/appmeta.toml",
            "date",
            "--format",
            "%Y-%m-%d",
        ])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "2019-08-23");
}

#[test]
fn test_check_reports_every_invalid_field() {
    let output = app_meta()
        .args(["--config", "tests/fixtures/invalid.toml", "check"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("dev"));
    assert!(stderr.contains("0000000"));
    assert!(stderr.contains("example.com"));
}

#[test]
fn test_check_env_values() {
    let output = app_meta()
        .args(["--config", "tests/fixtures/appmeta.toml", "--env", "check"])
        .env("APP_META_SHA", "not-a-sha")
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));

    let output = app_meta()
        .args(["--config", "tests/fixtures/appmeta.toml", "check"])
        .env("APP_META_SHA", "not-a-sha")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
}

#[test]
fn test_every_date_format_normalizes_to_the_same_instant() {
    let expected = Utc.with_ymd_and_hms(2019, 8, 23, 18, 0, 0).unwrap();

    for value in [
        "Fri, 23 Aug 2019 11:00:00 -0700",
        "2019-08-23T18:00:00Z",
        "2019-08-23T11:00:00-07:00",
        "2019-08-23T11:00:00-0700",
    ] {
        let meta = Metadata::load(&RawMetadata::default().with(Field::Date, value)).unwrap();
        assert_eq!(meta.date(), Some(expected), "input {:?}", value);
    }
}

#[test]
fn test_empty_inputs_never_fail() {
    let meta = Metadata::load(&RawMetadata::default()).expect("empty metadata is valid");
    assert!(Metadata::diagnose(&RawMetadata::default()).is_empty());
    assert_eq!(meta.version_major(), "");
    assert_eq!(meta.short_sha(), "");
    assert_eq!(meta.url(), None);
}

#[test]
fn test_author_examples() {
    let cases = [
        ("Jane Doe <jdoe@example.com>", "Jane Doe", "jdoe@example.com"),
        ("jdoe@example.com", "", "jdoe@example.com"),
        ("<jdoe@example.com>", "", "jdoe@example.com"),
        ("Jane Doe <example@>", "Jane Doe <example@>", ""),
    ];

    for (input, name, email) in cases {
        let meta = Metadata::load(&RawMetadata::default().with(Field::Author, input)).unwrap();
        assert_eq!(meta.author(), name, "input {:?}", input);
        assert_eq!(meta.author_email(), email, "input {:?}", input);
    }
}
