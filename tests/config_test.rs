//! Integration tests for Settings loading.
//!
//! Note: these tests only exercise explicit files in temp directories, so they
//! do not depend on a global config being present. Environment overrides are
//! covered in `config_env_test.rs`.

use std::fs;

use tempfile::TempDir;

use bloodline::config::{Settings, DEFAULT_MILLENNIAL_THRESHOLD};
use bloodline::util::testing;
use bloodline::{millennials_from_settings, Bloodline, BloodlineError, Vampire};

#[test]
fn given_file_with_threshold_when_loading_from_file_then_overrides_default() {
    testing::init_test_setup();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bloodline.toml");
    fs::write(&path, "millennial_threshold = 1900\n").unwrap();

    let settings = Settings::from_file(&path).expect("load settings");

    assert_eq!(settings.millennial_threshold, 1900);
}

#[test]
fn given_empty_file_when_loading_from_file_then_uses_default() {
    testing::init_test_setup();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bloodline.toml");
    fs::write(&path, "").unwrap();

    let settings = Settings::from_file(&path).expect("load settings");

    assert_eq!(settings.millennial_threshold, DEFAULT_MILLENNIAL_THRESHOLD);
}

#[test]
fn given_malformed_file_when_loading_then_reports_config_error() {
    testing::init_test_setup();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bloodline.toml");
    fs::write(&path, "millennial_threshold = \"soon\"\n").unwrap();

    let result = Settings::load(Some(path.as_path()));

    match result {
        Err(BloodlineError::Config { message }) => assert!(message.contains("parse")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn given_missing_explicit_file_when_loading_then_reports_config_error() {
    testing::init_test_setup();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let result = Settings::load(Some(path.as_path()));

    assert!(matches!(result, Err(BloodlineError::Config { .. })));
}

#[test]
fn given_threshold_file_when_collecting_millennials_then_uses_configured_year() {
    testing::init_test_setup();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bloodline.toml");
    fs::write(&path, "millennial_threshold = 1700\n").unwrap();

    let mut bloodline = Bloodline::new();
    let original = bloodline.insert(Vampire::new("Ansel", 1580));
    let sarah = bloodline.insert(Vampire::new("Sarah", 1720));
    let elgort = bloodline.insert(Vampire::new("Elgort", 1650));
    bloodline.add_offspring(original, sarah).unwrap();
    bloodline.add_offspring(original, elgort).unwrap();

    let found = millennials_from_settings(&bloodline, original, Some(path.as_path())).expect("query");

    assert_eq!(found, vec![sarah]);
}

#[test]
fn given_unknown_root_when_collecting_millennials_then_wraps_domain_error() {
    testing::init_test_setup();
    let mut other = Bloodline::new();
    other.insert(Vampire::new("Ansel", 1580));
    let foreign = other.insert(Vampire::new("Sarah", 1720));
    let bloodline = Bloodline::new();

    let result = millennials_from_settings(&bloodline, foreign, None);

    assert!(matches!(result, Err(BloodlineError::Domain(_))));
}
