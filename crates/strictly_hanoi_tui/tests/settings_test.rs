//! Tests for loading settings from TOML files.

use std::fs;
use tempfile::TempDir;

use strictly_hanoi_tui::Settings;

fn write_settings(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("strictly_hanoi.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_loads_disk_count() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_settings(&dir, "disks = 6\n");

    let settings = Settings::from_file(&path).expect("Load failed");
    assert_eq!(settings.disks().get(), 6);
}

#[test]
fn test_missing_key_uses_default() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_settings(&dir, "# nothing configured\n");

    let settings = Settings::from_file(&path).expect("Load failed");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.disks().get(), 3);
}

#[test]
fn test_out_of_range_rejected_not_clamped() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    for bad in ["disks = 2\n", "disks = 9\n", "disks = 300\n", "disks = -1\n"] {
        let path = write_settings(&dir, bad);
        let result = Settings::from_file(&path);
        assert!(result.is_err(), "{:?} should be rejected", bad);
    }
}

#[test]
fn test_wrong_type_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_settings(&dir, "disks = \"five\"\n");

    let err = Settings::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");

    assert!(Settings::from_file(&path).is_err());
    assert_eq!(
        Settings::load_or_default(&path).expect("Default failed"),
        Settings::default()
    );
}
