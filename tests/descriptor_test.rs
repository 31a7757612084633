// tests/descriptor_test.rs
use std::path::Path;

use release_resolve::descriptor::{reader_for, DescriptorReader, PlainVersionReader};
use release_resolve::error::ReleaseResolveError;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Could not write descriptor fixture");
    path
}

#[test]
fn test_cargo_manifest_version() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "Cargo.toml",
        r#"
[package]
name = "demo"
version = "0.3.2"
edition = "2021"

[dependencies]
serde = "1.0"
"#,
    );

    let reader = reader_for(&path).unwrap();
    assert_eq!(reader.current_version().unwrap(), "0.3.2");
}

#[test]
fn test_cargo_workspace_root_version() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "Cargo.toml",
        r#"
[workspace]
members = ["api", "core"]

[workspace.package]
version = "1.4.0"
edition = "2021"
"#,
    );

    let reader = reader_for(&path).unwrap();
    assert_eq!(reader.current_version().unwrap(), "1.4.0");
}

#[test]
fn test_package_json_version() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "package.json",
        r#"{
  "name": "demo",
  "version": "2.1.0",
  "scripts": { "build": "tsc" }
}"#,
    );

    let reader = reader_for(&path).unwrap();
    assert_eq!(reader.current_version().unwrap(), "2.1.0");
}

#[test]
fn test_plain_version_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "VERSION", "3.0.0-SNAPSHOT\n");

    let reader = reader_for(&path).unwrap();
    assert_eq!(reader.current_version().unwrap(), "3.0.0-SNAPSHOT");
}

#[test]
fn test_xml_descriptor_is_rejected() {
    let err = reader_for(Path::new("project/pom.xml")).err().unwrap();

    assert!(matches!(
        err,
        ReleaseResolveError::DescriptorUnreadable { .. }
    ));
    let msg = err.to_string();
    assert!(msg.contains("pom.xml"));
    assert!(msg.contains("not supported"));
}

#[test]
fn test_missing_descriptor_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Cargo.toml");

    let reader = reader_for(&path).unwrap();
    let err = reader.current_version().unwrap_err();

    assert!(err.to_string().contains("Cargo.toml"));
}

#[test]
fn test_manifest_without_version_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "Cargo.toml", "[package]\nname = \"demo\"\n");

    let reader = reader_for(&path).unwrap();
    assert!(reader.current_version().is_err());
}

#[test]
fn test_empty_plain_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "VERSION", "\n");

    let reader = PlainVersionReader::new(path);
    assert!(reader.current_version().is_err());
}

#[test]
fn test_extracted_version_is_not_validated_here() {
    // Version syntax checks belong to resolution, not descriptor reading
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "VERSION", "not-a-version\n");

    let reader = reader_for(&path).unwrap();
    assert_eq!(reader.current_version().unwrap(), "not-a-version");
}
