//! Integration tests for ZIP entry search and extraction.

use commons_fs::archive;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn build_archive(path: &Path) {
    let file = File::create(path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    writer.add_directory("docs/", options).unwrap();
    writer.start_file("docs/readme.TXT", options).unwrap();
    writer.write_all(b"read me first").unwrap();
    writer.start_file("data.bin", options).unwrap();
    writer.write_all(&[0u8, 1, 2, 3]).unwrap();
    writer.finish().unwrap();
}

#[test]
fn lists_entries_in_archive_order() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("sample.zip");
    build_archive(&zip_path);

    let names = archive::list_entries(&zip_path).unwrap();
    assert_eq!(names, vec!["docs/", "docs/readme.TXT", "data.bin"]);
}

#[test]
fn finds_entry_by_suffix_case_insensitively() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("sample.zip");
    build_archive(&zip_path);

    let found = archive::find_by_suffix(&zip_path, ".txt").unwrap();
    assert_eq!(found.as_deref(), Some("docs/readme.TXT"));
    assert_eq!(archive::find_by_suffix(&zip_path, ".pdf").unwrap(), None);
}

#[test]
fn reads_entry_bytes() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("sample.zip");
    build_archive(&zip_path);

    let data = archive::read_entry(&zip_path, "data.bin").unwrap();
    assert_eq!(data, vec![0u8, 1, 2, 3]);
    assert!(archive::read_entry(&zip_path, "missing").is_err());
}

#[test]
fn extracts_single_entry() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("sample.zip");
    build_archive(&zip_path);

    let dest = dir.path().join("out").join("readme.txt");
    archive::extract_entry(&zip_path, "docs/readme.TXT", &dest).unwrap();
    assert_eq!(fs::read_to_string(&dest).unwrap(), "read me first");
}

#[test]
fn extracts_all_preserving_structure() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("sample.zip");
    build_archive(&zip_path);

    let out = dir.path().join("unpacked");
    let written = archive::extract_all(&zip_path, &out).unwrap();
    assert_eq!(written, 2);
    assert!(out.join("docs/readme.TXT").is_file());
    assert_eq!(fs::read(out.join("data.bin")).unwrap(), vec![0u8, 1, 2, 3]);
}

#[test]
fn refuses_entries_escaping_destination() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("hostile.zip");
    let file = File::create(&zip_path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    writer.start_file("../evil.txt", options).unwrap();
    writer.write_all(b"escaped").unwrap();
    writer.start_file("ok.txt", options).unwrap();
    writer.write_all(b"fine").unwrap();
    writer.finish().unwrap();

    let out = dir.path().join("sandbox").join("unpacked");
    fs::create_dir_all(&out).unwrap();
    let err = archive::extract_all(&zip_path, &out).unwrap_err();
    assert!(matches!(err, commons_core::Error::Archive { .. }));
    // Nothing may land above the destination directory
    assert!(!dir.path().join("sandbox").join("evil.txt").exists());
    assert!(!dir.path().join("evil.txt").exists());
}

#[test]
fn rejects_missing_archive() {
    let dir = TempDir::new().unwrap();
    assert!(archive::list_entries(&dir.path().join("nope.zip")).is_err());
}

#[test]
fn rejects_non_zip_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.txt");
    fs::write(&path, "not a zip").unwrap();
    assert!(archive::list_entries(&path).is_err());
}
