use std::fs;

use tempfile::tempdir;

use super::probe::probe_duration;
use super::sink::open_decoder;
use crate::error::AudioError;

#[test]
fn open_decoder_reports_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.mp3");

    match open_decoder(&path) {
        Err(AudioError::Open { path: p, .. }) => assert_eq!(p, path),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("missing file must not decode"),
    }
}

#[test]
fn open_decoder_reports_undecodable_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("noise.mp3");
    fs::write(&path, b"definitely not audio").unwrap();

    assert!(matches!(open_decoder(&path), Err(AudioError::Decode { .. })));
}

#[test]
fn probe_duration_is_none_for_garbage_and_missing_files() {
    let dir = tempdir().unwrap();
    let garbage = dir.path().join("noise.ogg");
    fs::write(&garbage, b"not an ogg stream").unwrap();

    assert_eq!(probe_duration(&garbage), None);
    assert_eq!(probe_duration(&dir.path().join("missing.flac")), None);
}
