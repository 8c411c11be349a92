//! Saving and loading readings

use std::env;
use std::fs;

use numerology_foundation::ErrorKind;
use numerology_runtime::{SavedReading, from_bytes, load_from_file, to_bytes};

use crate::session;

#[test]
fn session_save_and_load() {
    let path = env::temp_dir().join("numerology_integration_session.msgpack");

    let mut original = session();
    original.set_name("たなか").unwrap();
    original.set_birth("1990-01-01").unwrap();
    let expected = original.reading().unwrap().clone();
    original.save(&path).unwrap();

    let mut restored = session();
    let loaded = restored.load(&path).unwrap().clone();
    assert_eq!(loaded, expected);
    assert_eq!(restored.name(), Some("たなか"));
    assert_eq!(restored.spelling().unwrap().as_str(), "tanaka");

    let saved = load_from_file(&path).unwrap();
    assert_eq!(saved.name.as_deref(), Some("たなか"));

    let _ = fs::remove_file(&path);
}

#[test]
fn loading_a_missing_file_fails() {
    let path = env::temp_dir().join("numerology_integration_missing.msgpack");
    let _ = fs::remove_file(&path);
    let err = session().load(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}

#[test]
fn corrupt_bytes_are_rejected() {
    let err = from_bytes(&[0xc1, 0x00, 0xff]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
}

#[test]
fn bytes_round_trip_keeps_years() {
    let mut session = session();
    session.set_name("すずき").unwrap();
    session.set_birth("2001-07-15").unwrap();
    let reading = session.reading().unwrap().clone();

    let saved = SavedReading::new(reading.clone(), None);
    let restored = from_bytes(&to_bytes(&saved).unwrap()).unwrap();
    assert_eq!(restored.reading.personal_years, reading.personal_years);
    assert_eq!(restored.name, None);
}
