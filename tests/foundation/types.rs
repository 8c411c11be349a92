//! Integration tests for Spelling and BirthDate

use numerology_foundation::{BirthDate, ErrorKind, Spelling};

// =============================================================================
// Spelling
// =============================================================================

#[test]
fn spelling_accepts_lowercase() {
    let s = Spelling::new("yamada").unwrap();
    assert_eq!(s.as_str(), "yamada");
    assert_eq!(s.len(), 6);
    assert!(!s.is_empty());
    assert_eq!(s.to_string(), "yamada");
    assert_eq!(s.letters().filter(|&c| c == 'a').count(), 3);
}

#[test]
fn spelling_rejects_empty() {
    let err = Spelling::new("").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidSpelling { .. }));
}

#[test]
fn spelling_rejects_uppercase_and_spaces() {
    assert!(matches!(
        Spelling::new("Sato").unwrap_err().kind,
        ErrorKind::InvalidCharacter { ch: 'S', position: 0 }
    ));
    assert!(matches!(
        Spelling::new("sato taro").unwrap_err().kind,
        ErrorKind::InvalidCharacter { ch: ' ', position: 4 }
    ));
}

#[test]
fn spelling_sorted_keeps_letters() {
    let s = Spelling::new("suzuki").unwrap();
    assert_eq!(s.sorted().as_str(), "iksuuz");
    assert_eq!(s.sorted().len(), s.len());
}

#[test]
fn spelling_conversions() {
    let s: Spelling = "sato".parse().unwrap();
    let back: String = s.clone().into();
    assert_eq!(back, "sato");
    assert_eq!(Spelling::try_from(back).unwrap(), s);
    let as_ref: &str = s.as_ref();
    assert_eq!(as_ref, "sato");
}

// =============================================================================
// BirthDate
// =============================================================================

#[test]
fn birth_date_parse_and_display() {
    let d = BirthDate::parse("1990-1-1").unwrap();
    assert_eq!(d, BirthDate::new(1990, 1, 1));
    assert_eq!(d.to_string(), "1990-01-01");
    assert_eq!("0800-12-31".parse::<BirthDate>().unwrap().to_string(), "0800-12-31");
}

#[test]
fn birth_date_is_not_calendar_checked() {
    assert_eq!(
        BirthDate::parse("2023-02-31").unwrap(),
        BirthDate::new(2023, 2, 31)
    );
}

#[test]
fn birth_date_rejects_malformed() {
    for input in ["", "1990", "1990-01", "1990-01-01-01", "1990-ab-01", "-1-2-3", "1990/01/01"] {
        let err = BirthDate::parse(input).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::InvalidBirthDate { .. }),
            "{input}"
        );
    }
}

#[test]
fn birth_dates_order_chronologically() {
    assert!(BirthDate::new(1990, 1, 1) < BirthDate::new(1990, 1, 2));
    assert!(BirthDate::new(1989, 12, 31) < BirthDate::new(1990, 1, 1));
}
