//! Hiragana in, report out

use numerology_debug::explain_all;
use numerology_engine::{CoreNumber, Reading};

use crate::session;

#[test]
fn hiragana_name_to_reading() {
    let mut session = session();
    assert_eq!(session.set_name("たなか").unwrap().as_str(), "tanaka");
    session.set_birth("1990-01-01").unwrap();

    let reading = session.reading().unwrap();
    assert_eq!(reading.destiny, 3);
    assert_eq!(reading.life_path, 3);
    assert_eq!(reading.maturity, 6);
    assert_eq!(reading.personal_years.len(), 41);
    assert_eq!(reading.current_personal_year().unwrap().result, 1);
}

#[test]
fn hiragana_and_romaji_agree() {
    let mut kana = session();
    kana.set_name("しんぶん").unwrap();
    kana.set_birth("2000-02-29").unwrap();

    let mut latin = session();
    latin.set_name("shimbun").unwrap();
    latin.set_birth("2000-02-29").unwrap();

    assert_eq!(kana.reading().unwrap(), latin.reading().unwrap());
}

#[test]
fn report_contains_every_section() {
    let mut session = session();
    session.set_name("たなか").unwrap();
    session.set_birth("1990-01-01").unwrap();
    let report = session.report().unwrap();

    assert!(report.starts_with("tanaka (1990-01-01)\n"));
    for heading in ["基本", "能力値 1>2>5", "パーソナルイヤー"] {
        assert!(report.contains(heading), "{heading}");
    }
    assert!(report.contains("ライフパス | 生き様 | 3 |"));
    // current year is marked in plain mode
    assert!(report.contains("* 2024 | 34 | 1 |"));
}

#[test]
fn explanations_agree_with_the_reading() {
    let mut session = session();
    session.set_name("すずき").unwrap();
    session.set_birth("1985-12-25").unwrap();
    let reading: Reading = session.reading().unwrap().clone();

    let explanations = explain_all(&reading.spelling, reading.birth);
    assert_eq!(explanations.len(), CoreNumber::ALL.len());
    for explanation in &explanations {
        assert_eq!(
            explanation.result(),
            reading.core(explanation.number),
            "{}",
            explanation.number
        );
    }
    assert_eq!(reading.personality, 11);
    assert_eq!(reading.life_path, 33);
}

#[test]
fn missing_inputs_are_reported() {
    let mut session = session();
    assert!(session.reading().is_err());
    session.set_name("たなか").unwrap();
    let err = session.report().unwrap_err();
    assert!(err.to_string().contains("birth"));
}

#[test]
fn rejected_name_keeps_previous() {
    let mut session = session();
    session.set_name("たなか").unwrap();
    assert!(session.set_name("タナカ").is_err());
    assert_eq!(session.spelling().unwrap().as_str(), "tanaka");
    assert_eq!(session.name(), Some("たなか"));
}
