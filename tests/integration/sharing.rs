//! Share links between sessions

use numerology_foundation::BirthDate;
use numerology_runtime::parse_query;

use crate::session;

#[test]
fn share_link_reproduces_the_reading() {
    let mut sender = session();
    sender.set_name("たなか").unwrap();
    sender.set_birth("1990-01-01").unwrap();
    let link = sender.share(Some("https://example.com/")).unwrap();
    assert_eq!(link, "https://example.com/?spel=aaaknt&birth=1990-01-01");

    let mut receiver = session();
    receiver.open_share(&link).unwrap();
    let a = sender.reading().unwrap().core_numbers();
    let b = receiver.reading().unwrap().core_numbers();
    assert_eq!(a, b);
}

#[test]
fn share_uses_configured_base() {
    let mut session = session();
    session.report_config_mut().share_base = Some("https://example.com/n?x=1".to_string());
    session.set_name("sato").unwrap();
    session.set_birth("1970-3-3").unwrap();
    assert_eq!(
        session.share(None).unwrap(),
        "https://example.com/n?spel=aost&birth=1970-03-03"
    );
}

#[test]
fn share_without_base_fails() {
    let mut session = session();
    session.set_name("sato").unwrap();
    session.set_birth("1970-03-03").unwrap();
    assert!(session.share(None).is_err());
}

#[test]
fn partial_query() {
    let parsed = parse_query("birth=1990-01-01&utm=x").unwrap();
    assert_eq!(parsed.birth, Some(BirthDate::new(1990, 1, 1)));
    assert!(parsed.spelling.is_none());
    assert!(parsed.complete().is_none());
}

#[test]
fn empty_query_is_rejected_by_session() {
    let mut session = session();
    assert!(session.open_share("https://example.com/?utm=x").is_err());
}

#[test]
fn malformed_query_values_fail() {
    assert!(parse_query("spel=Tanaka").is_err());
    assert!(parse_query("birth=1990").is_err());
}

#[test]
fn sorted_nasal_survives_the_round_trip() {
    let mut sender = session();
    sender.set_name("しんぺい").unwrap();
    sender.set_birth("1995-05-05").unwrap();
    let link = sender.share(Some("https://example.com/")).unwrap();

    let mut receiver = session();
    receiver.open_share(&link).unwrap();
    assert_eq!(
        sender.reading().unwrap().destiny,
        receiver.reading().unwrap().destiny
    );
}
