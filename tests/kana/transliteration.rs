//! Tests for the syllable table and the transliterator

use numerology_kana::syllables::{self, SYLLABLES, lookup, lookup_char};
use numerology_kana::{Transliterator, transliterate};

// =============================================================================
// Table
// =============================================================================

#[test]
fn table_has_no_duplicate_keys() {
    assert_eq!(syllables::len(), SYLLABLES.len());
}

#[test]
fn every_romanization_is_lowercase_latin() {
    for (kana, roman) in SYLLABLES {
        assert!(!roman.is_empty(), "{kana}");
        assert!(roman.chars().all(|c| c.is_ascii_lowercase()), "{kana} -> {roman}");
    }
}

#[test]
fn lookups() {
    assert_eq!(lookup("しゃ"), Some("sha"));
    assert_eq!(lookup_char('ん'), Some("n"));
    assert_eq!(lookup_char('つ'), Some("tsu"));
    assert_eq!(lookup_char('a'), None);
    assert_eq!(lookup("かな"), None);
}

// =============================================================================
// Transliteration
// =============================================================================

#[test]
fn plain_names() {
    assert_eq!(transliterate("たなか"), "tanaka");
    assert_eq!(transliterate("すずき"), "suzuki");
    assert_eq!(transliterate("さとう"), "satou");
    assert_eq!(transliterate("ちはる"), "chiharu");
}

#[test]
fn digraph_wins_over_single_character() {
    assert_eq!(transliterate("りょう"), "ryou");
    assert_eq!(transliterate("ちゃこ"), "chako");
    // き then や: no small kana, so no digraph
    assert_eq!(transliterate("きや"), "kiya");
}

#[test]
fn nasal_before_bilabials() {
    assert_eq!(transliterate("しんぶん"), "shimbun");
    assert_eq!(transliterate("なんば"), "namba");
    assert_eq!(transliterate("じゅんぺい"), "jumpei");
    assert_eq!(transliterate("かんみ"), "kammi");
}

#[test]
fn nasal_elsewhere() {
    assert_eq!(transliterate("けんた"), "kenta");
    assert_eq!(transliterate("しんや"), "shinya");
    assert_eq!(transliterate("ん"), "n");
}

#[test]
fn syllables_cover_the_input() {
    let input = "しょうへい";
    let syllables = Transliterator::syllables(input);
    let rebuilt: String = syllables.iter().map(|s| s.source.as_str()).collect();
    assert_eq!(rebuilt, input);
    assert_eq!(syllables.len(), 4);
}
