//! Tests for the combined reading

use numerology_engine::{CoreNumber, MAX_AGE_LIMIT, Reading, ReadingConfig};
use numerology_foundation::{BirthDate, Spelling};

fn tanaka() -> Reading {
    let config = ReadingConfig::new().with_current_year(2024);
    Reading::compute(
        &Spelling::new("tanaka").unwrap(),
        BirthDate::new(1990, 1, 1),
        &config,
    )
}

#[test]
fn core_numbers() {
    let reading = tanaka();
    let values: Vec<(CoreNumber, u32)> = reading.core_numbers();
    assert_eq!(
        values,
        vec![
            (CoreNumber::LifePath, 3),
            (CoreNumber::Destiny, 3),
            (CoreNumber::Soul, 3),
            (CoreNumber::Personality, 9),
            (CoreNumber::Maturity, 6),
            (CoreNumber::Birthday, 1),
            (CoreNumber::Challenge, 2),
        ]
    );
}

#[test]
fn current_personal_year() {
    let reading = tanaka();
    assert_eq!(reading.personal_years.len(), 121);
    let now = reading.current_personal_year().unwrap();
    assert_eq!((now.year, now.age, now.result), (2024, 34, 1));
}

#[test]
fn current_year_outside_series() {
    let config = ReadingConfig::new().with_max_age(10).with_current_year(2024);
    let reading = Reading::compute(
        &Spelling::new("tanaka").unwrap(),
        BirthDate::new(1990, 1, 1),
        &config,
    );
    assert_eq!(reading.personal_years.len(), 11);
    assert!(reading.current_personal_year().is_none());
}

#[test]
fn sorted_spelling_gives_same_numbers() {
    let config = ReadingConfig::new().with_current_year(2024);
    let birth = BirthDate::new(1990, 1, 1);
    let spelling = Spelling::new("tanaka").unwrap();
    let a = Reading::compute(&spelling, birth, &config);
    let b = Reading::compute(&spelling.sorted(), birth, &config);
    assert_eq!(a.core_numbers(), b.core_numbers());
    assert_eq!(a.intensity, b.intensity);
    assert_eq!(a.life_lessons, b.life_lessons);
}

#[test]
fn core_number_names_round_trip() {
    for number in CoreNumber::ALL {
        assert_eq!(number.name().parse::<CoreNumber>().unwrap(), number);
    }
    assert_eq!("life_path".parse::<CoreNumber>().unwrap(), CoreNumber::LifePath);
    assert_eq!("LifePath".parse::<CoreNumber>().unwrap(), CoreNumber::LifePath);
    assert!("luck".parse::<CoreNumber>().is_err());
}

#[test]
fn name_based_numbers() {
    let named: Vec<_> = CoreNumber::ALL
        .into_iter()
        .filter(|n| n.is_name_based())
        .collect();
    assert_eq!(
        named,
        vec![CoreNumber::Destiny, CoreNumber::Soul, CoreNumber::Personality]
    );
}

#[test]
fn largest_birth_year_gives_a_reading() {
    let reading = Reading::compute(
        &Spelling::new("tanaka").unwrap(),
        BirthDate::parse("4294967295-01-01").unwrap(),
        &ReadingConfig::new().with_current_year(2024),
    );
    assert_eq!(reading.personal_years.len(), 1);
    assert_eq!(reading.personal_years[0].year, u32::MAX);
    assert!(reading.current_personal_year().is_none());
}

#[test]
fn huge_max_age_is_capped() {
    let config = ReadingConfig::new()
        .with_max_age(u32::MAX)
        .with_current_year(2024);
    let reading = Reading::compute(
        &Spelling::new("tanaka").unwrap(),
        BirthDate::new(1990, 1, 1),
        &config,
    );
    assert_eq!(reading.personal_years.len(), MAX_AGE_LIMIT as usize + 1);
}
