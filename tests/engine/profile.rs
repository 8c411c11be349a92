//! Tests for the intensity ranking and life lessons

use numerology_engine::{IntensityEntry, intensity_numbers, life_lesson_numbers};
use proptest::prelude::*;

#[test]
fn tanaka_profile() {
    let intensity = intensity_numbers("tanaka");
    assert_eq!(intensity.text, "1>2>5");
    assert_eq!(intensity.max_count(), 3);
    assert_eq!(intensity.dominant(), vec![1]);
    assert_eq!(life_lesson_numbers("tanaka"), vec![3, 4, 6, 7, 8, 9]);
}

#[test]
fn ties_share_a_group() {
    let intensity = intensity_numbers("suzuki");
    assert_eq!(intensity.text, "3>1=2=8=9");
    assert_eq!(intensity.ranking[0], IntensityEntry { value: 3, count: 2 });
    assert_eq!(intensity.count_of(8), 1);
    assert_eq!(intensity.count_of(4), 0);
    assert_eq!(life_lesson_numbers("suzuki"), vec![4, 5, 6, 7]);
}

#[test]
fn all_tied() {
    let intensity = intensity_numbers("abc");
    assert_eq!(intensity.text, "1=2=3");
    assert_eq!(intensity.dominant(), vec![1, 2, 3]);
}

#[test]
fn empty_spelling() {
    let intensity = intensity_numbers("");
    assert!(intensity.ranking.is_empty());
    assert_eq!(intensity.text, "");
    assert_eq!(intensity.max_count(), 0);
}

proptest! {
    #[test]
    fn lessons_complement_the_ranking(spelling in "[a-z]{1,24}") {
        let intensity = intensity_numbers(&spelling);
        let lessons = life_lesson_numbers(&spelling);

        let mut all: Vec<u32> = intensity.ranking.iter().map(|e| e.value).collect();
        all.extend(&lessons);
        all.sort_unstable();
        prop_assert_eq!(all, (1..=9).collect::<Vec<_>>());

        let total: u32 = intensity.ranking.iter().map(|e| e.count).sum();
        prop_assert_eq!(total as usize, spelling.len());
    }
}
