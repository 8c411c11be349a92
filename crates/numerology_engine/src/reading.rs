//! A complete reading: every derived number for one name and birth date.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use numerology_foundation::{BirthDate, Error, Result, Spelling};
use tracing::debug;

use crate::date::{
    DEFAULT_MAX_AGE, MAX_AGE_LIMIT, PersonalYear, birthday_number, challenge_number, life_path_for,
    maturity_number, personal_years_for,
};
use crate::intensity::{IntensityNumbers, intensity_numbers};
use crate::lesson::life_lesson_numbers;
use crate::name::{destiny_number, personality_number, soul_number};

// =============================================================================
// Configuration
// =============================================================================

/// Settings for [`Reading::compute`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadingConfig {
    /// Last age in the personal-year series (inclusive). Values above
    /// [`MAX_AGE_LIMIT`] are treated as the limit.
    pub max_age: u32,
    /// The year treated as "now" when picking the current personal year.
    pub current_year: u32,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            current_year: local_year(),
        }
    }
}

impl ReadingConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the maximum age, capped at [`MAX_AGE_LIMIT`].
    #[must_use]
    pub fn with_max_age(mut self, max_age: u32) -> Self {
        self.max_age = max_age.min(MAX_AGE_LIMIT);
        self
    }

    /// Builder method to set the current year.
    #[must_use]
    pub fn with_current_year(mut self, year: u32) -> Self {
        self.current_year = year;
        self
    }
}

fn local_year() -> u32 {
    u32::try_from(chrono::Local::now().year()).unwrap_or_default()
}

// =============================================================================
// Core Numbers
// =============================================================================

/// The seven single-valued numbers of a reading, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoreNumber {
    /// Digits of the full birth date.
    LifePath,
    /// Every letter of the spelling.
    Destiny,
    /// Vowels of the spelling.
    Soul,
    /// Consonants of the spelling.
    Personality,
    /// Life path plus destiny.
    Maturity,
    /// Day of birth.
    Birthday,
    /// Month and day of birth.
    Challenge,
}

impl CoreNumber {
    /// All core numbers in display order.
    pub const ALL: [Self; 7] = [
        Self::LifePath,
        Self::Destiny,
        Self::Soul,
        Self::Personality,
        Self::Maturity,
        Self::Birthday,
        Self::Challenge,
    ];

    /// Short machine name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LifePath => "life-path",
            Self::Destiny => "destiny",
            Self::Soul => "soul",
            Self::Personality => "personality",
            Self::Maturity => "maturity",
            Self::Birthday => "birthday",
            Self::Challenge => "challenge",
        }
    }

    /// True for numbers computed from the spelling.
    #[must_use]
    pub fn is_name_based(self) -> bool {
        matches!(self, Self::Destiny | Self::Soul | Self::Personality)
    }
}

impl fmt::Display for CoreNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoreNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|n| n.name() == key || (key == "lifepath" && *n == Self::LifePath))
            .ok_or_else(|| Error::invalid_argument(format!("unknown number '{s}'")))
    }
}

// =============================================================================
// Reading
// =============================================================================

/// Every derived number for one spelling and birth date.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// The scored spelling.
    pub spelling: Spelling,
    /// The birth date.
    pub birth: BirthDate,
    /// Life path number.
    pub life_path: u32,
    /// Destiny number.
    pub destiny: u32,
    /// Soul number.
    pub soul: u32,
    /// Personality number.
    pub personality: u32,
    /// Maturity number.
    pub maturity: u32,
    /// Birthday number.
    pub birthday: u32,
    /// Challenge number.
    pub challenge: u32,
    /// Bucket frequency ranking.
    pub intensity: IntensityNumbers,
    /// Buckets missing from the spelling.
    pub life_lessons: Vec<u32>,
    /// Personal-year series from age 0.
    pub personal_years: Vec<PersonalYear>,
    /// The year the reading was taken for.
    pub current_year: u32,
}

impl Reading {
    /// Computes every number for the given inputs.
    #[must_use]
    pub fn compute(spelling: &Spelling, birth: BirthDate, config: &ReadingConfig) -> Self {
        let s = spelling.as_str();

        let life_path = life_path_for(birth);
        let destiny = destiny_number(s);
        let soul = soul_number(s);
        let personality = personality_number(s);
        let maturity = maturity_number(life_path, destiny);
        let birthday = birthday_number(birth.day);
        let challenge = challenge_number(birth.month, birth.day);
        debug!(
            spelling = s,
            %birth,
            life_path,
            destiny,
            soul,
            personality,
            maturity,
            birthday,
            challenge,
            "core numbers computed"
        );

        let intensity = intensity_numbers(s);
        let life_lessons = life_lesson_numbers(s);
        debug!(intensity = %intensity.text, ?life_lessons, "name profile computed");

        let personal_years = personal_years_for(birth, config.max_age.min(MAX_AGE_LIMIT));
        debug!(
            entries = personal_years.len(),
            current_year = config.current_year,
            "personal years computed"
        );

        Self {
            spelling: spelling.clone(),
            birth,
            life_path,
            destiny,
            soul,
            personality,
            maturity,
            birthday,
            challenge,
            intensity,
            life_lessons,
            personal_years,
            current_year: config.current_year,
        }
    }

    /// Value of one core number.
    #[must_use]
    pub fn core(&self, number: CoreNumber) -> u32 {
        match number {
            CoreNumber::LifePath => self.life_path,
            CoreNumber::Destiny => self.destiny,
            CoreNumber::Soul => self.soul,
            CoreNumber::Personality => self.personality,
            CoreNumber::Maturity => self.maturity,
            CoreNumber::Birthday => self.birthday,
            CoreNumber::Challenge => self.challenge,
        }
    }

    /// All core numbers with their values, in display order.
    #[must_use]
    pub fn core_numbers(&self) -> Vec<(CoreNumber, u32)> {
        CoreNumber::ALL
            .into_iter()
            .map(|n| (n, self.core(n)))
            .collect()
    }

    /// The personal-year entry for a calendar year.
    #[must_use]
    pub fn personal_year(&self, year: u32) -> Option<&PersonalYear> {
        self.personal_years.iter().find(|p| p.year == year)
    }

    /// The personal-year entry for [`Reading::current_year`].
    ///
    /// `None` when the current year falls outside the series.
    #[must_use]
    pub fn current_personal_year(&self) -> Option<&PersonalYear> {
        self.personal_year(self.current_year)
    }
}
