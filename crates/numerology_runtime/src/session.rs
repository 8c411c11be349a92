//! Session state for the REPL and CLI.
//!
//! The session holds the current name and birth date, the reading computed
//! from them, and the settings used to compute and render it. The reading is
//! recomputed lazily after either input changes.

use std::path::Path;

use numerology_debug::{Explanation, Tracer, explain, explain_all};
use numerology_engine::{CoreNumber, Reading, ReadingConfig};
use numerology_foundation::{BirthDate, Error, Result, Spelling};
use numerology_kana::NameInput;
use tracing::{info, warn};

use crate::report::{ReportConfig, render};
use crate::serialize::{SavedReading, load_from_file, save_to_file};
use crate::share::{parse_query, share_link};

/// Session state for one user.
pub struct Session {
    /// The name as typed.
    name: Option<String>,
    /// The romanized name.
    spelling: Option<Spelling>,
    /// The birth date.
    birth: Option<BirthDate>,
    /// Cached reading for the current inputs.
    reading: Option<Reading>,
    /// Settings for computing readings.
    reading_config: ReadingConfig,
    /// Settings for rendering reports.
    report_config: ReportConfig,
    /// Tracer for observability.
    tracer: Tracer,
}

impl Session {
    /// Creates an empty session with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            spelling: None,
            birth: None,
            reading: None,
            reading_config: ReadingConfig::default(),
            report_config: ReportConfig::default(),
            tracer: Tracer::disabled(),
        }
    }

    /// Builder method to set the reading configuration.
    #[must_use]
    pub fn with_reading_config(mut self, config: ReadingConfig) -> Self {
        self.reading_config = config;
        self
    }

    /// Builder method to set the report configuration.
    #[must_use]
    pub fn with_report_config(mut self, config: ReportConfig) -> Self {
        self.report_config = config;
        self
    }

    /// Builder method to set the tracer.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Sets the name, romanizing hiragana.
    ///
    /// On failure the previous name is kept.
    ///
    /// # Errors
    ///
    /// Returns the classification or spelling error for the input.
    pub fn set_name(&mut self, raw: &str) -> Result<&Spelling> {
        let spelling = match NameInput::classify(raw).and_then(|input| input.to_spelling()) {
            Ok(spelling) => spelling,
            Err(e) => {
                warn!(input = raw, error = %e, "name rejected");
                self.tracer.input_rejected(raw, &e);
                return Err(e);
            }
        };

        info!(input = raw.trim(), spelling = %spelling, "name set");
        self.tracer.transliterated(raw.trim(), spelling.as_str());
        self.name = Some(raw.trim().to_string());
        self.reading = None;
        Ok(&*self.spelling.insert(spelling))
    }

    /// Sets the birth date from `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBirthDate` for malformed input.
    pub fn set_birth(&mut self, raw: &str) -> Result<BirthDate> {
        let birth = match BirthDate::parse(raw.trim()) {
            Ok(birth) => birth,
            Err(e) => {
                warn!(input = raw, error = %e, "birth date rejected");
                self.tracer.input_rejected(raw, &e);
                return Err(e);
            }
        };

        info!(%birth, "birth date set");
        self.birth = Some(birth);
        self.reading = None;
        Ok(birth)
    }

    /// Applies the inputs carried by a share link or query.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed value, or if the query carries
    /// neither input.
    pub fn open_share(&mut self, query: &str) -> Result<()> {
        let parsed = parse_query(query)?;
        if parsed.spelling.is_none() && parsed.birth.is_none() {
            return Err(Error::invalid_argument("share query has no spel or birth"));
        }
        if let Some(spelling) = parsed.spelling {
            self.name = Some(spelling.as_str().to_string());
            self.spelling = Some(spelling);
        }
        if let Some(birth) = parsed.birth {
            self.birth = Some(birth);
        }
        self.reading = None;
        Ok(())
    }

    /// The name as typed.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The romanized name.
    #[must_use]
    pub fn spelling(&self) -> Option<&Spelling> {
        self.spelling.as_ref()
    }

    /// The birth date.
    #[must_use]
    pub fn birth(&self) -> Option<BirthDate> {
        self.birth
    }

    fn inputs(&self) -> Result<(&Spelling, BirthDate)> {
        let spelling = self
            .spelling
            .as_ref()
            .ok_or_else(|| Error::invalid_argument("no name set (use `name <name>`)"))?;
        let birth = self
            .birth
            .ok_or_else(|| Error::invalid_argument("no birth date set (use `birth <YYYY-MM-DD>`)"))?;
        Ok((spelling, birth))
    }

    // -------------------------------------------------------------------------
    // Readings
    // -------------------------------------------------------------------------

    /// The reading for the current inputs, computing it if needed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the name or birth date is missing.
    pub fn reading(&mut self) -> Result<&Reading> {
        if self.reading.is_none() {
            let (spelling, birth) = self.inputs()?;
            let reading = Reading::compute(spelling, birth, &self.reading_config);
            info!(spelling = %reading.spelling, %birth, "reading computed");
            self.tracer.reading(&reading);
            self.reading = Some(reading);
        }
        self.reading
            .as_ref()
            .ok_or_else(|| Error::invalid_argument("no reading"))
    }

    /// Drops the cached reading and computes it again with the session's
    /// configuration. A loaded reading keeps the settings it was saved with
    /// until this is called.
    ///
    /// # Errors
    ///
    /// See [`Session::reading`].
    pub fn recompute(&mut self) -> Result<&Reading> {
        self.reading = None;
        self.reading()
    }

    /// Renders the current reading.
    ///
    /// # Errors
    ///
    /// See [`Session::reading`].
    pub fn report(&mut self) -> Result<String> {
        let config = self.report_config.clone();
        Ok(render(self.reading()?, &config))
    }

    /// Explains one core number for the current inputs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the name or birth date is missing.
    pub fn explain(&self, number: CoreNumber) -> Result<Explanation> {
        let (spelling, birth) = self.inputs()?;
        Ok(explain(number, spelling, birth))
    }

    /// Explains every core number for the current inputs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the name or birth date is missing.
    pub fn explain_all(&self) -> Result<Vec<Explanation>> {
        let (spelling, birth) = self.inputs()?;
        Ok(explain_all(spelling, birth))
    }

    /// A share link for the current inputs.
    ///
    /// Uses `base`, falling back to the configured share base.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if inputs are missing or no base is known.
    pub fn share(&self, base: Option<&str>) -> Result<String> {
        let (spelling, birth) = self.inputs()?;
        let base = base
            .or(self.report_config.share_base.as_deref())
            .ok_or_else(|| Error::invalid_argument("no share base URL (use `share <url>`)"))?;
        Ok(share_link(base, spelling, birth))
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Saves the current reading to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if inputs are missing or the file cannot be written.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        let reading = self.reading()?.clone();
        let saved = SavedReading::new(reading, self.name.clone());
        save_to_file(&saved, path)?;
        info!(path = %path.display(), "reading saved");
        Ok(())
    }

    /// Loads a reading from a file, replacing the current inputs.
    ///
    /// The loaded reading is kept as computed; it is not recomputed with the
    /// session's configuration until an input changes or
    /// [`Session::recompute`] is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load(&mut self, path: &Path) -> Result<&Reading> {
        let saved = load_from_file(path)?;
        info!(path = %path.display(), spelling = %saved.reading.spelling, "reading loaded");
        self.name = saved.name;
        self.spelling = Some(saved.reading.spelling.clone());
        self.birth = Some(saved.reading.birth);
        self.tracer.reading(&saved.reading);
        Ok(&*self.reading.insert(saved.reading))
    }

    // -------------------------------------------------------------------------
    // Settings
    // -------------------------------------------------------------------------

    /// Returns the reading configuration.
    #[must_use]
    pub fn reading_config(&self) -> &ReadingConfig {
        &self.reading_config
    }

    /// Returns the report configuration.
    #[must_use]
    pub fn report_config(&self) -> &ReportConfig {
        &self.report_config
    }

    /// Returns a mutable reference to the report configuration.
    pub fn report_config_mut(&mut self) -> &mut ReportConfig {
        &mut self.report_config
    }

    /// Returns the tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Returns a mutable reference to the tracer.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
