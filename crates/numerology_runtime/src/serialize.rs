//! Reading serialization and deserialization using `MessagePack`.
//!
//! A saved file holds the computed [`Reading`] together with the name as it
//! was typed, so a loaded reading can be shown without recomputing.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use numerology_engine::Reading;
use numerology_foundation::{Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};

/// Version written into every saved file.
pub const FORMAT_VERSION: u32 = 1;

/// The on-disk record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedReading {
    /// Format version; files from another version are rejected.
    pub version: u32,
    /// The name as typed (hiragana or Latin), if known.
    pub name: Option<String>,
    /// The reading itself.
    pub reading: Reading,
}

impl SavedReading {
    /// Wraps a reading at the current format version.
    #[must_use]
    pub fn new(reading: Reading, name: Option<String>) -> Self {
        Self {
            version: FORMAT_VERSION,
            name,
            reading,
        }
    }
}

/// Serializes a saved reading to bytes using `MessagePack` format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(saved: &SavedReading) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(saved)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a saved reading from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails or the format version differs.
pub fn from_bytes(bytes: &[u8]) -> Result<SavedReading> {
    let saved: SavedReading = rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))?;
    if saved.version != FORMAT_VERSION {
        return Err(Error::new(ErrorKind::SerializationError(format!(
            "unsupported format version {} (expected {FORMAT_VERSION})",
            saved.version
        ))));
    }
    Ok(saved)
}

/// Saves a reading to a file, creating or overwriting it.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(saved: &SavedReading, path: P) -> Result<()> {
    let path = path.as_ref();
    let io_error = |action: &str, e: std::io::Error| {
        Error::new(ErrorKind::IoError(format!(
            "failed to {action} file '{}': {e}",
            path.display()
        )))
    };

    let bytes = to_bytes(saved)?;
    let file = File::create(path).map_err(|e| io_error("create", e))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(|e| io_error("write", e))?;
    writer.flush().map_err(|e| io_error("flush", e))?;
    Ok(())
}

/// Loads a reading from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SavedReading> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })?;

    let mut bytes = Vec::new();
    BufReader::new(file).read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;

    from_bytes(&bytes)
}
