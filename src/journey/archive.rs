use super::model::Journey;
use crate::error::ArchiveError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use tracing::info;

/// A whole-journey-list snapshot in the bincode format.
///
/// This is the file-backed counterpart of the browser build's local-storage
/// persistence: the complete journey list is written and read as one unit.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JourneyArchive {
    pub journeys: Vec<Journey>,
}

impl JourneyArchive {
    pub fn new(journeys: Vec<Journey>) -> Self {
        Self { journeys }
    }

    /// Saves the archive to a file.
    pub fn save(&self, path: &str) -> Result<(), ArchiveError> {
        let bytes = encode_to_vec(self, standard())
            .map_err(|e| ArchiveError::Encode(e.to_string()))?;
        let mut file = fs::File::create(path).map_err(|e| ArchiveError::Io {
            path: path.to_string(),
            source: e,
        })?;
        file.write_all(&bytes).map_err(|e| ArchiveError::Io {
            path: path.to_string(),
            source: e,
        })?;
        info!(path, count = self.journeys.len(), "journey archive saved");
        Ok(())
    }

    /// Loads an archive from a file.
    pub fn from_file(path: &str) -> Result<Self, ArchiveError> {
        let mut file = fs::File::open(path).map_err(|e| ArchiveError::Io {
            path: path.to_string(),
            source: e,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| ArchiveError::Io {
            path: path.to_string(),
            source: e,
        })?;
        let archive = Self::from_bytes(&bytes)?;
        info!(path, count = archive.journeys.len(), "journey archive loaded");
        Ok(archive)
    }

    /// Deserializes an archive from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArchiveError> {
        decode_from_slice(bytes, standard())
            .map(|(archive, _)| archive) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArchiveError::Decode(e.to_string()))
    }
}
