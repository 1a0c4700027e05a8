// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{num::NonZeroUsize, path::Path};

use miette::{Context, IntoDiagnostic};
use serde::{Deserialize, Serialize};

use crate::{ListError, ListResult};

/// Capacity of each segment when nothing else is configured.
pub const DEFAULT_CHUNK_CAPACITY: usize = 16;

/// Construction time configuration of a [`super::ChunkedList`].
///
/// `chunk_capacity` controls the time / space tradeoff. Larger values mean fewer chain
/// nodes and fewer segment allocations and collapses, but more items to shift inside a
/// segment on a mid list insert or remove. It must be at least 1.
///
/// # Example
///
/// ```
/// use r3bl_chunky_list::{ChunkedList, ChunkedListConfig};
///
/// let config = ChunkedListConfig::try_from_json_str(r#"{ "chunk_capacity": 8 }"#).unwrap();
/// let list: ChunkedList<u8> = ChunkedList::try_from_config(config).unwrap();
/// assert_eq!(list.chunk_capacity(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkedListConfig {
    pub chunk_capacity: usize,
}

impl Default for ChunkedListConfig {
    fn default() -> Self {
        Self {
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
        }
    }
}

impl ChunkedListConfig {
    #[must_use]
    pub fn new(chunk_capacity: usize) -> Self { Self { chunk_capacity } }

    /// # Errors
    ///
    /// [`ListError::InvalidChunkCapacity`] if the capacity is 0.
    pub fn try_chunk_capacity(&self) -> ListResult<NonZeroUsize> {
        NonZeroUsize::new(self.chunk_capacity).ok_or(ListError::InvalidChunkCapacity {
            requested: self.chunk_capacity,
        })
    }

    /// Missing fields fall back to [`ChunkedListConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid JSON config object.
    pub fn try_from_json_str(json: &str) -> miette::Result<Self> {
        serde_json::from_str(json)
            .into_diagnostic()
            .context(ConfigErrorCouldNot::ParseConfigJson)
    }

    /// # Errors
    ///
    /// Returns an error if the file can't be read, or does not hold a valid JSON
    /// config object.
    pub fn try_load_from_json_file(path: impl AsRef<Path>) -> miette::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).into_diagnostic().context(
            ConfigErrorCouldNot::ReadConfigFile {
                config_file_path: path.display().to_string(),
            },
        )?;

        let it = Self::try_from_json_str(&json)?;

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📐 Loaded chunked list config",
            config_file_path = %path.display(),
            config = ?it
        );

        Ok(it)
    }
}

pub mod config_error {
    #[derive(thiserror::Error, Debug, miette::Diagnostic)]
    pub enum ConfigErrorCouldNot {
        #[error("📑 Could not read config file: '{config_file_path}'")]
        ReadConfigFile { config_file_path: String },

        #[error("🔍 Could not parse config JSON")]
        #[diagnostic(help(r#"Expected an object like {{ "chunk_capacity": 16 }}"#))]
        ParseConfigJson,
    }
}
pub use config_error::ConfigErrorCouldNot;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ChunkedListConfig::default();
        assert_eq!(config.chunk_capacity, DEFAULT_CHUNK_CAPACITY);
        assert_eq!(
            config.try_chunk_capacity().map(NonZeroUsize::get),
            Ok(DEFAULT_CHUNK_CAPACITY)
        );
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert_eq!(
            ChunkedListConfig::new(0).try_chunk_capacity(),
            Err(ListError::InvalidChunkCapacity { requested: 0 })
        );
    }

    #[test]
    fn test_parse_json() {
        let config = ChunkedListConfig::try_from_json_str(r#"{"chunk_capacity": 3}"#).unwrap();
        assert_eq!(config, ChunkedListConfig::new(3));

        let config = ChunkedListConfig::try_from_json_str("{}").unwrap();
        assert_eq!(config, ChunkedListConfig::default());

        assert!(ChunkedListConfig::try_from_json_str("[1, 2]").is_err());
        assert!(ChunkedListConfig::try_from_json_str(r#"{"chunk_capacity": -1}"#).is_err());
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let dir = std::env::temp_dir()
            .join(format!("r3bl_chunky_list_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");

        let json = serde_json::to_string(&ChunkedListConfig::new(7)).unwrap();
        std::fs::write(&path, json).unwrap();

        let config = ChunkedListConfig::try_load_from_json_file(&path).unwrap();
        assert_eq!(config.chunk_capacity, 7);

        assert!(ChunkedListConfig::try_load_from_json_file(dir.join("missing.json")).is_err());
    }
}
