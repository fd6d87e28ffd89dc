// Rust guideline compliant 2026-10-19

//! Catalog sources for canary config snapshots.
//!
//! A catalog source hands out a fully materialized list of canary configs.
//! The resolver never talks to a source itself; callers fetch a snapshot and
//! pass it in, so they stay in charge of caching and retries.

use crate::{CanaryConfig, Error, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Source of canary config catalog snapshots.
pub trait CatalogSource {
    /// Fetches every canary config in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or parsed.
    fn fetch_all_configs(&self) -> Result<Vec<CanaryConfig>>;
}

/// An in-memory catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    configs: Vec<CanaryConfig>,
}

impl StaticCatalog {
    /// Creates a catalog holding the given configs.
    pub fn new(configs: Vec<CanaryConfig>) -> Self {
        Self { configs }
    }

    /// Returns the configs in this catalog.
    pub fn configs(&self) -> &[CanaryConfig] {
        &self.configs
    }
}

impl CatalogSource for StaticCatalog {
    fn fetch_all_configs(&self) -> Result<Vec<CanaryConfig>> {
        Ok(self.configs.clone())
    }
}

/// A catalog snapshot stored on disk.
///
/// The file holds either a JSON array of configs or JSON Lines with one
/// config per line. Blank lines are skipped.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    /// Creates a file-backed catalog.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the snapshot file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { path })
    }

    /// Returns a reference to the snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses a catalog snapshot from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, or if the content is neither a JSON
    /// array of configs nor valid JSON Lines. Malformed lines are reported with
    /// their line number rather than skipped, since a dropped record could hide
    /// an ambiguous match.
    pub fn parse<R: Read>(mut reader: R) -> Result<Vec<CanaryConfig>> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        if content.trim_start().starts_with('[') {
            return Ok(serde_json::from_str(&content)?);
        }

        let mut configs = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let config = serde_json::from_str::<CanaryConfig>(line).map_err(|e| {
                Error::InvalidCatalog {
                    line: index + 1,
                    message: e.to_string(),
                }
            })?;
            configs.push(config);
        }

        Ok(configs)
    }
}

impl CatalogSource for FileCatalog {
    fn fetch_all_configs(&self) -> Result<Vec<CanaryConfig>> {
        let file = std::fs::File::open(&self.path)?;
        Self::parse(file)
    }
}
