//! Configuration for recfile
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{RecordError, Result};
use crate::record::Person;

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "person.dat";

/// Configuration for one write pass
#[derive(Debug, Clone)]
pub struct Config {
    /// File that receives the records. Existing content is truncated.
    pub output_path: PathBuf,

    /// Records to write, in on-disk order
    pub records: Vec<Person>,

    /// Whether to fsync before closing
    pub sync_mode: SyncMode,
}

/// Durability strategy applied when the writer finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncMode {
    /// Flush to the OS only
    #[default]
    None,

    /// Flush and fsync once, just before close
    OnFinish,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            records: Person::defaults().to_vec(),
            sync_mode: SyncMode::None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the output file path
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Replace the record list
    pub fn records(mut self, records: impl IntoIterator<Item = Person>) -> Self {
        self.config.records = records.into_iter().collect();
        self
    }

    /// Append one record after the current list
    pub fn record(mut self, record: Person) -> Self {
        self.config.records.push(record);
        self
    }

    /// Set the sync mode
    pub fn sync_mode(mut self, mode: SyncMode) -> Self {
        self.config.sync_mode = mode;
        self
    }

    pub fn build(self) -> Result<Config> {
        if self.config.output_path.as_os_str().is_empty() {
            return Err(RecordError::Config("output path is empty".to_string()));
        }
        Ok(self.config)
    }
}
